//! Rendering a record as a form document.

use crate::config::DocumentOptions;
use crate::controls::{escape, RenderContext};
use crate::convert::format_value;
use crate::error::Result;
use crate::meta::FieldMeta;
use crate::schema::Form;
use crate::value::FieldRef;
use crate::walker::walk;
use tracing::instrument;

/// Render `record` as a form document with the default [`DocumentOptions`].
pub fn encode<F: Form>(record: &F) -> Result<String> {
    encode_with(record, &DocumentOptions::default())
}

/// Render `record` as a form document.
///
/// Fields appear in declaration order, followed by one submit control.
/// Excluded fields produce nothing.
#[instrument(skip_all, fields(record = std::any::type_name::<F>()))]
pub fn encode_with<F: Form>(record: &F, options: &DocumentOptions) -> Result<String> {
    let mut document = format!(
        "<html><head><title>{}</title></head><body><form action='{}' method='post' enctype='multipart/form-data'>",
        escape(&options.title),
        escape(&options.action)
    );

    walk::<F, _>(record.fields(), |meta, value| {
        document.push_str(&render_field(&meta, value)?);
        Ok(())
    })?;

    document.push_str(&format!(
        "<input type='submit' value='{}'></form></body></html>",
        escape(&options.submit_label)
    ));
    Ok(document)
}

fn render_field(meta: &FieldMeta, value: FieldRef<'_>) -> Result<String> {
    let text = format_value(meta.ident, meta.key, &value)?;
    let emit_default = meta.emit_default()?.is_true();
    let control = meta.control()?;

    let ctx = RenderContext {
        meta,
        kind: control.kind,
        value,
        text,
        emit_default,
    };
    control.render_field(&ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConversionError, FormError, SchemaIssue, Unsupported};
    use crate::value::ValueKind;
    use std::time::Duration;

    crate::form_record! {
        #[derive(Debug, Default)]
        struct Profile {
            #[form(field = "name", required = "true", name = "Name", default = "true")]
            name: String,
            #[form(field = "token", type = "hidden", default = "true")]
            token: String,
            #[form(field = "", type = "hidden", default = "true")]
            skipped: u32,
        }
    }

    const PREAMBLE: &str = "<html><head><title>Dynamically generated form</title></head><body><form action='/form' method='post' enctype='multipart/form-data'>";
    const POSTAMBLE: &str = "<input type='submit' value='Submit'></form></body></html>";

    #[test]
    fn wraps_fields_in_document() {
        let profile = Profile {
            name: "Ann".to_string(),
            token: "t0k".to_string(),
            skipped: 99,
        };
        let html = encode(&profile).unwrap();
        assert_eq!(
            html,
            format!(
                "{PREAMBLE}<label for name='name'>Name</label><input name='name' required type='text' value='Ann'><br>\
                 <input name='token' type='hidden' value='t0k'>{POSTAMBLE}"
            )
        );
        assert!(!html.contains("99"));
    }

    #[test]
    fn options_are_escaped() {
        let options = DocumentOptions {
            title: "Q&A".to_string(),
            action: "/post?x='1'".to_string(),
            submit_label: "<Send>".to_string(),
        };
        let html = encode_with(&Profile::default(), &options).unwrap();
        assert!(html.starts_with("<html><head><title>Q&amp;A</title></head><body><form action='/post?x=&#39;1&#39;'"));
        assert!(html.ends_with("<input type='submit' value='&lt;Send&gt;'></form></body></html>"));
    }

    crate::form_record! {
        #[derive(Default)]
        struct BadDefault {
            #[form(field = "ok")]
            ok: String,
            #[form(field = "age", default = "yes")]
            age: i64,
        }
    }

    #[test]
    fn invalid_default_fails() {
        let err = encode(&BadDefault::default()).unwrap_err();
        assert_eq!(
            err,
            FormError::SchemaInvalid {
                field: "age",
                tag: "default",
                value: "yes".to_string(),
                issue: SchemaIssue::InvalidFlag,
            }
        );
    }

    crate::form_record! {
        #[derive(Default)]
        struct BadRadio {
            #[form(field = "ok", default = "true")]
            ok: String,
            #[form(field = "resident", type = "radio", radio = "1;maybe", name = "Resident")]
            resident: bool,
        }
    }

    #[test]
    fn invalid_radio_marker_fails() {
        let err = encode(&BadRadio::default()).unwrap_err();
        assert_eq!(
            err,
            FormError::SchemaInvalid {
                field: "resident",
                tag: "radio",
                value: "1;maybe".to_string(),
                issue: SchemaIssue::InvalidMarker {
                    expected: "checked",
                    found: "maybe".to_string(),
                },
            }
        );
    }

    crate::form_record! {
        #[derive(Default)]
        struct BadSelect {
            #[form(field = "gender", type = "select", select = "A=1;checked", name = "Gender")]
            gender: String,
        }
    }

    #[test]
    fn invalid_select_marker_fails() {
        let err = encode(&BadSelect::default()).unwrap_err();
        assert!(matches!(
            err,
            FormError::SchemaInvalid {
                field: "gender",
                tag: "select",
                issue: SchemaIssue::InvalidMarker {
                    expected: "selected",
                    ..
                },
                ..
            }
        ));
    }

    crate::form_record! {
        #[derive(Default)]
        struct Uptime {
            #[form(field = "ttl", type = "hidden", default = "true")]
            ttl: Duration,
        }
    }

    #[test]
    fn duration_beyond_decodable_range_fails() {
        let uptime = Uptime {
            ttl: Duration::from_nanos(u64::MAX),
        };
        let err = encode(&uptime).unwrap_err();
        assert!(matches!(
            err,
            FormError::ConversionFailed {
                ref key,
                kind: ValueKind::Duration,
                cause: ConversionError::Range,
                ..
            } if key == "ttl"
        ));
    }

    crate::form_record! {
        #[derive(Default)]
        struct Exotic {
            #[form(field = "ratio")]
            ratio: f32,
            #[form(field = "when", type = "date")]
            when: String,
        }
    }

    #[test]
    fn unsupported_value_type_fails_first() {
        let err = encode(&Exotic::default()).unwrap_err();
        assert_eq!(
            err,
            FormError::UnsupportedKind {
                field: "ratio",
                kind: Unsupported::Value("f32"),
            }
        );
    }

    crate::form_record! {
        #[derive(Default)]
        struct DateOnly {
            #[form(field = "when", type = "date")]
            when: String,
        }
    }

    #[test]
    fn unsupported_control_fails() {
        let err = encode(&DateOnly::default()).unwrap_err();
        assert_eq!(
            err,
            FormError::UnsupportedKind {
                field: "when",
                kind: Unsupported::Control("date".to_string()),
            }
        );
    }
}
