//! Reading posted form data back into a record.

use crate::controls::{get_control, ChoiceSpec, ControlKind};
use crate::convert::assign;
use crate::error::{FormError, Result};
use crate::meta::FieldMeta;
use crate::schema::Form;
use crate::source::FormSource;
use crate::value::FieldMut;
use crate::walker::walk;
use tracing::{instrument, trace};

/// Populate `record` from `source`, field by field in declaration order.
///
/// Returns the first error encountered. Fields decoded before the failing one
/// keep their new values; decode into a scratch record and copy it over on
/// success when that matters.
///
/// An empty or missing value fails a required field and otherwise leaves the
/// field unchanged, except for booleans: a boolean radio field becomes true
/// exactly when the posted value equals its radio value, and any other
/// boolean becomes true exactly when a non-empty value was posted.
#[instrument(skip_all, fields(record = std::any::type_name::<F>()))]
pub fn decode<F: Form, S: FormSource + ?Sized>(record: &mut F, source: &S) -> Result<()> {
    walk::<F, _>(record.fields_mut(), |meta, slot| {
        let posted = source.lookup(meta.key).unwrap_or("");
        trace!(key = meta.key, empty = posted.is_empty(), "posted value");

        if meta.required.is_true() && posted.is_empty() {
            return Err(FormError::MissingRequired {
                key: meta.key.to_string(),
            });
        }
        read_field(&meta, slot, posted)
    })
}

fn read_field(meta: &FieldMeta, slot: FieldMut<'_>, posted: &str) -> Result<()> {
    match slot {
        FieldMut::Bool(flag) if is_radio(meta) => {
            let choice = ChoiceSpec::parse(meta.ident, "radio", meta.tag("radio"))?;
            *flag = choice.matches(posted);
            Ok(())
        }
        slot @ (FieldMut::Bool(_) | FieldMut::Unsupported(_)) => {
            assign(meta.ident, meta.key, slot, posted)
        }
        _ if posted.is_empty() => Ok(()),
        slot => assign(meta.ident, meta.key, slot, posted),
    }
}

// Decode never rejects an unknown `type`; only radio changes behaviour.
fn is_radio(meta: &FieldMeta) -> bool {
    get_control(meta.tag("type")).is_some_and(|spec| spec.kind == ControlKind::Radio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConversionError, SchemaIssue, Unsupported};
    use crate::source::FormData;
    use crate::value::ValueKind;

    crate::form_record! {
        #[derive(Debug, Default, Clone, PartialEq)]
        struct Person {
            #[form(field = "name", required = "true")]
            name: String,
            #[form(field = "age")]
            age: i64,
            #[form(field = "kids")]
            kids: i32,
            #[form(field = "salary")]
            salary: f64,
            #[form(field = "resident", type = "radio", radio = "1;checked")]
            resident: bool,
            #[form(field = "resident", type = "radio", radio = "2")]
            non_resident: bool,
            #[form(field = "agree", type = "checkbox", checkbox = "1")]
            agree: bool,
        }
    }

    fn posted(pairs: &[(&str, &str)]) -> FormData {
        FormData::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn reads_every_kind() {
        let mut person = Person::default();
        decode(
            &mut person,
            &posted(&[
                ("name", "Ann"),
                ("age", "18"),
                ("kids", "0x2"),
                ("salary", "10.5"),
                ("resident", "2"),
                ("agree", "on"),
            ]),
        )
        .unwrap();
        assert_eq!(
            person,
            Person {
                name: "Ann".to_string(),
                age: 18,
                kids: 2,
                salary: 10.5,
                resident: false,
                non_resident: true,
                agree: true,
            }
        );
    }

    #[test]
    fn missing_required_leaves_field_alone() {
        let mut person = Person {
            name: "before".to_string(),
            ..Person::default()
        };
        let err = decode(&mut person, &posted(&[("name", ""), ("age", "3")])).unwrap_err();
        assert_eq!(
            err,
            FormError::MissingRequired {
                key: "name".to_string()
            }
        );
        assert_eq!(person.name, "before");
        assert_eq!(person.age, 0);
    }

    #[test]
    fn conversion_failure_names_key_and_input() {
        let mut person = Person::default();
        let err = decode(&mut person, &posted(&[("name", "Ann"), ("age", "abc")])).unwrap_err();
        assert_eq!(
            err,
            FormError::ConversionFailed {
                key: "age".to_string(),
                kind: ValueKind::I64,
                input: "abc".to_string(),
                cause: ConversionError::Syntax,
            }
        );
        // Fields before the failure keep their decoded values.
        assert_eq!(person.name, "Ann");
    }

    #[test]
    fn empty_optional_values_keep_previous_state() {
        let mut person = Person {
            age: 40,
            salary: 1.5,
            resident: true,
            agree: true,
            ..Person::default()
        };
        decode(&mut person, &posted(&[("name", "Bo")])).unwrap();
        assert_eq!(person.age, 40);
        assert_eq!(person.salary, 1.5);
        // Booleans always reflect the submission.
        assert!(!person.resident);
        assert!(!person.agree);
    }

    crate::form_record! {
        #[derive(Default)]
        struct BadRadio {
            #[form(field = "choice", type = "radio", radio = "1;maybe")]
            choice: bool,
        }
    }

    #[test]
    fn malformed_radio_spec_fails() {
        let err = decode(&mut BadRadio::default(), &FormData::new()).unwrap_err();
        assert!(matches!(
            err,
            FormError::SchemaInvalid {
                field: "choice",
                tag: "radio",
                issue: SchemaIssue::InvalidMarker { .. },
                ..
            }
        ));
    }

    crate::form_record! {
        #[derive(Default)]
        struct Lenient {
            #[form(field = "when", type = "date", default = "nope", select = "broken")]
            when: String,
            #[form(field = "count", type = "checkbox", checkbox = "1;maybe")]
            count: u64,
        }
    }

    #[test]
    fn decode_ignores_tags_it_does_not_use() {
        let mut record = Lenient::default();
        decode(&mut record, &posted(&[("when", "today"), ("count", "0b11")])).unwrap();
        assert_eq!(record.when, "today");
        assert_eq!(record.count, 3);
    }

    crate::form_record! {
        #[derive(Default)]
        struct Narrow {
            #[form(field = "small")]
            small: u8,
        }
    }

    #[test]
    fn unsupported_type_fails_even_without_value() {
        let err = decode(&mut Narrow::default(), &FormData::new()).unwrap_err();
        assert_eq!(
            err,
            FormError::UnsupportedKind {
                field: "small",
                kind: Unsupported::Value("u8"),
            }
        );
    }
}
