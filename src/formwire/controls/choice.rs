//! Radio buttons and checkboxes.
//!
//! Both read a `value[;checked]` spec from the tag named after the control.
//! On decode a boolean radio field becomes true exactly when the posted value
//! equals the spec's value.

use super::{escape, RenderContext};
use crate::error::{Result, SchemaIssue};
use crate::meta::schema_error;

pub const CHECKED_MARKER: &str = "checked";

/// A parsed `value[;checked]` spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceSpec {
    pub value: &'static str,
    pub checked: bool,
}

impl ChoiceSpec {
    /// Parse `spec`, attributing errors to tag `tag` of field `ident`.
    pub fn parse(ident: &'static str, tag: &'static str, spec: &'static str) -> Result<Self> {
        let parts: Vec<&'static str> = spec.split(';').collect();
        match parts.as_slice() {
            [value] => Ok(Self {
                value: *value,
                checked: false,
            }),
            [value, marker] if *marker == CHECKED_MARKER => Ok(Self {
                value: *value,
                checked: true,
            }),
            [_, marker] => Err(schema_error(
                ident,
                tag,
                spec,
                SchemaIssue::InvalidMarker {
                    expected: CHECKED_MARKER,
                    found: marker.to_string(),
                },
            )),
            _ => Err(schema_error(
                ident,
                tag,
                spec,
                SchemaIssue::ChoicePartCount(parts.len()),
            )),
        }
    }

    pub fn matches(&self, posted: &str) -> bool {
        posted == self.value
    }
}

/// Render a radio or checkbox `<input>`.
///
/// With `default = "true"` the field's current value decides the initial
/// state; otherwise the spec's `checked` marker does.
pub fn render(ctx: &RenderContext<'_>) -> Result<String> {
    let tag = ctx.kind.tag();
    let choice = ChoiceSpec::parse(ctx.meta.ident, tag, ctx.meta.tag(tag))?;
    let checked = if ctx.emit_default {
        ctx.current_is(choice.value)
    } else {
        choice.checked
    };

    let mut html = format!(
        "<input{} type='{}' value='{}'",
        ctx.name_attrs(),
        tag,
        escape(choice.value)
    );
    if checked {
        html.push_str(" checked");
    }
    html.push('>');
    Ok(html)
}
