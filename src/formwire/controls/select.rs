//! Option lists.
//!
//! The `select` tag holds comma-separated `label=value[;selected]` entries,
//! rendered in order as `<option>` elements.

use super::{escape, RenderContext};
use crate::error::{Result, SchemaIssue};
use crate::meta::schema_error;

pub const SELECTED_MARKER: &str = "selected";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub label: &'static str,
    pub value: &'static str,
    pub selected: bool,
}

/// Parse a `select` spec of field `ident`.
///
/// ```
/// use formwire::controls::parse_option_list;
///
/// let options = parse_option_list("gender", "A=1,B=2;selected").unwrap();
/// assert_eq!(options.len(), 2);
/// assert_eq!((options[1].label, options[1].value, options[1].selected), ("B", "2", true));
/// ```
pub fn parse_option_list(ident: &'static str, spec: &'static str) -> Result<Vec<SelectOption>> {
    spec.split(',')
        .map(|entry| parse_option(ident, spec, entry))
        .collect()
}

fn parse_option(
    ident: &'static str,
    spec: &'static str,
    entry: &'static str,
) -> Result<SelectOption> {
    let (item, selected) = match entry.split(';').collect::<Vec<_>>().as_slice() {
        [item] => (*item, false),
        [item, marker] if *marker == SELECTED_MARKER => (*item, true),
        [_, marker] => {
            return Err(schema_error(
                ident,
                "select",
                spec,
                SchemaIssue::InvalidMarker {
                    expected: SELECTED_MARKER,
                    found: marker.to_string(),
                },
            ))
        }
        _ => {
            return Err(schema_error(
                ident,
                "select",
                spec,
                SchemaIssue::MalformedOption(entry.to_string()),
            ))
        }
    };

    match item.split('=').collect::<Vec<_>>().as_slice() {
        [label, value] => Ok(SelectOption {
            label: *label,
            value: *value,
            selected,
        }),
        _ => Err(schema_error(
            ident,
            "select",
            spec,
            SchemaIssue::MalformedOption(item.to_string()),
        )),
    }
}

/// Render a `<select>` with one `<option>` per entry.
///
/// With `default = "true"` the field's current value decides the selection
/// instead of the marker, as for radio buttons and checkboxes.
pub fn render(ctx: &RenderContext<'_>) -> Result<String> {
    let options = parse_option_list(ctx.meta.ident, ctx.meta.tag("select"))?;

    let mut html = format!("<select{}>", ctx.name_attrs());
    for option in &options {
        let selected = if ctx.emit_default {
            ctx.current_is(option.value)
        } else {
            option.selected
        };
        html.push_str(&format!("<option value='{}'", escape(option.value)));
        if selected {
            html.push_str(" selected");
        }
        html.push_str(&format!(">{}</option>", escape(option.label)));
    }
    html.push_str("</select>");
    Ok(html)
}
