//! # Control Codecs
//!
//! Each control kind a field can render as has one entry in [`CONTROLS`]:
//! its `type` tag, whether it gets a label, and the function that renders it.
//! Adding a control means adding a codec module and a row here.
//!
//! | Tag | Codec | Labelled |
//! |-----|-------|----------|
//! | `text`, `""` | [`input`] | yes |
//! | `password` | [`input`] | yes |
//! | `hidden` | [`input`] | no |
//! | `button` | [`input`] | yes |
//! | `textarea` | [`input`] | yes |
//! | `radio` | [`choice`] | yes |
//! | `checkbox` | [`choice`] | yes |
//! | `select` | [`select`] | yes |
//!
//! Every piece of text a codec inserts into the document goes through
//! [`escape`], including labels and option captions taken from the schema.

use crate::error::Result;
use crate::meta::FieldMeta;
use crate::value::FieldRef;
use std::fmt;

pub mod choice;
pub mod input;
pub mod select;

pub use choice::ChoiceSpec;
pub use select::{parse_option_list, SelectOption};

/// The UI widget category a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Text,
    Password,
    Hidden,
    Button,
    Textarea,
    Radio,
    Checkbox,
    Select,
}

impl ControlKind {
    /// The canonical `type` tag, also used as the HTML input type.
    pub fn tag(self) -> &'static str {
        match self {
            ControlKind::Text => "text",
            ControlKind::Password => "password",
            ControlKind::Hidden => "hidden",
            ControlKind::Button => "button",
            ControlKind::Textarea => "textarea",
            ControlKind::Radio => "radio",
            ControlKind::Checkbox => "checkbox",
            ControlKind::Select => "select",
        }
    }
}

/// Everything a codec needs to render one field.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub meta: &'a FieldMeta,
    pub kind: ControlKind,
    pub value: FieldRef<'a>,
    /// The field value in its form representation.
    pub text: String,
    pub emit_default: bool,
}

impl RenderContext<'_> {
    /// ` name='key'` plus ` required` when the field is mandatory.
    pub fn name_attrs(&self) -> String {
        let mut attrs = format!(" name='{}'", escape(self.meta.key));
        if self.meta.required.is_true() {
            attrs.push_str(" required");
        }
        attrs
    }

    /// Whether the current field value selects `candidate`.
    ///
    /// Booleans select by being true; other kinds compare their form text.
    pub fn current_is(&self, candidate: &str) -> bool {
        match self.value {
            FieldRef::Bool(flag) => *flag,
            _ => self.text == candidate,
        }
    }
}

pub type RenderFn = fn(&RenderContext<'_>) -> Result<String>;

/// Registry entry for one control kind.
pub struct ControlSpec {
    pub tag: &'static str,
    pub kind: ControlKind,
    /// Rendered with a leading label and a trailing line break.
    pub labeled: bool,
    pub render: RenderFn,
}

impl ControlSpec {
    const fn new(tag: &'static str, kind: ControlKind, render: RenderFn) -> Self {
        Self {
            tag,
            kind,
            labeled: true,
            render,
        }
    }

    const fn unlabeled(mut self) -> Self {
        self.labeled = false;
        self
    }

    /// Render the field, wrapped in its label when the control is labelled.
    pub fn render_field(&self, ctx: &RenderContext<'_>) -> Result<String> {
        let fragment = (self.render)(ctx)?;
        if !self.labeled {
            return Ok(fragment);
        }
        Ok(format!(
            "<label for name='{}'>{}</label>{}<br>",
            escape(ctx.meta.key),
            escape(ctx.meta.label()),
            fragment
        ))
    }
}

impl fmt::Debug for ControlSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlSpec")
            .field("tag", &self.tag)
            .field("kind", &self.kind)
            .field("labeled", &self.labeled)
            .finish_non_exhaustive()
    }
}

/// Registry of all supported controls.
pub const CONTROLS: &[ControlSpec] = &[
    ControlSpec::new("text", ControlKind::Text, input::render_input),
    ControlSpec::new("password", ControlKind::Password, input::render_input),
    ControlSpec::new("hidden", ControlKind::Hidden, input::render_input).unlabeled(),
    ControlSpec::new("button", ControlKind::Button, input::render_input),
    ControlSpec::new("textarea", ControlKind::Textarea, input::render_textarea),
    ControlSpec::new("radio", ControlKind::Radio, choice::render),
    ControlSpec::new("checkbox", ControlKind::Checkbox, choice::render),
    ControlSpec::new("select", ControlKind::Select, select::render),
];

/// Look up the control for a `type` tag. The empty tag means text.
pub fn get_control(tag: &str) -> Option<&'static ControlSpec> {
    let tag = if tag.is_empty() { "text" } else { tag };
    CONTROLS.iter().find(|spec| spec.tag == tag)
}

/// Escapes text for insertion into the document, inside or outside quotes.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('\'', "&#39;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&#34;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_every_kind() {
        for kind in [
            ControlKind::Text,
            ControlKind::Password,
            ControlKind::Hidden,
            ControlKind::Button,
            ControlKind::Textarea,
            ControlKind::Radio,
            ControlKind::Checkbox,
            ControlKind::Select,
        ] {
            let spec = get_control(kind.tag()).unwrap();
            assert_eq!(spec.kind, kind);
        }
    }

    #[test]
    fn empty_tag_defaults_to_text() {
        assert_eq!(get_control("").unwrap().kind, ControlKind::Text);
    }

    #[test]
    fn unknown_tag_is_absent() {
        assert!(get_control("date").is_none());
        assert!(get_control("Text").is_none());
    }

    #[test]
    fn only_hidden_is_unlabeled() {
        let unlabeled: Vec<_> = CONTROLS
            .iter()
            .filter(|spec| !spec.labeled)
            .map(|spec| spec.tag)
            .collect();
        assert_eq!(unlabeled, vec!["hidden"]);
    }

    #[test]
    fn escape_covers_markup_and_quotes() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&#34;x&#34;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }
}
