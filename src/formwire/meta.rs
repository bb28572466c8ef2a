//! Field metadata.
//!
//! Turns a field's raw [`FieldTags`] into validated values. Validation is
//! lazy and per tag: encode and decode each resolve only the tags they use,
//! so a malformed `default` tag breaks encoding but not decoding.

use crate::controls::{get_control, ControlSpec};
use crate::error::{FormError, Result, SchemaIssue, Unsupported};
use crate::schema::{FieldDef, FieldTags};

/// `field` value that excludes a field from the form.
pub const EXCLUDED_KEY: &str = "-";

/// A tri-state boolean annotation: `"true"`, `"false"` or unset (`""`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flag {
    True,
    False,
    #[default]
    Unset,
}

impl Flag {
    pub fn parse(literal: &str) -> Option<Self> {
        match literal {
            "true" => Some(Flag::True),
            "false" => Some(Flag::False),
            "" => Some(Flag::Unset),
            _ => None,
        }
    }

    pub fn is_true(self) -> bool {
        self == Flag::True
    }
}

/// Validates an external form key.
///
/// Keys may contain ASCII letters only. The empty key is accepted here;
/// callers treat it as an exclusion before validating.
///
/// ```
/// use formwire::meta::validate_key;
///
/// assert!(validate_key("salary").is_ok());
/// assert!(validate_key("clickMe").is_ok());
/// assert!(validate_key("token_1").is_err());
/// assert!(validate_key("age2").is_err());
/// ```
pub fn validate_key(key: &str) -> std::result::Result<(), SchemaIssue> {
    match key.chars().find(|ch| !ch.is_ascii_alphabetic()) {
        Some(ch) => Err(SchemaIssue::InvalidKeyCharacter(ch)),
        None => Ok(()),
    }
}

/// Validated metadata of one non-excluded field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMeta {
    pub ident: &'static str,
    pub key: &'static str,
    pub required: Flag,
    pub tags: FieldTags,
}

impl FieldMeta {
    /// Resolve the key and `required` flag of `def`.
    ///
    /// Returns `Ok(None)` for excluded fields without looking at any other tag.
    pub fn resolve(def: &FieldDef) -> Result<Option<Self>> {
        let key = def.tags.get("field");
        if key.is_empty() || key == EXCLUDED_KEY {
            return Ok(None);
        }
        validate_key(key).map_err(|issue| schema_error(def.ident, "field", key, issue))?;

        let required = parse_flag(def.ident, "required", def.tags.get("required"))?;

        Ok(Some(Self {
            ident: def.ident,
            key,
            required,
            tags: def.tags,
        }))
    }

    pub fn emit_default(&self) -> Result<Flag> {
        parse_flag(self.ident, "default", self.tags.get("default"))
    }

    /// The control registered for the `type` tag; unset means text.
    pub fn control(&self) -> Result<&'static ControlSpec> {
        let tag = self.tags.get("type");
        get_control(tag).ok_or_else(|| FormError::UnsupportedKind {
            field: self.ident,
            kind: Unsupported::Control(tag.to_string()),
        })
    }

    pub fn label(&self) -> &'static str {
        self.tags.get("name")
    }

    pub fn tag(&self, name: &str) -> &'static str {
        self.tags.get(name)
    }
}

fn parse_flag(ident: &'static str, tag: &'static str, literal: &str) -> Result<Flag> {
    Flag::parse(literal).ok_or_else(|| schema_error(ident, tag, literal, SchemaIssue::InvalidFlag))
}

pub(crate) fn schema_error(
    field: &'static str,
    tag: &'static str,
    value: &str,
    issue: SchemaIssue,
) -> FormError {
    FormError::SchemaInvalid {
        field,
        tag,
        value: value.to_string(),
        issue,
    }
}
