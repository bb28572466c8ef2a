//! Error types for the form engine.
//!
//! Every failure the engine can produce is one of four kinds, and each carries
//! enough structure for a caller to react without parsing the message:
//!
//! | Variant | Cause |
//! |---------|-------|
//! | [`FormError::SchemaInvalid`] | an annotation literal or spec is malformed |
//! | [`FormError::MissingRequired`] | a mandatory field was posted empty |
//! | [`FormError::ConversionFailed`] | posted text does not fit the field's type |
//! | [`FormError::UnsupportedKind`] | a field type or control kind is not handled |
//!
//! Encode and decode stop at the first error; nothing is aggregated.

use crate::value::ValueKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("invalid `{tag}` annotation {value:?} on field `{field}`: {issue}")]
    SchemaInvalid {
        field: &'static str,
        tag: &'static str,
        value: String,
        issue: SchemaIssue,
    },

    #[error("required value for `{key}` is empty")]
    MissingRequired { key: String },

    #[error("cannot convert {input:?} posted for `{key}` to {kind}: {cause}")]
    ConversionFailed {
        key: String,
        kind: ValueKind,
        input: String,
        cause: ConversionError,
    },

    #[error("field `{field}` uses unsupported {kind}")]
    UnsupportedKind {
        field: &'static str,
        kind: Unsupported,
    },
}

/// What exactly is wrong with a schema annotation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaIssue {
    #[error("key contains invalid character '{0}' (only ASCII letters allowed)")]
    InvalidKeyCharacter(char),

    #[error("expected \"true\", \"false\" or an empty value")]
    InvalidFlag,

    #[error("expected `value[;checked]`, found {0} parts")]
    ChoicePartCount(usize),

    #[error("unknown marker {found:?}, only {expected:?} is allowed")]
    InvalidMarker {
        expected: &'static str,
        found: String,
    },

    #[error("option item {0:?} is not of the form `label=value`")]
    MalformedOption(String),

    #[error("schema declares {declared} fields but the record exposes {exposed}")]
    FieldCountMismatch { declared: usize, exposed: usize },
}

/// Why a posted value could not be converted.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    #[error("invalid syntax")]
    Syntax,

    #[error("value out of range")]
    Range,
}

/// The unsupported thing named by [`FormError::UnsupportedKind`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Unsupported {
    #[error("value type `{0}`")]
    Value(&'static str),

    #[error("control type {0:?}")]
    Control(String),
}

pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_error_names_field_tag_and_value() {
        let err = FormError::SchemaInvalid {
            field: "resident",
            tag: "radio",
            value: "1;maybe".to_string(),
            issue: SchemaIssue::InvalidMarker {
                expected: "checked",
                found: "maybe".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "invalid `radio` annotation \"1;maybe\" on field `resident`: unknown marker \"maybe\", only \"checked\" is allowed"
        );
    }

    #[test]
    fn conversion_error_names_key_and_input() {
        let err = FormError::ConversionFailed {
            key: "age".to_string(),
            kind: ValueKind::I64,
            input: "abc".to_string(),
            cause: ConversionError::Syntax,
        };
        assert_eq!(
            err.to_string(),
            "cannot convert \"abc\" posted for `age` to i64: invalid syntax"
        );
    }

    #[test]
    fn unsupported_display() {
        let err = FormError::UnsupportedKind {
            field: "ratio",
            kind: Unsupported::Value("f32"),
        };
        assert_eq!(err.to_string(), "field `ratio` uses unsupported value type `f32`");

        let err = FormError::UnsupportedKind {
            field: "when",
            kind: Unsupported::Control("date".to_string()),
        };
        assert_eq!(err.to_string(), "field `when` uses unsupported control type \"date\"");
    }
}
