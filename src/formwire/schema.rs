//! # Record Schemas
//!
//! A form record is a plain struct whose fields are described by a static table
//! of [`FieldDef`]s. Each definition pairs the Rust field name with its
//! annotation bag ([`FieldTags`]), the same `tag = "value"` language a form
//! author writes:
//!
//! | Tag | Values | Effect |
//! |-----|--------|--------|
//! | `field` | letters, `""` or `"-"` | external key; empty or `-` excludes the field |
//! | `required` | `"true"`, `"false"`, `""` | mandatory on decode, `required` attribute on encode |
//! | `type` | control kind or `""` | which control to render (defaults to text) |
//! | `name` | any text | display label |
//! | `default` | `"true"`, `"false"`, `""` | pre-populate the control with the current value |
//! | `radio` / `checkbox` | `value[;checked]` | the control's value and initial state |
//! | `select` | `label=value[;selected],...` | the option list |
//!
//! The table is fixed at compile time and shared by every instance of the
//! record, so it is safe to read from any number of threads.
//!
//! ## Declaring a record
//!
//! The [`form_record!`](crate::form_record) macro declares the struct and its
//! [`Form`] impl in one go:
//!
//! ```
//! formwire::form_record! {
//!     #[derive(Debug, Default)]
//!     pub struct Login {
//!         #[form(field = "user", required = "true", name = "User", type = "text")]
//!         pub user: String,
//!         #[form(field = "remember", type = "checkbox", checkbox = "1", name = "Remember me")]
//!         pub remember: bool,
//!         pub internal_id: u64,
//!     }
//! }
//!
//! use formwire::Form;
//! assert_eq!(Login::schema().len(), 3);
//! assert_eq!(Login::schema()[0].tags.get("field"), "user");
//! assert_eq!(Login::schema()[2].tags.get("field"), "");
//! ```

use crate::value::{FieldMut, FieldRef};

/// The annotation bag attached to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTags(&'static [(&'static str, &'static str)]);

impl FieldTags {
    pub const fn new(tags: &'static [(&'static str, &'static str)]) -> Self {
        Self(tags)
    }

    /// Value of `tag`, or `""` when the tag is absent.
    ///
    /// When a tag is repeated the first occurrence wins.
    pub fn get(&self, tag: &str) -> &'static str {
        self.0
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|(_, value)| *value)
            .unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One declared field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Rust field name, used in error messages and logs.
    pub ident: &'static str,
    pub tags: FieldTags,
}

impl FieldDef {
    pub const fn new(ident: &'static str, tags: FieldTags) -> Self {
        Self { ident, tags }
    }
}

/// A record the engine can encode to and decode from form data.
///
/// `fields` and `fields_mut` must return one view per schema entry, in schema
/// order.
pub trait Form {
    fn schema() -> &'static [FieldDef]
    where
        Self: Sized;

    fn fields(&self) -> Vec<FieldRef<'_>>;

    fn fields_mut(&mut self) -> Vec<FieldMut<'_>>;
}

/// Declare a struct together with its [`Form`] implementation.
///
/// Each field may carry one `#[form(...)]` attribute listing its tags.
/// Fields without one are kept in the struct but excluded from the form.
/// Every field type must implement [`FormValue`](crate::FormValue).
///
/// Field attributes go in a fixed order: doc comments, then `#[form(...)]`,
/// then any `#[serde(...)]` attributes, which are passed through unchanged.
#[macro_export]
macro_rules! form_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $(#[form($($tag:ident = $value:literal),* $(,)?)])?
                $(#[serde($($serde:tt)*)])*
                $fvis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[doc = $doc])*
                $(#[serde($($serde)*)])*
                $fvis $field: $ty,
            )*
        }

        impl $crate::Form for $name {
            fn schema() -> &'static [$crate::FieldDef] {
                const SCHEMA: &[$crate::FieldDef] = &[
                    $(
                        $crate::FieldDef::new(
                            stringify!($field),
                            $crate::FieldTags::new(&[$($((stringify!($tag), $value),)*)?]),
                        ),
                    )*
                ];
                SCHEMA
            }

            fn fields(&self) -> ::std::vec::Vec<$crate::FieldRef<'_>> {
                ::std::vec![$($crate::FormValue::as_field(&self.$field),)*]
            }

            fn fields_mut(&mut self) -> ::std::vec::Vec<$crate::FieldMut<'_>> {
                ::std::vec![$($crate::FormValue::as_field_mut(&mut self.$field),)*]
            }
        }
    };
}
