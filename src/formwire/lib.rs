//! # Formwire Architecture
//!
//! Formwire marshals plain Rust records to and from HTML forms. A record
//! declares its form schema once, with `#[form(...)]` annotations on its
//! fields; the engine then renders it as a complete form document
//! ([`encode`]) and fills it back in from posted key/value pairs ([`decode`]).
//!
//! The engine knows nothing about HTTP. It takes a record and returns a
//! string, or takes a [`FormSource`] and mutates a record. The `formwire`
//! binary is one thin client of it; a web handler would be another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (args.rs, wired by main.rs)                            │
//! │  - Loads config, builds a FormSource, prints results        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Entry points (encode.rs, decode.rs)                        │
//! │  - Walk the record's fields in declaration order            │
//! │  - Stop at the first error                                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Field machinery                                            │
//! │  - meta: annotation parsing and validation                  │
//! │  - controls: one codec per control kind                     │
//! │  - convert: text <-> value conversion                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Declaring a record
//!
//! ```
//! formwire::form_record! {
//!     #[derive(Debug, Default)]
//!     pub struct Signup {
//!         #[form(field = "email", required = "true", name = "Email")]
//!         pub email: String,
//!         #[form(field = "newsletter", type = "checkbox", checkbox = "1", name = "Newsletter")]
//!         pub newsletter: bool,
//!     }
//! }
//!
//! let html = formwire::encode(&Signup::default()).unwrap();
//! assert!(html.contains("<input name='email' required type='text'>"));
//!
//! let posted = formwire::FormData::parse_query("email=a%40b.c&newsletter=1");
//! let mut signup = Signup::default();
//! formwire::decode(&mut signup, &posted).unwrap();
//! assert_eq!(signup.email, "a@b.c");
//! assert!(signup.newsletter);
//! ```
//!
//! ## Module Overview
//!
//! - [`schema`]: The [`Form`] trait, field definitions and `form_record!`
//! - [`value`]: Typed views of field slots
//! - [`meta`]: Resolving and validating per-field annotations
//! - [`controls`]: Control registry and HTML fragment codecs
//! - [`convert`]: Value formatting and posted-text parsing
//! - [`source`]: The [`FormSource`] trait and [`FormData`]
//! - [`encode`] / [`decode`](mod@decode): The two entry points
//! - [`config`]: Document options and `formwire.json`
//! - [`demo`]: The registration record served by the binary
//! - [`error`]: Error types

pub mod config;
pub mod controls;
pub mod convert;
pub mod decode;
pub mod demo;
pub mod encode;
pub mod error;
pub mod meta;
pub mod schema;
pub mod source;
pub mod value;
mod walker;

pub use config::{ConfigError, DocumentOptions, FormwireConfig};
pub use decode::decode;
pub use encode::{encode, encode_with};
pub use error::{ConversionError, FormError, Result, SchemaIssue, Unsupported};
pub use schema::{FieldDef, FieldTags, Form};
pub use source::{FormData, FormSource};
pub use value::{FieldMut, FieldRef, FormValue, ValueKind};
