//! Field value views.
//!
//! A record exposes each of its fields as a [`FieldRef`] (for encoding) or a
//! [`FieldMut`] (for decoding). These are borrowed views tagged by primitive
//! kind, so the engine can read and write fields without knowing the record type.

use std::fmt;
use std::time::Duration;

/// The primitive kind of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Str,
    I32,
    I64,
    U32,
    U64,
    F64,
    /// Integer nanoseconds carried by [`std::time::Duration`].
    Duration,
    /// A Rust type the engine recognises but cannot marshal.
    Unsupported(&'static str),
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Bool => "bool",
            ValueKind::Str => "string",
            ValueKind::I32 => "i32",
            ValueKind::I64 => "i64",
            ValueKind::U32 => "u32",
            ValueKind::U64 => "u64",
            ValueKind::F64 => "f64",
            ValueKind::Duration => "duration",
            ValueKind::Unsupported(name) => *name,
        };
        f.write_str(name)
    }
}

/// Read-only view of one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRef<'a> {
    Bool(&'a bool),
    Str(&'a str),
    I32(&'a i32),
    I64(&'a i64),
    U32(&'a u32),
    U64(&'a u64),
    F64(&'a f64),
    Duration(&'a Duration),
    Unsupported(&'static str),
}

impl FieldRef<'_> {
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldRef::Bool(_) => ValueKind::Bool,
            FieldRef::Str(_) => ValueKind::Str,
            FieldRef::I32(_) => ValueKind::I32,
            FieldRef::I64(_) => ValueKind::I64,
            FieldRef::U32(_) => ValueKind::U32,
            FieldRef::U64(_) => ValueKind::U64,
            FieldRef::F64(_) => ValueKind::F64,
            FieldRef::Duration(_) => ValueKind::Duration,
            FieldRef::Unsupported(name) => ValueKind::Unsupported(*name),
        }
    }
}

/// Mutable view of one field.
#[derive(Debug)]
pub enum FieldMut<'a> {
    Bool(&'a mut bool),
    Str(&'a mut String),
    I32(&'a mut i32),
    I64(&'a mut i64),
    U32(&'a mut u32),
    U64(&'a mut u64),
    F64(&'a mut f64),
    Duration(&'a mut Duration),
    Unsupported(&'static str),
}

impl FieldMut<'_> {
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldMut::Bool(_) => ValueKind::Bool,
            FieldMut::Str(_) => ValueKind::Str,
            FieldMut::I32(_) => ValueKind::I32,
            FieldMut::I64(_) => ValueKind::I64,
            FieldMut::U32(_) => ValueKind::U32,
            FieldMut::U64(_) => ValueKind::U64,
            FieldMut::F64(_) => ValueKind::F64,
            FieldMut::Duration(_) => ValueKind::Duration,
            FieldMut::Unsupported(name) => ValueKind::Unsupported(*name),
        }
    }
}

/// A Rust type that can sit in a form record.
pub trait FormValue {
    fn as_field(&self) -> FieldRef<'_>;
    fn as_field_mut(&mut self) -> FieldMut<'_>;
}

macro_rules! impl_form_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FormValue for $ty {
                fn as_field(&self) -> FieldRef<'_> {
                    FieldRef::$variant(self)
                }

                fn as_field_mut(&mut self) -> FieldMut<'_> {
                    FieldMut::$variant(self)
                }
            }
        )*
    };
}

impl_form_value! {
    bool => Bool,
    i32 => I32,
    i64 => I64,
    u32 => U32,
    u64 => U64,
    f64 => F64,
    Duration => Duration,
}

impl FormValue for String {
    fn as_field(&self) -> FieldRef<'_> {
        FieldRef::Str(self)
    }

    fn as_field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Str(self)
    }
}

// Primitive widths the engine refuses; they compile but fail at runtime.
macro_rules! impl_unsupported {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FormValue for $ty {
                fn as_field(&self) -> FieldRef<'_> {
                    FieldRef::Unsupported(stringify!($ty))
                }

                fn as_field_mut(&mut self) -> FieldMut<'_> {
                    FieldMut::Unsupported(stringify!($ty))
                }
            }
        )*
    };
}

impl_unsupported!(i8, i16, u8, u16, f32, char);
