//! Conversion between field values and their form text.
//!
//! ## Formatting
//!
//! Integers print in base 10, durations as integer nanoseconds, booleans as
//! `true`/`false`. Floats print in shortest round-trip form and switch to
//! exponent notation (`1e+06`, `1e-05`) outside `[1e-4, 1e6)`.
//!
//! Durations share one range in both directions: `0` to `i64::MAX`
//! nanoseconds. A longer duration fails to format.
//!
//! ## Parsing
//!
//! Integers are parsed with base autodetection:
//!
//! | Prefix | Base |
//! |--------|------|
//! | `0x`, `0X` | 16 |
//! | `0o`, `0O` | 8 |
//! | `0b`, `0B` | 2 |
//! | `0` | 8 |
//! | none | 10 |
//!
//! Single `_` separators are allowed between digits and after a prefix.
//! Signed kinds and durations accept a leading `+` or `-`, unsigned kinds
//! accept neither. Negative durations are a range error.

use crate::error::{ConversionError, FormError, Result, Unsupported};
use crate::value::{FieldMut, FieldRef};
use std::time::Duration;

/// Form text of the field posted under `key`.
pub fn format_value(ident: &'static str, key: &str, value: &FieldRef<'_>) -> Result<String> {
    let text = match value {
        FieldRef::Bool(flag) => flag.to_string(),
        FieldRef::Str(s) => s.to_string(),
        FieldRef::I32(n) => n.to_string(),
        FieldRef::I64(n) => n.to_string(),
        FieldRef::U32(n) => n.to_string(),
        FieldRef::U64(n) => n.to_string(),
        FieldRef::F64(x) => format_float(**x),
        FieldRef::Duration(d) => {
            let nanos = d.as_nanos();
            if i64::try_from(nanos).is_err() {
                return Err(FormError::ConversionFailed {
                    key: key.to_string(),
                    kind: value.kind(),
                    input: nanos.to_string(),
                    cause: ConversionError::Range,
                });
            }
            nanos.to_string()
        }
        FieldRef::Unsupported(name) => {
            return Err(FormError::UnsupportedKind {
                field: ident,
                kind: Unsupported::Value(*name),
            })
        }
    };
    Ok(text)
}

/// Parse `raw` into the field behind `slot`.
///
/// Booleans become true for any non-empty input. The slot is untouched when
/// conversion fails.
pub fn assign(ident: &'static str, key: &str, slot: FieldMut<'_>, raw: &str) -> Result<()> {
    let kind = slot.kind();
    let failed = |cause| FormError::ConversionFailed {
        key: key.to_string(),
        kind,
        input: raw.to_string(),
        cause,
    };

    match slot {
        FieldMut::Bool(flag) => *flag = !raw.is_empty(),
        FieldMut::Str(s) => *s = raw.to_string(),
        FieldMut::I32(n) => *n = narrow(parse_int(raw).map_err(failed)?).map_err(failed)?,
        FieldMut::I64(n) => *n = narrow(parse_int(raw).map_err(failed)?).map_err(failed)?,
        FieldMut::U32(n) => *n = narrow(parse_uint(raw).map_err(failed)?).map_err(failed)?,
        FieldMut::U64(n) => *n = parse_uint(raw).map_err(failed)?,
        FieldMut::F64(x) => *x = parse_float(raw).map_err(failed)?,
        FieldMut::Duration(d) => {
            let nanos: i64 = narrow(parse_int(raw).map_err(failed)?).map_err(failed)?;
            let nanos = u64::try_from(nanos).map_err(|_| failed(ConversionError::Range))?;
            *d = Duration::from_nanos(nanos);
        }
        FieldMut::Unsupported(name) => {
            return Err(FormError::UnsupportedKind {
                field: ident,
                kind: Unsupported::Value(name),
            })
        }
    }
    Ok(())
}

fn narrow<T, U: TryFrom<T>>(n: T) -> std::result::Result<U, ConversionError> {
    U::try_from(n).map_err(|_| ConversionError::Range)
}

/// Parse a signed integer with base autodetection.
///
/// ```
/// use formwire::convert::parse_int;
///
/// assert_eq!(parse_int("18"), Ok(18));
/// assert_eq!(parse_int("-0x1F"), Ok(-31));
/// assert_eq!(parse_int("0o17"), Ok(15));
/// assert_eq!(parse_int("017"), Ok(15));
/// assert_eq!(parse_int("1_000"), Ok(1000));
/// assert!(parse_int("abc").is_err());
/// ```
pub fn parse_int(raw: &str) -> std::result::Result<i128, ConversionError> {
    let (negative, unsigned) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let magnitude = i128::from(parse_uint(unsigned)?);
    Ok(if negative { -magnitude } else { magnitude })
}

/// Parse an unsigned integer with base autodetection. Signs are rejected.
pub fn parse_uint(raw: &str) -> std::result::Result<u64, ConversionError> {
    let (radix, digits, prefixed) = split_radix(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
        return Err(ConversionError::Syntax);
    }
    if digits.contains('_') && !separators_ok(digits, prefixed) {
        return Err(ConversionError::Syntax);
    }

    let cleaned: String = digits.chars().filter(|&ch| ch != '_').collect();
    u64::from_str_radix(&cleaned, radix).map_err(|err| match err.kind() {
        std::num::IntErrorKind::PosOverflow => ConversionError::Range,
        _ => ConversionError::Syntax,
    })
}

/// Returns the radix, the digit part and whether a prefix was stripped.
fn split_radix(raw: &str) -> (u32, &str, bool) {
    let bytes = raw.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' | b'X' => return (16, &raw[2..], true),
            b'o' | b'O' => return (8, &raw[2..], true),
            b'b' | b'B' => return (2, &raw[2..], true),
            _ => return (8, &raw[1..], true),
        }
    }
    (10, raw, false)
}

/// `_` must sit between two digits, or directly after a base prefix.
fn separators_ok(digits: &str, prefixed: bool) -> bool {
    let bytes = digits.as_bytes();
    bytes.iter().enumerate().all(|(i, &b)| {
        if b != b'_' {
            return true;
        }
        let before_ok = if i == 0 {
            prefixed
        } else {
            bytes[i - 1] != b'_'
        };
        let after_ok = i + 1 < bytes.len() && bytes[i + 1] != b'_';
        before_ok && after_ok
    })
}

/// Parse a 64-bit float. A finite literal too large for `f64` is a range error.
pub fn parse_float(raw: &str) -> std::result::Result<f64, ConversionError> {
    let value: f64 = raw.parse().map_err(|_| ConversionError::Syntax)?;
    if value.is_infinite() && !names_infinity(raw) {
        return Err(ConversionError::Range);
    }
    Ok(value)
}

fn names_infinity(raw: &str) -> bool {
    let unsigned = raw.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Shortest text form of a float.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e6).contains(&magnitude) {
        let formatted = format!("{:e}", value);
        // `{:e}` gives `1.5e-7`; pad the exponent to two digits with a sign.
        if let Some((mantissa, exponent)) = formatted.split_once('e') {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            return format!("{}e{}{:0>2}", mantissa, sign, digits);
        }
        return formatted;
    }
    value.to_string()
}
