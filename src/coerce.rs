//! Value-to-text coercion.
//!
//! Every [`Value`] has exactly one text form per numeric mode, decided by a
//! fixed priority order (see [`crate::rules`] for the full table):
//!
//! 1. Strings pass through unchanged.
//! 2. In [`NumberMode::Byte`], integral numbers in `0..=255` become the
//!    single character with that code point.
//! 3. `undefined` and `null` spell themselves out.
//! 4. Everything else renders as its own text form: numbers as decimal text,
//!    booleans as `true`/`false`, arrays as comma-joined elements, builders
//!    as their content, objects as [`OBJECT_PLACEHOLDER`], dates as RFC 3339,
//!    big integers as bare digits.
//!
//! Coercion is total. It never fails and never allocates more than the
//! output text, so the capacity guard can measure the result before a buffer
//! commits to it.
//!
//! ## Examples
//!
//! ```rust
//! use strbuilder::{coerce, NumberMode, Value};
//!
//! assert_eq!(coerce(&Value::from(65), NumberMode::Decimal), "65");
//! assert_eq!(coerce(&Value::from(65), NumberMode::Byte), "A");
//! assert_eq!(coerce(&Value::from(300), NumberMode::Byte), "300");
//! assert_eq!(coerce(&Value::from(vec![1, 2, 3]), NumberMode::Decimal), "1,2,3");
//! ```

use crate::value::{Number, Value};

/// Fixed text form of object values.
///
/// Objects carry no conversion of their own, so coercion collapses every
/// [`Value::Object`] to this token regardless of its fields.
pub const OBJECT_PLACEHOLDER: &str = "[object Object]";

/// How numeric values render during coercion.
///
/// The mode applies per call, not per buffer, and only to the value itself.
/// Numbers inside arrays always render as decimal text.
///
/// # Examples
///
/// ```rust
/// use strbuilder::{coerce, NumberMode, Value};
///
/// assert_eq!(coerce(&Value::from(72), NumberMode::Byte), "H");
/// assert_eq!(coerce(&Value::from(72), NumberMode::Decimal), "72");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberMode {
    /// Numbers render as their decimal text.
    #[default]
    Decimal,
    /// Integral numbers in `0..=255` render as the character with that code
    /// point. Anything else falls back to decimal text.
    Byte,
}

/// Converts a value into its buffer text under the given numeric mode.
///
/// This is the conversion every buffer mutation applies before measuring the
/// result against its capacity. `Display` for [`Value`] is this function in
/// [`NumberMode::Decimal`].
///
/// # Examples
///
/// ```rust
/// use strbuilder::{coerce, NumberMode, Value};
///
/// assert_eq!(coerce(&Value::Undefined, NumberMode::Decimal), "undefined");
/// assert_eq!(coerce(&Value::from(true), NumberMode::Decimal), "true");
/// assert_eq!(coerce(&Value::from(10.5), NumberMode::Decimal), "10.5");
/// ```
#[must_use]
pub fn coerce(value: &Value, mode: NumberMode) -> String {
    let mut out = String::new();
    write_value(&mut out, value, mode);
    out
}

pub(crate) fn write_value(out: &mut String, value: &Value, mode: NumberMode) {
    match value {
        Value::String(s) => out.push_str(s),
        Value::Number(n) => match byte_char(n, mode) {
            Some(ch) => out.push(ch),
            None => out.push_str(&n.to_string()),
        },
        Value::Undefined => out.push_str("undefined"),
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Array(items) => write_join(out, items),
        Value::Builder(b) => out.push_str(b.as_str()),
        Value::Object(_) => out.push_str(OBJECT_PLACEHOLDER),
        Value::Date(dt) => out.push_str(&dt.to_rfc3339()),
        Value::BigInt(bi) => out.push_str(&bi.to_string()),
    }
}

fn byte_char(n: &Number, mode: NumberMode) -> Option<char> {
    match mode {
        NumberMode::Byte => n.as_byte_code().map(char::from),
        NumberMode::Decimal => None,
    }
}

fn write_join(out: &mut String, items: &[Value]) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_element(out, item);
    }
}

// Element form inside arrays: null and undefined leave their slot empty,
// nested arrays join recursively, numbers stay decimal.
fn write_element(out: &mut String, value: &Value) {
    match value {
        Value::Undefined | Value::Null => {}
        other => write_value(out, other, NumberMode::Decimal),
    }
}
