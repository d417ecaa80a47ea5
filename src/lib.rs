//! # strbuilder
//!
//! A mutable, growable, optionally capacity-bounded text buffer with explicit
//! value-to-text coercion.
//!
//! ## What is it?
//!
//! `StringBuilder` accumulates text from heterogeneous values: strings,
//! numbers, booleans, arrays, dates, big integers, other builders, and
//! anything `serde` can serialize. Every value coerces to text through one
//! fixed rule table (see [`rules`]), and an optional hard capacity bound
//! rejects any mutation that would overflow, before it touches the buffer.
//!
//! ## Key Features
//!
//! - **Fixed coercion rules**: every value has exactly one text form per
//!   numeric mode; appending never fails on the value itself
//! - **Capacity bounds**: an optional cap in chars, enforced check-first so
//!   rejected mutations leave the buffer untouched
//! - **Byte mode**: integral numbers in `0..=255` can render as single
//!   characters, per call
//! - **Fluent API**: mutations return `Result<&mut Self>` and chain with `?`
//! - **Serde compatible**: [`to_value`] turns any `Serialize` type into an
//!   appendable [`Value`]
//! - **Char-based**: capacity, lengths, and indices count Unicode scalar
//!   values, not bytes
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! strbuilder = "0.1"
//! ```
//!
//! ### Building Text
//!
//! ```rust
//! use strbuilder::StringBuilder;
//!
//! let mut message = StringBuilder::new();
//! message.append("Hello").unwrap();
//! message.append(' ').unwrap();
//! message.append(true).unwrap();
//! message.append(' ').unwrap();
//! message.append(vec![1, 2, 3]).unwrap();
//! assert_eq!(message.to_string(), "Hello true 1,2,3");
//! ```
//!
//! ### Capacity Bounds
//!
//! ```rust
//! use strbuilder::{Error, StringBuilder};
//!
//! let mut tag = StringBuilder::try_new("Hello", 10).unwrap();
//!
//! // Seven more chars would pass the cap of ten. Nothing is written.
//! let err = tag.append(" World!").unwrap_err();
//! assert!(matches!(err, Error::CapacityExceeded { .. }));
//! assert_eq!(tag.to_string(), "Hello");
//!
//! // Five more fit exactly.
//! tag.append("World").unwrap();
//! assert_eq!(tag.to_string(), "HelloWorld");
//! ```
//!
//! ### Byte Mode
//!
//! ```rust
//! use strbuilder::{NumberMode, StringBuilder};
//!
//! let mut line = StringBuilder::new();
//! line.append_join_with([72, 105, 33], "", NumberMode::Byte).unwrap();
//! assert_eq!(line.to_string(), "Hi!");
//! ```
//!
//! ### Dynamic Values with the value! Macro
//!
//! ```rust
//! use strbuilder::{value, StringBuilder};
//!
//! let payload = value!({
//!     "event": "login",
//!     "count": 3
//! });
//!
//! let mut log = StringBuilder::new();
//! log.append("payload=").unwrap();
//! log.append(payload).unwrap();
//! assert_eq!(log.to_string(), "payload=[object Object]");
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Append**: O(n) in the coerced text length; the capacity check is O(1)
//!   against a cached char count
//! - **Insert/Remove**: O(n) in the buffer length (char positions map to
//!   byte offsets by scanning)
//! - **Memory**: one `String` per builder, no other allocations held
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Char-boundary arithmetic is derived, never trusted from callers
//! - Proper error propagation with `Result` types; no panics in the public
//!   API
//!
//! ## Examples
//!
//! See the `demos/` directory for focused examples:
//!
//! - **`simple.rs`** - Building bounded text from mixed values
//! - **`dynamic_values.rs`** - Working with Value, the value! macro, and serde
//!
//! Run any example with: `cargo run --example <name>`

pub mod builder;
pub mod coerce;
pub mod error;
pub mod macros;
pub mod map;
pub mod rules;
pub mod ser;
pub mod value;

pub use builder::StringBuilder;
pub use coerce::{coerce, NumberMode, OBJECT_PLACEHOLDER};
pub use error::{Error, Result};
pub use map::Map;
pub use ser::ValueSerializer;
pub use value::{Number, Value};

use serde::Serialize;

/// Convert any `T: Serialize` to a [`Value`].
///
/// Useful for appending data whose structure isn't known at compile time.
/// The conversion is where invalid inputs are rejected; once a `Value`
/// exists, appending it can only fail on capacity.
///
/// # Examples
///
/// ```rust
/// use strbuilder::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// let value: Value = to_value(&point).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] for shapes with no value form
/// (data-carrying enum variants, non-string map keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ser::ValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize)]
    enum Shape {
        Unit,
        Wrapped(i32),
        Pair(i32, i32),
        Struct { size: i32 },
    }

    #[test]
    fn test_build_mixed_text() {
        let mut builder = StringBuilder::new();
        builder
            .append("Hello")
            .unwrap()
            .append(' ')
            .unwrap()
            .append(true)
            .unwrap()
            .append(' ')
            .unwrap()
            .append(10)
            .unwrap();
        assert_eq!(builder.to_string(), "Hello true 10");
    }

    #[test]
    fn test_capacity_discipline() {
        let mut builder = StringBuilder::try_new("Hello", 10).unwrap();
        assert!(builder.append(" World!").is_err());
        assert_eq!(builder.to_string(), "Hello");

        builder.append("World").unwrap();
        assert_eq!(builder.to_string(), "HelloWorld");
        assert_eq!(builder.len(), 10);
    }

    #[test]
    fn test_byte_mode_end_to_end() {
        let mut builder = StringBuilder::new();
        builder.append_with(65, NumberMode::Byte).unwrap();
        builder.append(65).unwrap();
        assert_eq!(builder.to_string(), "A65");
    }

    #[test]
    fn test_to_value_structs_become_objects() {
        let point = Point { x: 1, y: 2 };
        let value = to_value(&point).unwrap();

        match &value {
            Value::Object(obj) => {
                assert_eq!(obj.get("x"), Some(&Value::Number(Number::Integer(1))));
                assert_eq!(obj.get("y"), Some(&Value::Number(Number::Integer(2))));
            }
            _ => panic!("Expected object"),
        }

        let mut builder = StringBuilder::new();
        builder.append(value).unwrap();
        assert_eq!(builder.to_string(), "[object Object]");
    }

    #[test]
    fn test_to_value_enum_variants() {
        assert_eq!(to_value(&Shape::Unit).unwrap(), Value::from("Unit"));
        assert!(matches!(
            to_value(&Shape::Wrapped(1)),
            Err(Error::InvalidValue(_))
        ));
        assert!(matches!(
            to_value(&Shape::Pair(1, 2)),
            Err(Error::InvalidValue(_))
        ));
        assert!(matches!(
            to_value(&Shape::Struct { size: 3 }),
            Err(Error::InvalidValue(_))
        ));
    }

    #[test]
    fn test_to_value_wide_integers_become_bigints() {
        let value = to_value(&170141183460469231731687303715884105727_i128).unwrap();
        assert!(value.is_bigint());

        let mut builder = StringBuilder::new();
        builder.append(value).unwrap();
        assert_eq!(
            builder.to_string(),
            "170141183460469231731687303715884105727"
        );
    }

    #[test]
    fn test_builder_values_snapshot_content() {
        let mut inner = StringBuilder::new();
        inner.append("v1").unwrap();

        let snapshot = Value::from(&inner);
        inner.append(".2").unwrap();

        let mut outer = StringBuilder::new();
        outer.append(snapshot).unwrap();
        outer.append(' ').unwrap();
        outer.append(inner).unwrap();
        assert_eq!(outer.to_string(), "v1 v1.2");
    }

    #[test]
    fn test_value_macro_feeds_builder() {
        let mut builder = StringBuilder::new();
        builder.append(value!([1, "two", null, 3])).unwrap();
        assert_eq!(builder.to_string(), "1,two,,3");
    }
}
