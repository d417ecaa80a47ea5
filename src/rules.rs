//! Coercion Rules
//!
//! This module documents how values become buffer text, as implemented by
//! [`coerce`](crate::coerce()) and applied by every `StringBuilder` mutation.
//!
//! # Overview
//!
//! Coercion is a total function from ([`Value`](crate::Value),
//! [`NumberMode`](crate::NumberMode)) to text. Every variant has exactly one
//! text form per mode, decided by a fixed priority order. Nothing about the
//! buffer's state influences the text; the buffer only measures the result
//! against its capacity afterwards.
//!
//! ## Priority Order
//!
//! The first matching rule wins:
//!
//! | # | Condition | Text |
//! |---|-----------|------|
//! | 1 | String | the string, unchanged |
//! | 2 | Byte mode and integral number in `0..=255` | the single character with that code point |
//! | 3 | Undefined | `undefined` |
//! | 4 | Null | `null` |
//! | 5 | anything else | the value's own text form (below) |
//!
//! Rule 2 only fires in [`NumberMode::Byte`](crate::NumberMode::Byte). A
//! number that misses its window falls through to rule 5 and renders as
//! decimal text.
//!
//! # Byte Mode
//!
//! | Input | Byte mode text | Decimal mode text |
//! |-------|----------------|-------------------|
//! | `65` | `A` | `65` |
//! | `10` | newline | `10` |
//! | `66.0` | `B` | `66` |
//! | `255` | `ÿ` | `255` |
//! | `256` | `256` | `256` |
//! | `-1` | `-1` | `-1` |
//! | `3.5` | `3.5` | `3.5` |
//! | `NaN` | `NaN` | `NaN` |
//!
//! **Rules**:
//! - Only integral values qualify; a float counts as integral when its
//!   fractional part is zero
//! - The window is `0..=255`; codes map to chars as Latin-1
//! - The mode travels with one call. It never becomes buffer state, and it
//!   never reaches array elements
//!
//! # Text Forms
//!
//! ## Primitives
//!
//! | Value | Text | Example |
//! |-------|------|---------|
//! | Undefined | `undefined` | |
//! | Null | `null` | |
//! | Bool | `true` / `false` | |
//! | Integer | decimal digits, optional `-` | `-42` |
//! | Float | Rust's shortest round-trip text | `10.5`, `65.0` renders `65` |
//! | Infinity / -Infinity / NaN | their conventional names | `Infinity`, not `inf` |
//! | String | unchanged, no quoting or escaping | `a,b:c` stays `a,b:c` |
//!
//! Strings are never quoted. A buffer accumulates raw text, not a document
//! format, so there is no syntax to protect.
//!
//! ## Arrays
//!
//! Elements join with a comma:
//!
//! ```text
//! [1, 2, 3]        1,2,3
//! ["a", true, 2]   a,true,2
//! []               (empty text)
//! ```
//!
//! **Rules**:
//! - The separator is always `,`. Joining with another separator is an
//!   operation on the buffer (`append_join_with`), not a property of the
//!   value
//! - Null and undefined elements leave their slot empty: `["a", null, "b"]`
//!   renders `a,,b`
//! - Nested arrays join recursively with no brackets: `[1, [2, 3], 4]`
//!   renders `1,2,3,4`
//! - Elements always render in decimal mode, whatever mode the outer call
//!   used: appending `[65, 66]` in byte mode still renders `65,66`
//!
//! ## Objects
//!
//! Objects have no text conversion of their own, so every object renders as
//! the fixed placeholder token [`OBJECT_PLACEHOLDER`](crate::OBJECT_PLACEHOLDER):
//!
//! ```text
//! {}                        [object Object]
//! { "a": 1, "b": 2 }        [object Object]
//! ```
//!
//! Fields never leak into buffer text. To render an object's contents, pull
//! them out of the [`Map`](crate::Map) and append them as values.
//!
//! ## Builders
//!
//! A nested builder renders as its content at coercion time. The snapshot is
//! taken when the `Value` is built from the builder; later mutations of the
//! source do not reach back into text already appended.
//!
//! ## Dates
//!
//! Dates render as RFC 3339 with a numeric offset:
//!
//! ```text
//! 2024-01-15T10:30:00+00:00
//! ```
//!
//! ## Big Integers
//!
//! Arbitrary-precision integers render as bare digits with no suffix:
//!
//! ```text
//! 123456789012345678901234567890
//! ```
//!
//! # Capacity Interaction
//!
//! Coercion runs before any capacity check. The guard compares the char
//! count of the final text, so a value is never half-rendered: either the
//! whole text fits and commits, or the mutation fails and the buffer keeps
//! its previous content. Compound operations (`append_line`, `append_join`)
//! apply this per sub-append; see [`crate::builder`].
//!
//! # Limitations
//!
//! - **Objects**: always the placeholder token, never their fields
//! - **Array separators**: fixed to `,` inside values
//! - **Byte mode**: per call only; there is no buffer-wide byte mode

// This module contains only documentation; no implementation code
