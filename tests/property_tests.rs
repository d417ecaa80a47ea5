//! Property-based tests - pragmatic approach testing the core buffer guarantees
//!
//! These tests complement the integration tests by verifying invariants
//! across a wide range of generated inputs. Focus is on length tracking,
//! the capacity guard, and coercion agreement.

use proptest::prelude::*;
use strbuilder::{coerce, NumberMode, StringBuilder, Value};

fn char_count(s: &str) -> usize {
    s.chars().count()
}

proptest! {
    // Plain text passes through untouched
    #[test]
    fn prop_text_round_trips(s in ".{0,64}") {
        let mut builder = StringBuilder::new();
        builder.append(s.as_str()).unwrap();
        prop_assert_eq!(builder.as_str(), s.as_str());
        prop_assert_eq!(builder.len(), char_count(&s));
    }

    // Length is always the char count, never the byte count
    #[test]
    fn prop_len_counts_chars(s in ".{0,64}") {
        let builder = StringBuilder::from(s.as_str());
        prop_assert_eq!(builder.len(), char_count(&s));
    }

    // The guard holds across any sequence of appends
    #[test]
    fn prop_capacity_never_exceeded(
        chunks in prop::collection::vec(".{0,8}", 0..16),
        max in 0usize..24,
    ) {
        let mut builder = StringBuilder::with_max_capacity(max);
        for chunk in &chunks {
            let before = builder.to_string();
            if builder.append(chunk.as_str()).is_err() {
                prop_assert_eq!(builder.as_str(), before.as_str());
            }
            prop_assert!(builder.len() <= max);
            prop_assert_eq!(builder.len(), char_count(builder.as_str()));
        }
    }

    // Inserting a fragment and removing the same range restores the original
    #[test]
    fn prop_insert_remove_round_trips(
        base in ".{0,32}",
        fragment in ".{0,16}",
        index in 0usize..64,
    ) {
        let mut builder = StringBuilder::from(base.as_str());
        let base_chars = char_count(&base);
        builder.insert(index, fragment.as_str()).unwrap();
        builder
            .remove(index.min(base_chars), char_count(&fragment))
            .unwrap();
        prop_assert_eq!(builder.as_str(), base.as_str());
    }

    // remove behaves exactly like splicing the char sequence
    #[test]
    fn prop_remove_matches_char_splice(
        s in ".{0,32}",
        start in 0usize..40,
        length in 0usize..40,
    ) {
        let chars: Vec<char> = s.chars().collect();
        let mut builder = StringBuilder::from(s.as_str());
        let ok = builder.remove(start, length).is_ok();
        if start + length <= chars.len() {
            prop_assert!(ok);
            let expected: String = chars[..start]
                .iter()
                .chain(&chars[start + length..])
                .collect();
            prop_assert_eq!(builder.as_str(), expected.as_str());
        } else {
            prop_assert!(!ok);
            prop_assert_eq!(builder.as_str(), s.as_str());
        }
    }

    // append_join agrees with joining the coerced pieces by hand
    #[test]
    fn prop_join_matches_manual_join(
        values in prop::collection::vec(any::<i64>(), 0..12),
        separator in "[-,;| ]{1,3}",
    ) {
        let mut builder = StringBuilder::new();
        builder
            .append_join_with(values.clone(), &separator, NumberMode::Decimal)
            .unwrap();
        let expected = values
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(&separator);
        prop_assert_eq!(builder.as_str(), expected.as_str());
    }

    // Byte mode maps the 0..=255 window to chars and nothing outside it
    #[test]
    fn prop_byte_mode_window(n in any::<i64>()) {
        let mut builder = StringBuilder::new();
        builder.append_with(n, NumberMode::Byte).unwrap();
        let expected = if (0..=255).contains(&n) {
            char::from(n as u8).to_string()
        } else {
            n.to_string()
        };
        prop_assert_eq!(builder.as_str(), expected.as_str());
    }

    // Appending a value always produces the same text coerce does
    #[test]
    fn prop_append_matches_coerce(n in any::<f64>()) {
        let value = Value::from(n);
        let mut builder = StringBuilder::new();
        builder.append(value.clone()).unwrap();
        let coerced = coerce(&value, NumberMode::Decimal);
        prop_assert_eq!(builder.as_str(), coerced.as_str());
    }
}
