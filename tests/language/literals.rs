//! Integration tests for literal decoding

use decohack_language::{IntegerError, decode_frame_letter, decode_frames, parse_integer};
use proptest::prelude::*;

#[test]
fn numbers() {
    assert_eq!(parse_integer("0x1F"), Ok(31));
    assert_eq!(parse_integer("42"), Ok(42));
    assert!(matches!(parse_integer("3.5"), Err(IntegerError::Fraction(_))));
    assert!(matches!(
        parse_integer("0x80000000"),
        Err(IntegerError::Magnitude(_))
    ));
}

proptest! {
    #[test]
    fn frame_letters_decode_to_offsets(c in proptest::char::range('A', ']')) {
        prop_assert_eq!(decode_frame_letter(c), Some(c as i32 - 'A' as i32));
    }

    #[test]
    fn other_characters_are_rejected(c in any::<char>()) {
        prop_assume!(!('A'..=']').contains(&c));
        prop_assert_eq!(decode_frame_letter(c), None);
        prop_assert_eq!(decode_frames(&c.to_string()), Err(c));
    }

    #[test]
    fn decimal_integers_decode(n in 0..=i32::MAX) {
        prop_assert_eq!(parse_integer(&n.to_string()), Ok(n));
    }

    #[test]
    fn hex_integers_decode(n in 0..=i32::MAX) {
        prop_assert_eq!(parse_integer(&format!("0x{n:X}")), Ok(n));
    }

    #[test]
    fn oversized_integers_are_rejected(n in (i64::from(i32::MAX) + 1)..i64::MAX) {
        prop_assert!(matches!(
            parse_integer(&n.to_string()),
            Err(IntegerError::Magnitude(_))
        ));
    }
}
