//! Integration tests for Error types
//!
//! Tests error construction, display, and error kinds.

use decohack_foundation::{Error, ErrorContext, ErrorKind, check_index, check_range};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_out_of_range() {
    let err = Error::out_of_range("Thing", 200, 137);
    assert!(matches!(
        err.kind,
        ErrorKind::OutOfRange {
            table: "Thing",
            index: 200,
            max: 136
        }
    ));
    assert_eq!(err.to_string(), "Thing index 200 out of range, must be from 0 to 136");
}

#[test]
fn error_field_range() {
    let err = Error::field_range("Duration", -1, 9999, 10_000);
    assert_eq!(err.to_string(), "Duration must be between -1 and 9999, got 10000");
}

#[test]
fn error_unknown_name() {
    let err = Error::unknown_name("sprite", "ZZZZ");
    assert!(matches!(err.kind, ErrorKind::UnknownName { .. }));
    assert!(err.to_string().contains("ZZZZ"));
}

#[test]
fn error_message_kinds() {
    assert_eq!(Error::invalid_value("bad").to_string(), "bad");
    assert_eq!(Error::unsupported("no pars").to_string(), "no pars");
    assert!(Error::internal("oops").to_string().contains("oops"));
}

#[test]
fn error_context_display() {
    let context = ErrorContext::new().with_source("a.dh").with_position(3, 9);
    assert_eq!(context.to_string(), "at a.dh:3:9");
    let err = Error::invalid_value("x").with_context(context.clone());
    assert_eq!(err.context, Some(context));
    assert_eq!(ErrorContext::new().to_string(), "");
}

// =============================================================================
// Range Checks
// =============================================================================

#[test]
fn range_checks() {
    assert!(check_range("Frame", 0, 28, 28).is_ok());
    assert!(check_range("Frame", 0, 28, 29).is_err());
    assert_eq!(check_index("State", 966, 967), Ok(966));
    assert!(check_index("State", 967, 967).is_err());
    assert!(check_index("State", -1, 967).is_err());
}
