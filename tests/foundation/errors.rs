//! Integration tests for error types

use waymark_foundation::{Error, ErrorContext, ErrorKind, ReadLimit};

#[test]
fn read_only_message() {
    let err = Error::read_only();
    assert!(err.is_read_only());
    assert_eq!(
        err.to_string(),
        "the object has been marked as read-only; it must be cloned to make changes"
    );
}

#[test]
fn frames_stack_innermost_first() {
    let err = Error::unexpected_eof(4, 1)
        .with_context(ErrorContext::new().with_offset(12))
        .with_frame("tag collection")
        .with_frame("entity data");

    let context = err.context.unwrap();
    assert_eq!(context.offset, Some(12));
    assert_eq!(context.stack, vec!["tag collection", "entity data"]);
}

#[test]
fn context_display_lists_frames() {
    let context = ErrorContext::new().with_offset(8).with_frame("node");
    assert_eq!(context.to_string(), "at offset 8\n  in node\n");
}

#[test]
fn limit_display() {
    let err = Error::limit_exceeded(ReadLimit::CollectionLength {
        limit: 10,
        actual: 11,
        what: "tag".to_string(),
    });
    assert_eq!(err.to_string(), "limit exceeded: tag of 11 elements exceeds max (10)");
}

#[test]
fn coordinate_error_carries_value() {
    let err = Error::coordinate_out_of_range(1e12);
    assert!(matches!(err.kind, ErrorKind::CoordinateOutOfRange(v) if v == 1e12));
    assert!(!err.is_read_only());
}
