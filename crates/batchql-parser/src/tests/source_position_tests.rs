//! Tests for `SourcePosition`.

use crate::SourcePosition;

/// Verifies that `Display` renders 1-based `line:column`.
#[test]
fn display_is_one_based() {
    let pos = SourcePosition::new(0, 0, 0, 0);
    assert_eq!(pos.to_string(), "1:1");

    let pos = SourcePosition::new(4, 9, 10, 57);
    assert_eq!(pos.to_string(), "5:10");
}

/// Verifies the accessors return the raw 0-based values.
#[test]
fn accessors() {
    let pos = SourcePosition::new(2, 3, 4, 5);
    assert_eq!(pos.line(), 2);
    assert_eq!(pos.col_utf8(), 3);
    assert_eq!(pos.col_utf16(), 4);
    assert_eq!(pos.byte_offset(), 5);
}
