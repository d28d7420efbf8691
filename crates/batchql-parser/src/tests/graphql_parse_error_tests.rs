//! Tests for `GraphQLParseError` formatting.

use crate::tests::utils::parse_error;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::SourcePosition;

/// Verifies the one-line format used by `Display`.
#[test]
fn oneline_format() {
    let err = parse_error("{ user(id 1) }");
    assert_eq!(err.to_string(), "1:11: error: expected `:`, found integer `1`");
}

/// Verifies that the detailed format points a caret at the error column.
#[test]
fn detailed_format() {
    let source = "{ user(id 1) }";
    let err = parse_error(source);
    let detailed = err.format_detailed(Some(source));
    assert_eq!(
        detailed,
        "error: expected `:`, found integer `1`\n  \
         --> <input>:1:11\n   \
         |\n \
         1 | { user(id 1) }\n   \
         |           ^\n",
    );
}

/// Verifies that the snippet line is found when lines end in a lone `\r`
/// or in `\r\n`.
#[test]
fn detailed_format_with_carriage_returns() {
    for source in ["{\r  user(id 1)\r}", "{\r\n  user(id 1)\r\n}"] {
        let err = parse_error(source);
        assert_eq!(
            err.format_detailed(Some(source)),
            "error: expected `:`, found integer `1`\n  \
             --> <input>:2:11\n   \
             |\n \
             2 |   user(id 1)\n   \
             |           ^\n",
        );
    }
}

/// Verifies that the detailed format without source omits the snippet.
#[test]
fn detailed_format_without_source() {
    let err = GraphQLParseError::new(
        "document contains no operation",
        SourcePosition::new(0, 0, 0, 0),
        GraphQLParseErrorKind::UnsupportedDocument,
    );
    assert_eq!(
        err.format_detailed(None),
        "error: document contains no operation\n  --> <input>:1:1\n",
    );
    assert!(err.kind().expected().is_empty());
}
