//! Tests for turning a call's source text into a `CallDocument`.

use crate::merge::CallDocument;
use crate::BatchQLError;
use batchql_parser::ast::AstNode;
use batchql_parser::GraphQLLexErrorKind;
use batchql_parser::GraphQLParseErrorKind;

/// Verifies that a call keeps its operation and fragments apart.
#[test]
fn splits_operation_and_fragments() {
    let call = CallDocument::parse(
        3,
        "query { user { ...UserFields } } fragment UserFields on User { id }",
    )
    .expect("call should parse");
    assert_eq!(call.call_index(), 3);
    assert_eq!(
        call.operation().to_canonical(),
        "query { user { ...UserFields } }",
    );
    assert_eq!(call.fragments().len(), 1);
    assert_eq!(call.fragments()[0].name, "UserFields");
}

/// Verifies that a document with two operations is rejected as a single
/// call.
#[test]
fn rejects_multiple_operations() {
    let err = CallDocument::parse(0, "query A { a } query B { b }")
        .expect_err("two operations should be rejected");
    match err {
        BatchQLError::Parse(err) => {
            assert_eq!(err.kind(), &GraphQLParseErrorKind::UnsupportedDocument);
            assert_eq!(err.position().byte_offset(), 14);
        },
        other => panic!("expected a parse error, got {other:?}"),
    }
}

/// Verifies that a document with only fragments is rejected.
#[test]
fn rejects_fragment_only_document() {
    let err = CallDocument::parse(0, "fragment F on User { id }")
        .expect_err("a document without operations should be rejected");
    assert!(matches!(
        err,
        BatchQLError::Parse(ref err)
            if err.kind() == &GraphQLParseErrorKind::UnsupportedDocument
    ));
}

/// Verifies that tokenizer failures surface as lex errors.
#[test]
fn lex_errors_are_reported_as_lex() {
    let err = CallDocument::parse(0, "{ a % }")
        .expect_err("`%` should not tokenize");
    match err {
        BatchQLError::Lex(err) => {
            assert_eq!(err.kind, GraphQLLexErrorKind::UnexpectedCharacter);
            assert_eq!(err.character, '%');
        },
        other => panic!("expected a lex error, got {other:?}"),
    }
}

/// Verifies that syntax errors surface as parse errors.
#[test]
fn syntax_errors_are_reported_as_parse() {
    let err = CallDocument::parse(0, "query{")
        .expect_err("an unbalanced brace should not parse");
    assert!(matches!(err, BatchQLError::Parse(_)));
}

/// Verifies that spreading a fragment the document does not define
/// rejects the call.
#[test]
fn rejects_unknown_fragment_spread() {
    let err = CallDocument::parse(0, "{ user { ...Missing } }")
        .expect_err("an undefined fragment should be rejected");
    match err {
        BatchQLError::Parse(err) => {
            assert_eq!(err.kind(), &GraphQLParseErrorKind::UnsupportedDocument);
            assert!(err.to_string().contains("`Missing`"));
        },
        other => panic!("expected a parse error, got {other:?}"),
    }
}

/// Verifies that spreads inside fragment bodies are checked too.
#[test]
fn rejects_unknown_spread_in_fragment() {
    let err = CallDocument::parse(
        0,
        "{ ...A } fragment A on Query { ...B }",
    )
    .expect_err("`B` is never defined");
    assert!(matches!(
        err,
        BatchQLError::Parse(ref err)
            if err.kind() == &GraphQLParseErrorKind::UnsupportedDocument
    ));
}

/// Verifies that defining one fragment twice rejects the call at the second
/// definition.
#[test]
fn rejects_duplicate_fragment_definitions() {
    let err = CallDocument::parse(
        0,
        "query { a } fragment F on Q { a } fragment F on Q { b }",
    )
    .expect_err("`F` is defined twice");
    match err {
        BatchQLError::Parse(err) => {
            assert_eq!(err.kind(), &GraphQLParseErrorKind::UnsupportedDocument);
            assert_eq!(err.position().byte_offset(), 34);
        },
        other => panic!("expected a parse error, got {other:?}"),
    }
}
