//! Shared helpers for parser tests.

use crate::ast;
use crate::ast::AstNode;
use crate::token::GraphQLTokenKind;
use crate::token_source::tokenize;
use crate::GraphQLParseError;
use crate::GraphQLParser;

/// Parses `source` as an executable document, panicking on any error.
pub fn parse_document(source: &str) -> ast::Document {
    GraphQLParser::new(source)
        .expect("source should tokenize")
        .parse_executable_document()
        .unwrap_or_else(|err| {
            panic!("expected `{source}` to parse, got: {err}")
        })
}

/// Parses `source` and returns the parse error, panicking if it parses.
pub fn parse_error(source: &str) -> GraphQLParseError {
    GraphQLParser::new(source)
        .expect("source should tokenize")
        .parse_executable_document()
        .expect_err("expected a parse error")
}

/// Parses `source` and renders it back in canonical form.
pub fn canonical(source: &str) -> String {
    parse_document(source).to_canonical()
}

/// Returns the first (and usually only) operation in `source`.
pub fn first_operation(source: &str) -> ast::OperationDefinition {
    parse_document(source)
        .operations()
        .next()
        .cloned()
        .expect("document should contain an operation")
}

/// Returns the field at `index` in the top-level selection set of the first
/// operation in `source`.
pub fn top_level_field(source: &str, index: usize) -> ast::Field {
    first_operation(source)
        .selection_set
        .fields()
        .nth(index)
        .cloned()
        .expect("operation should have a field at that index")
}

/// Token kinds of `source`, including the trailing `Eof`.
pub fn token_kinds(source: &str) -> Vec<GraphQLTokenKind> {
    tokenize(source)
        .expect("source should tokenize")
        .into_iter()
        .map(|token| token.kind)
        .collect()
}
