//! A deterministic parser for the executable subset of GraphQL.
//!
//! Parsing happens in three layers:
//!
//! - [`token_source`] turns source text into a token sequence.
//! - [`combinator`] provides pure parsing primitives over token slices.
//! - [`GraphQLParser`] assembles those primitives into a grammar that
//!   produces an owned [`ast::Document`].

pub mod ast;
pub mod combinator;
mod graphql_lex_error;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_parser;
mod source_position;
pub mod token;
pub mod token_source;

pub use graphql_lex_error::GraphQLLexError;
pub use graphql_lex_error::GraphQLLexErrorKind;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_parser::GraphQLParser;
pub use source_position::SourcePosition;

#[cfg(test)]
mod tests;
