//! Token source trait and the `&str` tokenizer.

mod graphql_token_source;
mod str_to_graphql_token_source;

pub use graphql_token_source::GraphQLTokenSource;
pub use str_to_graphql_token_source::StrGraphQLTokenSource;

use crate::token::GraphQLToken;
use crate::GraphQLLexError;

/// Tokenizes `source` into an ordered token sequence ending with a single
/// [`Eof`](crate::token::GraphQLTokenKind::Eof) token.
///
/// This is a pure function of its input. It fails on the first character
/// that cannot begin (or continue) a token.
pub fn tokenize(
    source: &str,
) -> Result<Vec<GraphQLToken<'_>>, GraphQLLexError> {
    StrGraphQLTokenSource::new(source).collect()
}
