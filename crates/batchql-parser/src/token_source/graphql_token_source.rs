use crate::token::GraphQLToken;
use crate::GraphQLLexError;

/// Marker trait for [`GraphQLToken`] lexers: iterators that yield tokens
/// one at a time, or the first [`GraphQLLexError`] they hit.
///
/// Lexers are responsible for:
/// - Skipping whitespace, the BOM, and `#` comments
/// - Emitting a final token with
///   [`GraphQLTokenKind::Eof`](crate::token::GraphQLTokenKind::Eof)
/// - Stopping after the first error (no recovery)
///
/// # Lifetime Parameter
///
/// The `'src` lifetime represents the source text that tokens are lexed from;
/// token text borrows directly from it.
pub trait GraphQLTokenSource<'src>:
    Iterator<Item = Result<GraphQLToken<'src>, GraphQLLexError>>
{
}

impl<'src, T> GraphQLTokenSource<'src> for T
where
    T: Iterator<Item = Result<GraphQLToken<'src>, GraphQLLexError>>,
{
}
