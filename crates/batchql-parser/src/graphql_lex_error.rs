use crate::SourcePosition;

/// Categorizes tokenizer failures for programmatic handling.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GraphQLLexErrorKind {
    /// A character that cannot start any GraphQL token.
    UnexpectedCharacter,

    /// A string or block string that reaches end of input (or, for
    /// single-line strings, a line terminator) before its closing quote.
    UnterminatedString,

    /// A numeric literal that violates the GraphQL number grammar (leading
    /// zeros, missing exponent digits, a lone `-`, ...).
    InvalidNumber,

    /// One or two dots that do not form a `...` spread operator.
    InvalidDots,
}

/// A tokenizer failure at a specific source position.
///
/// `character` is the character at `position` that the tokenizer could not
/// continue from (for unterminated strings, the opening quote).
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{position}: {message}")]
pub struct GraphQLLexError {
    pub position: SourcePosition,
    pub character: char,
    pub kind: GraphQLLexErrorKind,
    message: String,
}

impl GraphQLLexError {
    pub fn new(
        position: SourcePosition,
        character: char,
        kind: GraphQLLexErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            position,
            character,
            kind,
            message: message.into(),
        }
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
