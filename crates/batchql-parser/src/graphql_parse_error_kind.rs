use crate::token::GraphQLTokenKind;

/// Categorizes parse errors for programmatic handling.
///
/// Each variant contains minimal data needed for programmatic decisions.
/// The full human-readable message lives on `GraphQLParseError`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    /// Expected specific token(s) but found something else.
    ///
    /// # Example
    /// ```text
    /// query { user(id 1) }
    ///                 ^ expected `:`, found integer
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        /// Token kinds that would have allowed the parse to continue.
        expected: Vec<GraphQLTokenKind>,
        /// Source text of the token that was found instead.
        found: String,
    },

    /// Unexpected end of input while parsing.
    ///
    /// # Example
    /// ```text
    /// query {
    ///        ^ expected name, found end of input
    /// ```
    #[error("unexpected end of input")]
    UnexpectedEof {
        /// Token kinds that would have allowed the parse to continue.
        expected: Vec<GraphQLTokenKind>,
    },

    /// Braces or brackets nest deeper than the parser allows.
    #[error("maximum nesting depth of {limit} exceeded")]
    NestingTooDeep {
        limit: usize,
    },

    /// The document parsed, but it cannot be submitted as a single batched
    /// call (it must contain exactly one operation definition).
    #[error("unsupported document")]
    UnsupportedDocument,
}

impl GraphQLParseErrorKind {
    /// The token kinds the parser expected at the failure position, if this
    /// is a syntax error.
    pub fn expected(&self) -> &[GraphQLTokenKind] {
        match self {
            GraphQLParseErrorKind::UnexpectedToken { expected, .. }
            | GraphQLParseErrorKind::UnexpectedEof { expected } => expected,
            GraphQLParseErrorKind::NestingTooDeep { .. }
            | GraphQLParseErrorKind::UnsupportedDocument => &[],
        }
    }
}
