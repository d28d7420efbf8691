use crate::MergeError;
use crate::TransportError;
use batchql_parser::GraphQLLexError;
use batchql_parser::GraphQLParseError;
use std::sync::Arc;

/// Why a submitted query did not produce a response.
///
/// Lex and parse errors belong to a single call. Merge and transport errors
/// are shared by every call of the batch they occurred in.
#[derive(Clone, Debug, thiserror::Error)]
pub enum BatchQLError {
    #[error("lex error: {0}")]
    Lex(#[from] GraphQLLexError),

    #[error("parse error: {0}")]
    Parse(#[from] GraphQLParseError),

    #[error("merge error: {0}")]
    Merge(#[from] MergeError),

    /// The transport failed. Every call of the batch holds the same `Arc`.
    #[error("transport error: {0}")]
    Transport(Arc<TransportError>),

    /// The call's batch was discarded before the call was resolved (the
    /// multiplexer shut down or its flush task was aborted).
    #[error("batch was dropped before the call was resolved")]
    BatchDropped,
}

impl From<TransportError> for BatchQLError {
    fn from(error: TransportError) -> Self {
        BatchQLError::Transport(Arc::new(error))
    }
}
