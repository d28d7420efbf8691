use batchql_parser::ast::OperationKind;

/// A batch whose calls cannot be combined into a single operation.
///
/// Merge errors are fatal for the whole batch: every call still pending
/// when the merge runs is rejected with the same error.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum MergeError {
    /// One call selects the same response key twice with a different field
    /// name or different arguments.
    #[error(
        "call {call_index} selects `{response_key}` more than once with \
        different fields or arguments"
    )]
    ConflictingField {
        call_index: usize,
        response_key: String,
    },

    /// Two contributors share a field signature, but only one of them
    /// selects sub-fields.
    #[error(
        "`{response_key}` is selected both as a leaf and with a selection set"
    )]
    SelectionShapeMismatch {
        response_key: String,
    },

    /// Calls of different operation kinds cannot share one request.
    #[error("cannot batch a {found} with a {expected}")]
    MixedOperationKinds {
        expected: OperationKind,
        found: OperationKind,
    },

    #[error("cannot merge an empty batch")]
    EmptyBatch,
}
