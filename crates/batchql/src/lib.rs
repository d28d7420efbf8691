//! Time-windowed batching of GraphQL queries.
//!
//! Queries issued independently within a short window are parsed, merged
//! into one operation, sent as a single request through a [`Transport`],
//! and the single response is split back into one result per caller.
//!
//! - [`merge`] combines parsed queries into one operation plus a
//!   [`PathMapping`](merge::PathMapping) of where each call's fields went.
//! - [`regenerate`] renders the merged operation as canonical text and
//!   namespaces each call's variables.
//! - [`demultiplex`] rebuilds one call's response from the merged one.
//! - [`Multiplexer`] drives all of the above against calls arriving over
//!   time.
//!
//! For offline use, [`merge_queries`] runs the pure merge pipeline.
//!
//! ```rust
//! let merged = batchql::merge_queries(["query { a }", "{ b }"]).unwrap();
//! assert_eq!(merged, "query { a b }");
//! ```

mod batchql_error;
mod demultiplexer;
pub mod merge;
mod merge_error;
mod multiplexer;
mod regenerator;
mod transport;
mod transport_error;

pub use batchql_error::BatchQLError;
pub use demultiplexer::demultiplex;
pub use demultiplexer::QueryResponse;
pub use merge_error::MergeError;
pub use multiplexer::Multiplexer;
pub use multiplexer::MultiplexerConfig;
pub use multiplexer::QueryHandle;
pub use regenerator::regenerate;
pub use regenerator::CallVariables;
pub use regenerator::RegeneratedQuery;
pub use transport::Transport;
pub use transport::TransportRequest;
pub use transport::TransportResponse;
pub use transport_error::TransportError;

use merge::CallDocument;

/// Merges `queries` into one query text without sending anything.
///
/// Query `i` is treated as call `i` of a batch. Fails with the first lex,
/// parse or merge error encountered.
pub fn merge_queries<I, S>(queries: I) -> Result<String, BatchQLError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let calls = queries
        .into_iter()
        .enumerate()
        .map(|(call_index, query)| CallDocument::parse(call_index, query.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    let merged = merge::merge_operations(&calls)?;
    Ok(regenerate(&merged, &[]).query)
}

#[cfg(test)]
mod tests;
