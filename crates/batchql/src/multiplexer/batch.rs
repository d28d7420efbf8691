use crate::demultiplex;
use crate::merge::merge_operations;
use crate::merge::CallDocument;
use crate::multiplexer::pending_call::CallResult;
use crate::multiplexer::pending_call::PendingCall;
use crate::regenerate;
use crate::BatchQLError;
use crate::CallVariables;
use crate::QueryResponse;
use crate::RegeneratedQuery;
use crate::Transport;
use crate::TransportRequest;
use std::sync::Arc;
use tokio::sync::oneshot;

/// The calls collected during one batch window, in arrival order.
///
/// A batch is only ever extended while it is collecting. Once handed to
/// [`Batch::flush`] it is consumed and never reused.
pub(crate) struct Batch {
    id: u64,
    calls: Vec<PendingCall>,
}

impl Batch {
    pub fn open(id: u64, first: PendingCall) -> Self {
        Self {
            id,
            calls: vec![first],
        }
    }

    pub fn push(&mut self, call: PendingCall) {
        self.calls.push(call);
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Parses, merges and sends the batch, then resolves every call.
    ///
    /// Calls that fail to parse are rejected on their own. A merge failure
    /// or transport failure rejects all remaining calls with the same
    /// error.
    pub async fn flush(self, transport: Arc<dyn Transport>) {
        let batch_id = self.id;
        tracing::info!(
            event = "batch_flushing",
            batch_id,
            batch_size = self.calls.len(),
            "flushing batch"
        );

        let mut documents = Vec::with_capacity(self.calls.len());
        let mut variables = Vec::with_capacity(self.calls.len());
        let mut pending = Vec::with_capacity(self.calls.len());
        for (call_index, call) in self.calls.into_iter().enumerate() {
            match CallDocument::parse(call_index, &call.query) {
                Ok(document) => {
                    documents.push(document);
                    variables.push(CallVariables {
                        call_index,
                        values: call.variables,
                    });
                    pending.push((call_index, call.respond_to));
                },
                Err(err) => {
                    tracing::debug!(
                        event = "call_rejected",
                        batch_id,
                        call_index,
                        error = %err,
                        "rejecting call that failed to parse"
                    );
                    let _ = call.respond_to.send(Err(err));
                },
            }
        }
        if pending.is_empty() {
            return;
        }

        let merged = match merge_operations(&documents) {
            Ok(merged) => merged,
            Err(err) => {
                tracing::warn!(
                    event = "merge_failed",
                    batch_id,
                    error = %err,
                    "rejecting batch that could not be merged"
                );
                fail_all(pending, BatchQLError::Merge(err));
                return;
            },
        };
        let RegeneratedQuery { query, variables } =
            regenerate(&merged, &variables);

        tracing::info!(
            event = "transport_invoke",
            batch_id,
            batch_size = pending.len(),
            query_bytes = query.len(),
            variables = variables.len(),
            "invoking transport"
        );
        match transport.send(TransportRequest { query, variables }).await {
            Ok(response) => {
                for (call_index, respond_to) in pending {
                    let data =
                        demultiplex(&merged.mapping, call_index, &response.data);
                    let _ = respond_to.send(Ok(QueryResponse {
                        data,
                        errors: response.errors.clone(),
                    }));
                }
            },
            Err(err) => {
                tracing::warn!(
                    event = "transport_failed",
                    batch_id,
                    error = %err,
                    "transport failed; rejecting batch"
                );
                fail_all(pending, BatchQLError::from(err));
            },
        }
    }
}

fn fail_all(
    pending: Vec<(usize, oneshot::Sender<CallResult>)>,
    error: BatchQLError,
) {
    for (_call_index, respond_to) in pending {
        let _ = respond_to.send(Err(error.clone()));
    }
}
