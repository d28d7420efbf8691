use crate::BatchQLError;
use crate::QueryResponse;
use serde_json::Map;
use serde_json::Value;
use tokio::sync::oneshot;

pub(crate) type CallResult = Result<QueryResponse, BatchQLError>;

/// A submitted call waiting in a batch.
pub(crate) struct PendingCall {
    pub query: String,
    pub variables: Map<String, Value>,
    pub respond_to: oneshot::Sender<CallResult>,
}
