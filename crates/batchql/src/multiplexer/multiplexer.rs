use crate::multiplexer::batch::Batch;
use crate::multiplexer::pending_call::PendingCall;
use crate::BatchQLError;
use crate::MultiplexerConfig;
use crate::QueryHandle;
use crate::Transport;
use serde_json::Map;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::sync::oneshot;
use tokio::time::Instant;

/// Batches queries submitted within a time window into one transport
/// request.
///
/// The first call arriving while no batch is open starts a batch and its
/// window. Calls arriving before the window ends join that batch. When the
/// window ends (or the batch reaches
/// [`max_batch_size`](MultiplexerConfig::max_batch_size)) the batch is
/// flushed on its own task, and the next call opens a new batch right away.
///
/// Dropping the multiplexer flushes the batch being collected.
#[derive(Clone, Debug)]
pub struct Multiplexer {
    sender: mpsc::UnboundedSender<PendingCall>,
}

impl Multiplexer {
    /// Creates a multiplexer flushing batches `window` after their first
    /// call.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn new(transport: impl Transport + 'static, window: Duration) -> Self {
        Self::with_config(transport, MultiplexerConfig::new(window))
    }

    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn with_config(
        transport: impl Transport + 'static,
        config: MultiplexerConfig,
    ) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        tokio::spawn(collect_batches(Arc::new(transport), receiver, config));
        Self { sender }
    }

    /// Submits a query. Never waits: the returned handle resolves once the
    /// call's batch has been flushed.
    pub fn query(
        &self,
        query: impl Into<String>,
        variables: Map<String, Value>,
    ) -> QueryHandle {
        let (respond_to, receiver) = oneshot::channel();
        let call = PendingCall {
            query: query.into(),
            variables,
            respond_to,
        };
        if let Err(mpsc::error::SendError(call)) = self.sender.send(call) {
            let _ = call.respond_to.send(Err(BatchQLError::BatchDropped));
        }
        QueryHandle::new(receiver)
    }
}

/// Owns the collecting batch. At most one batch collects at a time;
/// flushing happens on spawned tasks so collection continues meanwhile.
async fn collect_batches(
    transport: Arc<dyn Transport>,
    mut receiver: mpsc::UnboundedReceiver<PendingCall>,
    config: MultiplexerConfig,
) {
    let mut next_batch_id = 0u64;
    while let Some(first) = receiver.recv().await {
        let batch_id = next_batch_id;
        next_batch_id += 1;
        tracing::debug!(
            event = "batch_opened",
            batch_id,
            window_ms = config.window.as_millis() as u64,
            "opened batch"
        );

        let mut batch = Batch::open(batch_id, first);
        let flush_at = Instant::now() + config.window;
        let mut closed = false;
        while !config.is_full(batch.len()) {
            match tokio::time::timeout_at(flush_at, receiver.recv()).await {
                Ok(Some(call)) => batch.push(call),
                Ok(None) => {
                    closed = true;
                    break;
                },
                Err(_) => break,
            }
        }

        tokio::spawn(batch.flush(Arc::clone(&transport)));
        if closed {
            break;
        }
    }
}
