use crate::multiplexer::pending_call::CallResult;
use crate::BatchQLError;
use std::future::Future;
use std::pin::Pin;
use std::task::Context;
use std::task::Poll;
use tokio::sync::oneshot;

/// The pending result of one [`Multiplexer::query`](crate::Multiplexer::query)
/// call.
///
/// Resolves once the call's batch has been flushed. If the batch is
/// discarded before that happens, resolves to
/// [`BatchQLError::BatchDropped`].
#[must_use = "a QueryHandle does nothing unless awaited"]
#[derive(Debug)]
pub struct QueryHandle {
    receiver: oneshot::Receiver<CallResult>,
}

impl QueryHandle {
    pub(crate) fn new(receiver: oneshot::Receiver<CallResult>) -> Self {
        Self { receiver }
    }
}

impl Future for QueryHandle {
    type Output = CallResult;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|received| received.unwrap_or(Err(BatchQLError::BatchDropped)))
    }
}
