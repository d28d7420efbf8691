use std::fmt::Debug;
use std::fmt::Display;

/// An opaque failure reported by a [`Transport`](crate::Transport).
///
/// The core never inspects transport errors; it hands the same instance to
/// every call of the failed batch.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct TransportError(#[from] anyhow::Error);

impl TransportError {
    pub fn new(error: impl Into<anyhow::Error>) -> Self {
        Self(error.into())
    }

    /// Builds a transport error from a plain message.
    pub fn msg<M>(message: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self(anyhow::Error::msg(message))
    }
}
