use serde::Deserialize;
use serde::Deserializer;
use std::time::Duration;

fn default_window() -> Duration {
    Duration::from_millis(10)
}

fn deserialize_millis<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_millis)
}

/// Batching behaviour of a [`Multiplexer`](crate::Multiplexer).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct MultiplexerConfig {
    /// How long a batch collects calls after its first call arrives.
    /// Serialized as `window_ms`.
    #[serde(
        rename = "window_ms",
        default = "default_window",
        deserialize_with = "deserialize_millis"
    )]
    pub window: Duration,

    /// Flush a batch as soon as it holds this many calls, without waiting
    /// for the window to end.
    #[serde(default)]
    pub max_batch_size: Option<usize>,
}

impl MultiplexerConfig {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    pub fn with_max_batch_size(mut self, max_batch_size: usize) -> Self {
        self.max_batch_size = Some(max_batch_size);
        self
    }

    pub(crate) fn is_full(&self, batch_len: usize) -> bool {
        self.max_batch_size.is_some_and(|max| batch_len >= max)
    }
}

impl Default for MultiplexerConfig {
    fn default() -> Self {
        Self {
            window: default_window(),
            max_batch_size: None,
        }
    }
}
