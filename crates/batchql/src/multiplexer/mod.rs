mod batch;
mod multiplexer;
mod multiplexer_config;
mod pending_call;
mod query_handle;

pub use multiplexer::Multiplexer;
pub use multiplexer_config::MultiplexerConfig;
pub use query_handle::QueryHandle;
