use crate::TransportError;
use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// The merged request handed to a [`Transport`]: one query text and the
/// combined, namespaced variables of every call in the batch.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct TransportRequest {
    pub query: String,
    pub variables: serde_json::Map<String, serde_json::Value>,
}

/// A GraphQL response body as returned by the server.
///
/// Missing members deserialize to `null` data and no errors.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct TransportResponse {
    pub data: serde_json::Value,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<serde_json::Value>>,
}

/// Sends a merged request over the network.
///
/// Request framing (URL, headers, authentication, retries and timeouts) is
/// entirely the implementor's concern; the multiplexer awaits `send` for as
/// long as it takes.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        (**self).send(request).await
    }
}
