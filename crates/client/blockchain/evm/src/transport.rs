//! EIP-1193 request transports.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use client_blockchain_core::WalletEvent;
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::sync::broadcast;

use crate::core::ProviderError;

/// Minimal EIP-1193 surface: `request({ method, params })` plus the
/// provider's event stream.
#[async_trait]
pub trait Eip1193Transport: Send + Sync {
    /// Whether a provider is reachable at all.
    fn is_available(&self) -> bool;

    /// Issue one request and return its `result`.
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError>;

    /// `chainChanged` / `accountsChanged` notifications.
    fn subscribe(&self) -> broadcast::Receiver<WalletEvent>;
}

/// JSON-RPC over HTTP.
///
/// Talks to a node that answers wallet methods itself (for instance a local
/// development node with unlocked accounts). Such nodes never push
/// notifications; [`HttpTransport::notify`] lets the host forward any it
/// learns about.
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
    next_id: AtomicU64,
    events: broadcast::Sender<WalletEvent>,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            next_id: AtomicU64::new(1),
            events,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Publish a wallet notification to subscribers.
    pub fn notify(&self, event: WalletEvent) {
        if self.events.send(event).is_err() {
            tracing::trace!("No subscribers for wallet event");
        }
    }
}

#[async_trait]
impl Eip1193Transport for HttpTransport {
    fn is_available(&self) -> bool {
        !self.url.is_empty()
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        tracing::debug!("RPC request #{}: {}", id, method);

        let response: JsonRpcResponse = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(error) = response.error {
            tracing::debug!("RPC #{} failed: {} {}", id, error.code, error.message);
            return Err(ProviderError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        Ok(response.result.unwrap_or(Value::Null))
    }

    fn subscribe(&self) -> broadcast::Receiver<WalletEvent> {
        self.events.subscribe()
    }
}
