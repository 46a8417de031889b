//! Plugins collaborator: installed-plugin registry and per-origin RPC
//! message handlers.
//!
//! Install state is an explicit transition Uninstalled -> Installed ->
//! Ready (RPC handler registered). `add` MUST be idempotent: concurrent
//! dispatches for the same origin may both observe "not installed" and
//! both call it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::rpc::errors::RpcError;

/// Lifecycle state of an installed plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginState {
    /// Installed, but no RPC message handler registered yet.
    Installed,
    /// Installed and able to receive RPC messages.
    Ready,
}

/// Registry entry for one plugin origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginEntry {
    pub origin: String,
    pub state: PluginState,
}

/// Per-origin RPC message handler registered by a running plugin.
#[async_trait]
pub trait PluginRpcHandler: Send + Sync + 'static {
    /// Handle a message from `requestor`, returning the value to place in
    /// the caller's `response.result`.
    async fn handle(&self, requestor: &str, payload: Value) -> Result<Value, RpcError>;
}

/// Plugin lifecycle interface implemented by the wallet's plugin subsystem.
#[async_trait]
pub trait PluginsController: Send + Sync + 'static {
    /// Registry entry for `origin`, if installed.
    async fn get(&self, origin: &str) -> Option<PluginEntry>;

    /// Install `origin`. Idempotent: installing an already-present origin
    /// is a no-op, never an error.
    async fn add(&self, origin: &str) -> Result<(), RpcError>;

    /// RPC message handler for `origin`, once the plugin is Ready.
    async fn rpc_message_handler(&self, origin: &str) -> Option<Arc<dyn PluginRpcHandler>>;
}

/// In-memory plugins controller (good for tests/dev).
/// Lock order is entries before handlers, everywhere.
#[derive(Default)]
pub struct InMemPluginsController {
    entries: Mutex<HashMap<String, PluginEntry>>,
    handlers: Mutex<HashMap<String, Arc<dyn PluginRpcHandler>>>,
    // counts actual install actions, not add() calls
    installs: AtomicU64,
}

impl InMemPluginsController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the RPC handler for `origin`, flipping an installed entry
    /// to Ready. A handler registered before install takes effect as soon
    /// as the origin is added.
    pub async fn register_rpc_handler(&self, origin: &str, handler: Arc<dyn PluginRpcHandler>) {
        let mut entries = self.entries.lock().await;
        self.handlers.lock().await.insert(origin.to_string(), handler);
        if let Some(entry) = entries.get_mut(origin) {
            entry.state = PluginState::Ready;
        }
    }

    /// Number of install actions performed (idempotent re-adds excluded).
    pub fn install_count(&self) -> u64 {
        self.installs.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PluginsController for InMemPluginsController {
    async fn get(&self, origin: &str) -> Option<PluginEntry> {
        self.entries.lock().await.get(origin).cloned()
    }

    async fn add(&self, origin: &str) -> Result<(), RpcError> {
        let mut entries = self.entries.lock().await;
        if entries.contains_key(origin) {
            return Ok(());
        }
        let state = if self.handlers.lock().await.contains_key(origin) {
            PluginState::Ready
        } else {
            PluginState::Installed
        };
        entries.insert(origin.to_string(), PluginEntry { origin: origin.to_string(), state });
        self.installs.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn rpc_message_handler(&self, origin: &str) -> Option<Arc<dyn PluginRpcHandler>> {
        self.handlers.lock().await.get(origin).cloned()
    }
}
