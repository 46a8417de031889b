//! Collaborator interfaces the registry binds handlers over.
//!
//! - accounts: account listing
//! - plugins: install registry + per-origin RPC message handlers
//! - keyring: primary HD keyring access + key derivation
//! - prompter: UI alerts/confirmations/custom prompts
//!
//! Each file ships an in-memory reference implementation next to its trait
//! for tests and local development.

pub mod accounts;
pub mod keyring;
pub mod plugins;
pub mod prompter;

use std::sync::Arc;

use async_trait::async_trait;

use crate::rpc::envelope::{EndSignal, EngineContext, MethodCall, Next, RpcResponse};

pub use accounts::{AccountsController, StaticAccounts};
pub use keyring::{HashDeriver, HdKeyring, KeyDerivation, KeyringAccess, StaticKeyring};
pub use plugins::{
    InMemPluginsController, PluginEntry, PluginRpcHandler, PluginState, PluginsController,
};
pub use prompter::{AutoPrompter, UserPrompter};

/// A collaborator that takes over a dispatch wholesale: it receives the
/// same `(call, response, next, end, context)` tuple the handler got and
/// owns the envelope from there (assets and plugin-accounts subsystems).
#[async_trait]
pub trait RpcDelegate: Send + Sync + 'static {
    async fn handle_rpc_request(
        &self,
        call: &MethodCall,
        res: &mut RpcResponse,
        next: &mut Next,
        end: &mut EndSignal,
        ctx: &EngineContext,
    );
}

/// The full set of external collaborators injected at registry build.
/// Bound once; the registry holds these for its lifetime.
#[derive(Clone)]
pub struct Collaborators {
    pub accounts: Arc<dyn AccountsController>,
    pub assets: Arc<dyn RpcDelegate>,
    pub plugin_accounts: Arc<dyn RpcDelegate>,
    pub plugins: Arc<dyn PluginsController>,
    pub keyring: Arc<dyn KeyringAccess>,
    pub deriver: Arc<dyn KeyDerivation>,
    pub prompter: Arc<dyn UserPrompter>,
}
