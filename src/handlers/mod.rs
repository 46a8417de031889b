//! The restricted method handler set.
//!
//! Every handler honors the envelope contract: set exactly one of
//! `response.result` / `response.error`, then signal End exactly once.
//! Fallible work is plumbed through `Result` and converted to an envelope
//! error before End; nothing escapes a handler boundary.

pub mod accounts;
pub mod delegate;
pub mod entropy;
pub mod plugin;
pub mod prompts;

use async_trait::async_trait;

use crate::rpc::envelope::{EndSignal, EngineContext, MethodCall, Next, RpcResponse};

pub use accounts::ListAccountsHandler;
pub use delegate::DelegateHandler;
pub use entropy::Bip44EntropyHandler;
pub use plugin::PluginForwardHandler;
pub use prompts::{AlertHandler, ConfirmHandler, CustomPromptHandler};

/// A registered method handler. All handlers in this set are terminal:
/// `next` is carried for engine composability but never invoked.
#[async_trait]
pub trait MethodHandler: Send + Sync + 'static {
    async fn handle(
        &self,
        call: &MethodCall,
        res: &mut RpcResponse,
        next: &mut Next,
        end: &mut EndSignal,
        ctx: &EngineContext,
    );
}
