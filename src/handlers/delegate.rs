//! `wallet_manageAssets` / `wallet_manageIdentities`: hand the whole
//! dispatch to a collaborator. No logic of our own; whatever the delegate
//! sets in the envelope is the outcome.

use std::sync::Arc;

use async_trait::async_trait;

use crate::controllers::RpcDelegate;
use crate::handlers::MethodHandler;
use crate::rpc::envelope::{EndSignal, EngineContext, MethodCall, Next, RpcResponse};

pub struct DelegateHandler {
    target: Arc<dyn RpcDelegate>,
}

impl DelegateHandler {
    pub fn new(target: Arc<dyn RpcDelegate>) -> Self {
        Self { target }
    }
}

#[async_trait]
impl MethodHandler for DelegateHandler {
    async fn handle(
        &self,
        call: &MethodCall,
        res: &mut RpcResponse,
        next: &mut Next,
        end: &mut EndSignal,
        ctx: &EngineContext,
    ) {
        self.target.handle_rpc_request(call, res, next, end, ctx).await;
    }
}
