//! `eth_accounts`: list account addresses via the accounts collaborator.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::controllers::AccountsController;
use crate::handlers::MethodHandler;
use crate::rpc::envelope::{EndSignal, EngineContext, MethodCall, Next, RpcResponse};

pub struct ListAccountsHandler {
    accounts: Arc<dyn AccountsController>,
}

impl ListAccountsHandler {
    pub fn new(accounts: Arc<dyn AccountsController>) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl MethodHandler for ListAccountsHandler {
    async fn handle(
        &self,
        _call: &MethodCall,
        res: &mut RpcResponse,
        _next: &mut Next,
        end: &mut EndSignal,
        _ctx: &EngineContext,
    ) {
        match self.accounts.get_accounts().await {
            Ok(list) => {
                res.result = Some(json!(list));
                end.done();
            }
            Err(err) => {
                // collaborator failure propagated verbatim
                res.error = Some(err.clone());
                end.fail(err);
            }
        }
    }
}
