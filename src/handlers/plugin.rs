//! `wallet_plugin_*`: forward an RPC message to the plugin named by the
//! captured suffix, installing it first if it is not present.
//!
//! This is the one handler with a write side effect on shared state: a
//! read-shaped request triggers installation inside the same dispatch.
//! Two concurrent dispatches for the same origin may both observe "not
//! installed"; `PluginsController::add` is required to be idempotent.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use crate::controllers::PluginsController;
use crate::handlers::MethodHandler;
use crate::rpc::envelope::{EndSignal, EngineContext, MethodCall, Next, RpcResponse};
use crate::rpc::errors::RpcError;
use crate::utils::metrics::{METRICS, PLUGIN_INSTALLS};

pub struct PluginForwardHandler {
    plugins: Arc<dyn PluginsController>,
}

impl PluginForwardHandler {
    pub fn new(plugins: Arc<dyn PluginsController>) -> Self {
        Self { plugins }
    }

    async fn forward(&self, call: &MethodCall, ctx: &EngineContext) -> Result<Value, RpcError> {
        let origin = call
            .suffix
            .as_deref()
            .ok_or_else(|| RpcError::internal("wildcard dispatch without a captured suffix"))?;

        if self.plugins.get(origin).await.is_none() {
            info!(%origin, "installing plugin on first use");
            self.plugins.add(origin).await?;
            METRICS.inc(PLUGIN_INSTALLS);
        }

        let handler = self.plugins.rpc_message_handler(origin).await.ok_or_else(|| {
            RpcError::MethodNotFound {
                message: "Plugin RPC message handler not found.".to_string(),
                method: call.method.clone(),
            }
        })?;

        let payload = call.param0().cloned().unwrap_or(Value::Null);
        handler.handle(&ctx.domain, payload).await
    }
}

#[async_trait]
impl MethodHandler for PluginForwardHandler {
    async fn handle(
        &self,
        call: &MethodCall,
        res: &mut RpcResponse,
        _next: &mut Next,
        end: &mut EndSignal,
        ctx: &EngineContext,
    ) {
        match self.forward(call, ctx).await {
            Ok(value) => {
                res.result = Some(value);
                end.done();
            }
            Err(err) => {
                res.error = Some(err.clone());
                end.fail(err);
            }
        }
    }
}
