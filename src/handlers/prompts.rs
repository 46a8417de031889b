//! `alert`, `confirm`, `customPrompt`: user-facing interrupts routed
//! through the prompter collaborator.
//!
//! `alert` has no data to return; the envelope still needs a defined
//! result, so it reports `true`. `customPrompt` likewise maps a null reply
//! to `true`.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::controllers::UserPrompter;
use crate::handlers::MethodHandler;
use crate::rpc::envelope::{EndSignal, EngineContext, MethodCall, Next, RpcResponse};
use crate::rpc::errors::RpcError;

/// First positional param rendered as prompt text. Untrusted input:
/// non-strings are shown in their JSON form, a missing param as "".
fn text_param(call: &MethodCall) -> String {
    match call.param0() {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn settle(res: &mut RpcResponse, end: &mut EndSignal, outcome: Result<Value, RpcError>) {
    match outcome {
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

pub struct AlertHandler {
    prompter: Arc<dyn UserPrompter>,
    product_name: String,
}

impl AlertHandler {
    pub fn new(prompter: Arc<dyn UserPrompter>, product_name: impl Into<String>) -> Self {
        Self { prompter, product_name: product_name.into() }
    }
}

#[async_trait]
impl MethodHandler for AlertHandler {
    async fn handle(
        &self,
        call: &MethodCall,
        res: &mut RpcResponse,
        _next: &mut Next,
        end: &mut EndSignal,
        ctx: &EngineContext,
    ) {
        let message = format!(
            "{} Notice:\n{} States:\n{}",
            self.product_name,
            ctx.domain,
            text_param(call)
        );
        let outcome = self.prompter.alert(&message).await.map(|()| json!(true));
        settle(res, end, outcome);
    }
}

pub struct ConfirmHandler {
    prompter: Arc<dyn UserPrompter>,
    product_name: String,
}

impl ConfirmHandler {
    pub fn new(prompter: Arc<dyn UserPrompter>, product_name: impl Into<String>) -> Self {
        Self { prompter, product_name: product_name.into() }
    }
}

#[async_trait]
impl MethodHandler for ConfirmHandler {
    async fn handle(
        &self,
        call: &MethodCall,
        res: &mut RpcResponse,
        _next: &mut Next,
        end: &mut EndSignal,
        ctx: &EngineContext,
    ) {
        let prompt = format!(
            "{} Confirmation\n{} asks:\n{}",
            self.product_name,
            ctx.domain,
            text_param(call)
        );
        // suspends until the user answers
        let outcome = self.prompter.confirm(&prompt).await.map(|approved| json!(approved));
        settle(res, end, outcome);
    }
}

pub struct CustomPromptHandler {
    prompter: Arc<dyn UserPrompter>,
    product_name: String,
}

impl CustomPromptHandler {
    pub fn new(prompter: Arc<dyn UserPrompter>, product_name: impl Into<String>) -> Self {
        Self { prompter, product_name: product_name.into() }
    }
}

#[async_trait]
impl MethodHandler for CustomPromptHandler {
    async fn handle(
        &self,
        call: &MethodCall,
        res: &mut RpcResponse,
        _next: &mut Next,
        end: &mut EndSignal,
        ctx: &EngineContext,
    ) {
        let title = format!("{} Notice: {}", self.product_name, ctx.domain);
        let payload = call.param0().cloned().unwrap_or(Value::Null);
        let outcome = self.prompter.custom_prompt(&title, &payload).await.map(|reply| {
            if reply.is_null() {
                json!(true)
            } else {
                reply
            }
        });
        settle(res, end, outcome);
    }
}
