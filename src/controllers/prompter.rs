//! User-prompt collaborator: the UI surface handlers interrupt.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use crate::rpc::errors::RpcError;

/// UI prompt interface. `confirm` and `custom_prompt` suspend until the
/// user responds; none of these are rendered by this crate.
#[async_trait]
pub trait UserPrompter: Send + Sync + 'static {
    /// Show a notice over the current page.
    async fn alert(&self, message: &str) -> Result<(), RpcError>;

    /// Ask the user to approve or reject.
    async fn confirm(&self, prompt: &str) -> Result<bool, RpcError>;

    /// Show a custom popup and return whatever it produced.
    async fn custom_prompt(&self, title: &str, payload: &Value) -> Result<Value, RpcError>;
}

/// Scripted prompter (good for tests/dev): answers with fixed responses
/// and records every message shown.
pub struct AutoPrompter {
    confirm_answer: bool,
    custom_reply: Value,
    shown: Mutex<Vec<String>>,
}

impl AutoPrompter {
    pub fn new(confirm_answer: bool, custom_reply: Value) -> Self {
        Self {
            confirm_answer,
            custom_reply,
            shown: Mutex::new(Vec::new()),
        }
    }

    /// Messages and titles presented so far, in order.
    pub fn shown(&self) -> Vec<String> {
        self.shown.lock().clone()
    }
}

#[async_trait]
impl UserPrompter for AutoPrompter {
    async fn alert(&self, message: &str) -> Result<(), RpcError> {
        self.shown.lock().push(message.to_string());
        Ok(())
    }

    async fn confirm(&self, prompt: &str) -> Result<bool, RpcError> {
        self.shown.lock().push(prompt.to_string());
        Ok(self.confirm_answer)
    }

    async fn custom_prompt(&self, title: &str, _payload: &Value) -> Result<Value, RpcError> {
        self.shown.lock().push(title.to_string());
        Ok(self.custom_reply.clone())
    }
}
