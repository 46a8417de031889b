//! Accounts collaborator: the subsystem that knows which addresses exist.

use async_trait::async_trait;

use crate::rpc::errors::RpcError;

/// Account listing interface implemented by the wallet's accounts subsystem.
#[async_trait]
pub trait AccountsController: Send + Sync + 'static {
    /// Addresses the requestor is allowed to see.
    async fn get_accounts(&self) -> Result<Vec<String>, RpcError>;
}

/// Fixed account list (good for tests/dev).
#[derive(Debug, Clone, Default)]
pub struct StaticAccounts {
    accounts: Vec<String>,
}

impl StaticAccounts {
    pub fn new(accounts: Vec<String>) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl AccountsController for StaticAccounts {
    async fn get_accounts(&self) -> Result<Vec<String>, RpcError> {
        Ok(self.accounts.clone())
    }
}
