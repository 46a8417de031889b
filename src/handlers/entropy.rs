//! `wallet_getBip44Entropy_*`: derive per-coin-type key material from the
//! primary seed keyring.
//!
//! The captured suffix is the BIP-44 coin type. It must parse as a `u32`
//! before a derivation path is built, and when an allowlist is configured
//! the code must be a member. Derivation itself is the injected
//! collaborator's job; the result goes back base64-encoded.

use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::Value;

use crate::controllers::{KeyDerivation, KeyringAccess};
use crate::handlers::MethodHandler;
use crate::rpc::envelope::{EndSignal, EngineContext, MethodCall, Next, RpcResponse};
use crate::rpc::errors::RpcError;

pub struct Bip44EntropyHandler {
    keyring: Arc<dyn KeyringAccess>,
    deriver: Arc<dyn KeyDerivation>,
    allowed_coin_types: Option<Vec<u32>>,
}

impl Bip44EntropyHandler {
    pub fn new(
        keyring: Arc<dyn KeyringAccess>,
        deriver: Arc<dyn KeyDerivation>,
        allowed_coin_types: Option<Vec<u32>>,
    ) -> Self {
        Self { keyring, deriver, allowed_coin_types }
    }

    async fn derive(&self, call: &MethodCall) -> Result<String, RpcError> {
        let code_str = call
            .suffix
            .as_deref()
            .ok_or_else(|| RpcError::internal("wildcard dispatch without a captured suffix"))?;
        let code: u32 = code_str.parse().map_err(|_| {
            RpcError::invalid_params(format!("coin type must be a decimal integer, got {code_str:?}"))
        })?;
        if let Some(allowed) = &self.allowed_coin_types {
            if !allowed.contains(&code) {
                return Err(RpcError::invalid_params(format!("coin type {code} is not allowed")));
            }
        }

        let keyring = self.keyring.primary_hd_keyring().await?;
        let path = format!("bip39:{}/bip32:44'/bip32:{}'", keyring.mnemonic, code);
        let material = self.deriver.derive_from_path(&path).await?;
        Ok(BASE64.encode(material))
    }
}

#[async_trait]
impl MethodHandler for Bip44EntropyHandler {
    async fn handle(
        &self,
        call: &MethodCall,
        res: &mut RpcResponse,
        _next: &mut Next,
        end: &mut EndSignal,
        _ctx: &EngineContext,
    ) {
        match self.derive(call).await {
            Ok(encoded) => {
                res.result = Some(Value::String(encoded));
                end.done();
            }
            Err(err) => {
                res.error = Some(err.clone());
                end.fail(err);
            }
        }
    }
}
