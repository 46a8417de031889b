//! Keyring access and key derivation collaborators.
//!
//! The registry never touches mnemonic storage or derivation math itself;
//! both arrive as injected interfaces. `HashDeriver` is a deterministic
//! stand-in for tests/dev, not a hardened KDF.

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::rpc::errors::RpcError;

/// The primary HD keyring as handlers see it.
#[derive(Debug, Clone)]
pub struct HdKeyring {
    pub mnemonic: String,
}

/// Access to the wallet's primary seed keyring.
#[async_trait]
pub trait KeyringAccess: Send + Sync + 'static {
    /// The primary HD keyring, or an error if the vault holds none.
    async fn primary_hd_keyring(&self) -> Result<HdKeyring, RpcError>;
}

/// Derives key material from a `bip39:.../bip32:...` style path string.
#[async_trait]
pub trait KeyDerivation: Send + Sync + 'static {
    async fn derive_from_path(&self, path: &str) -> Result<Vec<u8>, RpcError>;
}

/// Fixed-mnemonic keyring (good for tests/dev).
#[derive(Debug, Clone, Default)]
pub struct StaticKeyring {
    mnemonic: Option<String>,
}

impl StaticKeyring {
    pub fn new(mnemonic: impl Into<String>) -> Self {
        Self { mnemonic: Some(mnemonic.into()) }
    }

    /// A vault with no primary keyring; derivation requests fail.
    pub fn empty() -> Self {
        Self { mnemonic: None }
    }
}

#[async_trait]
impl KeyringAccess for StaticKeyring {
    async fn primary_hd_keyring(&self) -> Result<HdKeyring, RpcError> {
        self.mnemonic
            .clone()
            .map(|mnemonic| HdKeyring { mnemonic })
            .ok_or_else(|| RpcError::collaborator("no primary HD keyring"))
    }
}

/// Deterministic deriver chaining SHA-256 over the path segments.
/// For tests and local development only.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashDeriver;

#[async_trait]
impl KeyDerivation for HashDeriver {
    async fn derive_from_path(&self, path: &str) -> Result<Vec<u8>, RpcError> {
        let mut acc = [0u8; 32];
        for segment in path.split('/') {
            let mut hasher = Sha256::new();
            hasher.update(acc);
            hasher.update(segment.as_bytes());
            acc = hasher.finalize().into();
        }
        Ok(acc.to_vec())
    }
}
