//! Registry configuration.

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

fn default_product_name() -> String {
    "WalletGate".to_string()
}

/// Configuration bound into the registry at build time.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// Product name rendered into alert/confirm/prompt text.
    #[serde(default = "default_product_name")]
    pub product_name: String,

    /// Optional allowlist of BIP-44 coin types the entropy handler will
    /// derive for. `None` accepts any numeric coin type.
    #[serde(default)]
    pub allowed_coin_types: Option<Vec<u32>>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            product_name: default_product_name(),
            allowed_coin_types: None,
        }
    }
}

impl RegistryConfig {
    /// Load config from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let cfg: RegistryConfig = toml::from_str(&data)?;
        Ok(cfg)
    }
}
