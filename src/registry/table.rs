//! The restricted method registry: pattern -> (description, handler).
//!
//! Built once at startup over the injected collaborators; no entry is
//! added, removed, or mutated afterward. Lookup resolves the most specific
//! match (exact beats wildcard) and returns the captured suffix alongside
//! the entry. The registry performs no I/O of its own.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use thiserror::Error;

use crate::config::RegistryConfig;
use crate::controllers::Collaborators;
use crate::handlers::{
    AlertHandler, Bip44EntropyHandler, ConfirmHandler, CustomPromptHandler, DelegateHandler,
    ListAccountsHandler, MethodHandler, PluginForwardHandler,
};
use crate::registry::pattern::{MethodPattern, PatternError};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] PatternError),
    #[error("duplicate pattern: {0}")]
    DuplicatePattern(String),
    #[error("two wildcard patterns share the prefix {0:?}")]
    DuplicateWildcardPrefix(String),
}

/// One registered method: its pattern, the capability text a UI shows when
/// asking the user to grant it, and the bound handler.
pub struct HandlerEntry {
    pub pattern: MethodPattern,
    pub description: &'static str,
    pub handler: Arc<dyn MethodHandler>,
}

impl HandlerEntry {
    pub(crate) fn new(
        literal: &str,
        description: &'static str,
        handler: Arc<dyn MethodHandler>,
    ) -> Result<Self, RegistryError> {
        Ok(Self {
            pattern: MethodPattern::parse(literal)?,
            description,
            handler,
        })
    }
}

pub struct MethodRegistry {
    entries: Vec<HandlerEntry>,
    exact: HashMap<String, usize>,
    wildcards: Vec<usize>,
}

impl MethodRegistry {
    /// Build the full restricted method table over the collaborators.
    pub fn new(collab: Collaborators, config: &RegistryConfig) -> Result<Self, RegistryError> {
        let product = config.product_name.as_str();
        let entries = vec![
            HandlerEntry::new(
                "eth_accounts",
                "View Ethereum accounts",
                Arc::new(ListAccountsHandler::new(collab.accounts.clone())),
            )?,
            HandlerEntry::new(
                "wallet_manageAssets",
                "Display custom assets in your wallet.",
                Arc::new(DelegateHandler::new(collab.assets.clone())),
            )?,
            HandlerEntry::new(
                "wallet_manageIdentities",
                "Provide accounts to your wallet and be responsible for their security.",
                Arc::new(DelegateHandler::new(collab.plugin_accounts.clone())),
            )?,
            HandlerEntry::new(
                "alert",
                "Show alerts over the current page.",
                Arc::new(AlertHandler::new(collab.prompter.clone(), product)),
            )?,
            HandlerEntry::new(
                "confirm",
                "Display confirmations for user action.",
                Arc::new(ConfirmHandler::new(collab.prompter.clone(), product)),
            )?,
            HandlerEntry::new(
                "customPrompt",
                "Prompt you for input via a custom popup.",
                Arc::new(CustomPromptHandler::new(collab.prompter.clone(), product)),
            )?,
            HandlerEntry::new(
                "wallet_getBip44Entropy_*",
                "Control private keys for coin_type \"$1\"",
                Arc::new(Bip44EntropyHandler::new(
                    collab.keyring.clone(),
                    collab.deriver.clone(),
                    config.allowed_coin_types.clone(),
                )),
            )?,
            HandlerEntry::new(
                "wallet_plugin_*",
                "Connect to plugin $1, and install it if not available yet.",
                Arc::new(PluginForwardHandler::new(collab.plugins.clone())),
            )?,
        ];
        Self::from_entries(entries)
    }

    /// Index a fixed entry table, enforcing the construction invariants:
    /// unique patterns, and at most one wildcard per fixed prefix.
    pub(crate) fn from_entries(entries: Vec<HandlerEntry>) -> Result<Self, RegistryError> {
        let mut exact = HashMap::new();
        let mut wildcards: Vec<usize> = Vec::new();

        for (idx, entry) in entries.iter().enumerate() {
            match &entry.pattern {
                MethodPattern::Exact(name) => {
                    if exact.insert(name.clone(), idx).is_some() {
                        return Err(RegistryError::DuplicatePattern(name.clone()));
                    }
                }
                MethodPattern::PrefixWildcard { prefix } => {
                    let taken = wildcards
                        .iter()
                        .any(|&w| entries[w].pattern.fixed_part() == prefix.as_str());
                    if taken {
                        return Err(RegistryError::DuplicateWildcardPrefix(prefix.clone()));
                    }
                    wildcards.push(idx);
                }
            }
        }

        Ok(Self { entries, exact, wildcards })
    }

    /// Resolve a method name to its entry and captured suffix. Exact
    /// matches win over wildcards; among wildcard matches the longest
    /// prefix (most specific family) wins. Wildcard hits carry
    /// `Some(suffix)`; `None` is the method-not-found condition.
    pub fn lookup(&self, method: &str) -> Option<(&HandlerEntry, Option<String>)> {
        if let Some(&idx) = self.exact.get(method) {
            return Some((&self.entries[idx], None));
        }
        self.wildcards
            .iter()
            .filter_map(|&idx| {
                let entry = &self.entries[idx];
                entry.pattern.matches(method).map(|suffix| (entry, suffix))
            })
            .max_by_key(|(entry, _)| entry.pattern.fixed_part().len())
    }

    /// Plain pattern -> description map for UI permission-prompt rendering.
    /// Derived from the handler table, so the two can never diverge.
    pub fn descriptions(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|e| (e.pattern.to_string(), e.description.to_string()))
            .collect()
    }

    pub fn entries(&self) -> &[HandlerEntry] {
        &self.entries
    }
}
