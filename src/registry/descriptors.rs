//! Static capability description tables. Pure data, no behavior.
//!
//! Descriptions may contain the positional placeholder `$1`, which a UI
//! layer substitutes with the wildcard-captured suffix when rendering a
//! permission prompt. This crate never substitutes it.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// A method-name pattern paired with its human-readable capability text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub pattern: &'static str,
    pub description: &'static str,
}

// This list determines which internal API methods a plugin can be granted,
// and the text shown when a user is asked to approve each one.
pub const INTERNAL_METHOD_DESCRIPTIONS: &[MethodDescriptor] = &[
    MethodDescriptor { pattern: "onNewTx", description: "Take action whenever a new transaction is created" },
    MethodDescriptor { pattern: "fetch", description: "Retrieve data from external sites" },
    MethodDescriptor { pattern: "updatePluginState", description: "Store data locally" },
    MethodDescriptor { pattern: "getPluginState", description: "Get data stored locally" },
    MethodDescriptor { pattern: "subscribeToPreferencesControllerChanges", description: "Access your preferences and take action when they change" },
    MethodDescriptor { pattern: "updatePreferencesControllerState", description: "Update/modify your preferences" },
    MethodDescriptor { pattern: "generateSignature", description: "Sign messages with your account" },
    MethodDescriptor { pattern: "addAddressAudit", description: "Check the recipients of your transaction and show you warnings if they are untrustworthy" },
    MethodDescriptor { pattern: "addKnownMethodData", description: "Update and store data about a known contract method" },
    MethodDescriptor { pattern: "addNewAccount", description: "Adds a new account to the default (first) HD seed phrase keyring" },
    MethodDescriptor { pattern: "addNewKeyring", description: "Create a new keyring" },
    MethodDescriptor { pattern: "addToken", description: "Add a new token to be tracked" },
    MethodDescriptor { pattern: "checkHardwareStatus", description: "Check if the hardware device is unlocked" },
    MethodDescriptor { pattern: "connectHardware", description: "Fetch the account list from a hardware device" },
    MethodDescriptor { pattern: "delCustomRpc", description: "Delete a selected custom URL" },
    MethodDescriptor { pattern: "estimateGas", description: "Estimate the gas required for a transaction" },
    MethodDescriptor { pattern: "forgetDevice", description: "Clear all connected devices" },
    MethodDescriptor { pattern: "getApprovedAccounts", description: "Get a list of all approved accounts" },
    MethodDescriptor { pattern: "getFilteredTxList", description: "Get a list of filtered transactions" },
    MethodDescriptor { pattern: "getGasPrice", description: "Estimates a good gas price at recent prices" },
    MethodDescriptor { pattern: "getTxById", description: "Get full data of a transaction with a given wallet tx id" },
    MethodDescriptor { pattern: "importAccountWithStrategy", description: "Imports an account with the specified import strategy" },
    MethodDescriptor { pattern: "isNonceTaken", description: "Check if a given nonce is available for use" },
    MethodDescriptor { pattern: "removeAccount", description: "Removes an account from state / storage" },
    MethodDescriptor { pattern: "removeFromAddressBook", description: "Remove an entry from the address book" },
    MethodDescriptor { pattern: "removeSuggestedTokens", description: "Remove a token from the list of suggested tokens" },
    MethodDescriptor { pattern: "removeToken", description: "Remove a token from the list of tracked tokens" },
    MethodDescriptor { pattern: "removePermissionsFor", description: "Remove account access for a given domain" },
    MethodDescriptor { pattern: "resetAccount", description: "Clears the transaction history, to allow users to force-reset their nonces" },
    MethodDescriptor { pattern: "setAccountLabel", description: "Set the label for the currently-selected account" },
    MethodDescriptor { pattern: "setAddressBook", description: "Add or update an entry in the address book" },
    MethodDescriptor { pattern: "setCurrentCurrency", description: "Set the currently-selected currency" },
    MethodDescriptor { pattern: "setCurrentLocale", description: "Set the current locale, affecting the language rendered" },
    MethodDescriptor { pattern: "setCustomRpc", description: "Select a custom URL for an RPC provider" },
    MethodDescriptor { pattern: "setFeatureFlag", description: "Enable or disable a given feature-flag" },
    MethodDescriptor { pattern: "setPreference", description: "Update a given user preference" },
    MethodDescriptor { pattern: "setProviderType", description: "Update the current provider type" },
    MethodDescriptor { pattern: "setSeedPhraseBackedUp", description: "Mark a seed phrase as backed up" },
    MethodDescriptor { pattern: "setSelectedAddress", description: "Set the currently-selected address" },
    MethodDescriptor { pattern: "unlockHardwareWalletAccount", description: "Imports an account from a hardware device" },
    MethodDescriptor { pattern: "updateAndSetCustomRpc", description: "Select a custom URL for an RPC provider and update it" },
    MethodDescriptor { pattern: "verifySeedPhrase", description: "Verifies the validity of the current vault seed phrase" },
    MethodDescriptor { pattern: "whitelistPhishingDomain", description: "Mark a malicious-looking domain as safe" },
    // Event subscriptions surfaced by the block tracker and tx controller
    MethodDescriptor { pattern: "tx:status-update", description: "Be notified when the status of your transactions changes" },
    MethodDescriptor { pattern: "latest", description: "Be notified when new blocks are added to the blockchain" },
    MethodDescriptor { pattern: "networkDidChange", description: "Be notified when your selected network changes" },
    MethodDescriptor { pattern: "newUnapprovedTx", description: "Be notified with details of your new transactions" },
];

lazy_static! {
    static ref INTERNAL_INDEX: HashMap<&'static str, &'static str> = INTERNAL_METHOD_DESCRIPTIONS
        .iter()
        .map(|d| (d.pattern, d.description))
        .collect();
}

/// Description for an internal (plugin-restricted) method name, if listed.
pub fn internal_method_description(name: &str) -> Option<&'static str> {
    INTERNAL_INDEX.get(name).copied()
}
