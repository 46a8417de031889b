//! walletgate: permissioned JSON-RPC method registry for a host wallet
//! process.
//!
//! External callers (web pages, installed plugins) reach privileged wallet
//! operations only through methods registered here. The crate resolves
//! method names (exact or prefix-wildcard with captured suffix) to bound
//! handlers, enforces the response-envelope discipline, and forwards into
//! the wallet's collaborator subsystems.
//!
//! - registry: patterns, capability descriptions, the handler table
//! - rpc: envelope contract, error codes, the dispatcher
//! - handlers: the restricted method set
//! - controllers: collaborator traits + in-memory reference impls
//! - config / utils: registry configuration, logging, metrics

pub mod config;
pub mod controllers;
pub mod handlers;
pub mod registry;
pub mod rpc;
pub mod utils;

pub use config::RegistryConfig;
pub use controllers::Collaborators;
pub use registry::{MethodPattern, MethodRegistry};
pub use rpc::{DispatchOutcome, Dispatcher, EngineContext, RpcError, RpcRequest, RpcResponse};

#[cfg(test)]
mod tests;
