//! RPC module
//!
//! - envelope: the per-call request/response/end contract
//! - errors: RPC error taxonomy and JSON-RPC wire codes
//! - dispatch: method resolution + handler invocation + envelope validation
//!
//! The outer JSON-RPC transport is not here; it hands `RpcRequest`s and an
//! `EngineContext` to a `Dispatcher` and serializes whatever comes back.

pub mod dispatch;
pub mod envelope;
pub mod errors;

pub use dispatch::{DispatchOutcome, Dispatcher};
pub use envelope::{EndSignal, EngineContext, MethodCall, Next, RpcRequest, RpcResponse};
pub use errors::{codes, ErrorObject, RpcError};
