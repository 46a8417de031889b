//! Dispatch envelope: the per-call request/response/end contract.
//!
//! Every handler receives `(call, response, next, end, context)` and must
//! signal End exactly once on every path, with the envelope holding exactly
//! one of `result` / `error` at that point. The dispatcher validates this
//! after the handler future completes; see `rpc::dispatch`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rpc::errors::RpcError;

/// Caller-supplied request. Untrusted: `method` is matched against the
/// registered patterns and `params` is only ever read at index 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    pub method: String,
    #[serde(default)]
    pub params: Vec<Value>,
}

impl RpcRequest {
    pub fn new(method: impl Into<String>, params: Vec<Value>) -> Self {
        Self { method: method.into(), params }
    }
}

/// The resolved view of a request handed to a handler: the raw method name
/// and params, plus the suffix captured by a wildcard match (None for exact
/// matches). Suffix extraction happens in the matcher, never in handlers.
#[derive(Debug, Clone)]
pub struct MethodCall {
    pub method: String,
    pub params: Vec<Value>,
    pub suffix: Option<String>,
}

impl MethodCall {
    /// The single positional argument every handler in the set uses.
    pub fn param0(&self) -> Option<&Value> {
        self.params.first()
    }
}

/// Mutable response envelope. A completed dispatch carries exactly one of
/// `result` / `error`; anything else is a protocol violation.
#[derive(Debug, Clone, Default)]
pub struct RpcResponse {
    pub result: Option<Value>,
    pub error: Option<RpcError>,
}

impl RpcResponse {
    /// True when exactly one of result/error is set.
    pub fn is_settled(&self) -> bool {
        self.result.is_some() != self.error.is_some()
    }
}

/// Completion signal. Handlers call `done()` on success or `fail(err)` with
/// the same error placed into `response.error`; the dispatcher checks the
/// signal count and error consistency once the handler returns.
#[derive(Debug, Default)]
pub struct EndSignal {
    signals: u32,
    error: Option<RpcError>,
}

impl EndSignal {
    /// Signal successful completion.
    pub fn done(&mut self) {
        self.signals += 1;
    }

    /// Signal failed completion, carrying the envelope error.
    pub fn fail(&mut self, err: RpcError) {
        self.signals += 1;
        self.error = Some(err);
    }

    pub fn signals(&self) -> u32 {
        self.signals
    }

    pub fn carried_error(&self) -> Option<&RpcError> {
        self.error.as_ref()
    }
}

/// Reserved continuation for a further middleware stage. Every handler in
/// this set is terminal and ignores it, but the parameter stays in the
/// contract so an outer engine can compose additional stages.
#[derive(Debug, Default)]
pub struct Next {
    _reserved: (),
}

/// Read-only per-call context resolved by the outer engine.
#[derive(Debug, Clone)]
pub struct EngineContext {
    /// Requestor origin attributed to the incoming request.
    pub domain: String,
}

impl EngineContext {
    pub fn new(domain: impl Into<String>) -> Self {
        Self { domain: domain.into() }
    }
}
