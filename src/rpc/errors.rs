//! RPC error taxonomy and wire-level error objects.
//!
//! Every failure a handler reports travels through the envelope as an
//! `RpcError`; the outer engine serializes it with `to_object()` into the
//! standard JSON-RPC `{ code, message, data }` shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// JSON-RPC 2.0 error codes, plus the server-defined range this crate uses.
pub mod codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;

    /// A collaborator call rejected and the failure was forwarded verbatim.
    pub const COLLABORATOR_FAILURE: i32 = -32000;
    /// A handler broke the envelope contract (double End, empty envelope).
    pub const PROTOCOL_VIOLATION: i32 = -32001;
}

/// Errors surfaced to callers through the response envelope.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RpcError {
    /// No pattern matched, or a plugin has no RPC handler registered.
    /// `method` is carried to the caller as the error `data`.
    #[error("{message}")]
    MethodNotFound { message: String, method: String },

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    Internal(String),

    /// Failure propagated verbatim from an external collaborator.
    #[error("{0}")]
    Collaborator(String),

    /// A handler violated the envelope discipline; produced only by the
    /// dispatcher, never by handlers themselves.
    #[error("Protocol violation: {0}")]
    ProtocolViolation(String),
}

impl RpcError {
    /// Standard not-found error for an unmatched method name.
    pub fn method_not_found(method: impl Into<String>) -> Self {
        Self::MethodNotFound {
            message: "Method not found".to_string(),
            method: method.into(),
        }
    }

    pub fn invalid_params(msg: impl Into<String>) -> Self {
        Self::InvalidParams(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn collaborator(msg: impl Into<String>) -> Self {
        Self::Collaborator(msg.into())
    }

    pub fn code(&self) -> i32 {
        match self {
            RpcError::MethodNotFound { .. } => codes::METHOD_NOT_FOUND,
            RpcError::InvalidParams(_) => codes::INVALID_PARAMS,
            RpcError::Internal(_) => codes::INTERNAL_ERROR,
            RpcError::Collaborator(_) => codes::COLLABORATOR_FAILURE,
            RpcError::ProtocolViolation(_) => codes::PROTOCOL_VIOLATION,
        }
    }

    /// Structured payload attached to the wire error, if any.
    pub fn data(&self) -> Option<Value> {
        match self {
            RpcError::MethodNotFound { method, .. } => Some(Value::String(method.clone())),
            _ => None,
        }
    }

    /// Wire shape consumed by the outer JSON-RPC engine.
    pub fn to_object(&self) -> ErrorObject {
        ErrorObject {
            code: self.code(),
            message: self.to_string(),
            data: self.data(),
        }
    }
}

/// `{ code, message, data }` per JSON-RPC 2.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorObject {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}
