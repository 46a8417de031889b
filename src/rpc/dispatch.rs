//! Dispatcher: resolve a request against the registry, run the handler,
//! and validate the envelope once it completes.
//!
//! The dispatcher is where the envelope discipline is enforced. A handler
//! that signals End twice, or signals End while the envelope holds both or
//! neither of result/error, is rejected with a protocol-violation error in
//! place of whatever it produced. A handler that returns without signaling
//! End at all leaves the request Unresolved; timing that out is the outer
//! engine's job, not ours.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::registry::MethodRegistry;
use crate::rpc::envelope::{EndSignal, EngineContext, MethodCall, Next, RpcRequest, RpcResponse};
use crate::rpc::errors::RpcError;
use crate::utils::metrics::{DISPATCH_NOT_FOUND, DISPATCH_TOTAL, DISPATCH_VIOLATIONS, METRICS};

/// Terminal state of one dispatch.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// The handler signaled End and the envelope is valid.
    Completed(RpcResponse),
    /// The handler future finished without signaling End; the caller's
    /// request stays open until the outer engine times it out.
    Unresolved,
}

impl DispatchOutcome {
    pub fn into_response(self) -> Option<RpcResponse> {
        match self {
            DispatchOutcome::Completed(res) => Some(res),
            DispatchOutcome::Unresolved => None,
        }
    }
}

pub struct Dispatcher {
    registry: Arc<MethodRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<MethodRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &MethodRegistry {
        &self.registry
    }

    /// Run one request to completion. Never panics and never lets a
    /// handler error escape the envelope.
    pub async fn dispatch(&self, req: RpcRequest, ctx: &EngineContext) -> DispatchOutcome {
        METRICS.inc(DISPATCH_TOTAL);

        let Some((entry, suffix)) = self.registry.lookup(&req.method) else {
            METRICS.inc(DISPATCH_NOT_FOUND);
            debug!(method = %req.method, "no pattern matched");
            return DispatchOutcome::Completed(RpcResponse {
                result: None,
                error: Some(RpcError::method_not_found(req.method)),
            });
        };

        debug!(method = %req.method, pattern = %entry.pattern, suffix = ?suffix, "dispatching");

        let call = MethodCall { method: req.method, params: req.params, suffix };
        let mut res = RpcResponse::default();
        let mut next = Next::default();
        let mut end = EndSignal::default();

        entry.handler.handle(&call, &mut res, &mut next, &mut end, ctx).await;

        seal(&call.method, res, &end)
    }
}

/// Validate the envelope against the End signal and produce the outcome.
fn seal(method: &str, res: RpcResponse, end: &EndSignal) -> DispatchOutcome {
    let violation = |why: &str| {
        METRICS.inc(DISPATCH_VIOLATIONS);
        warn!(method = %method, why, "handler violated the envelope protocol");
        DispatchOutcome::Completed(RpcResponse {
            result: None,
            error: Some(RpcError::ProtocolViolation(format!("{method}: {why}"))),
        })
    };

    match end.signals() {
        0 => {
            warn!(method = %method, "handler returned without signaling End");
            DispatchOutcome::Unresolved
        }
        1 => {
            if !res.is_settled() {
                return violation("envelope must carry exactly one of result/error at End");
            }
            if end.carried_error().is_some() != res.error.is_some() {
                return violation("End signal and envelope disagree about failure");
            }
            DispatchOutcome::Completed(res)
        }
        _ => violation("End signaled more than once"),
    }
}
