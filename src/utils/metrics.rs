use std::collections::HashMap;
use std::sync::Arc;

use lazy_static::lazy_static;
use parking_lot::Mutex;

/// Counter names used by the dispatch core.
pub const DISPATCH_TOTAL: &str = "dispatch_total";
pub const DISPATCH_NOT_FOUND: &str = "dispatch_not_found";
pub const DISPATCH_VIOLATIONS: &str = "dispatch_protocol_violations";
pub const PLUGIN_INSTALLS: &str = "plugin_installs";

/// Counter registry (simple, Prometheus-style).
#[derive(Clone, Default)]
pub struct MetricsRegistry {
    counters: Arc<Mutex<HashMap<String, u64>>>,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inc(&self, name: &str) {
        *self.counters.lock().entry(name.to_string()).or_insert(0) += 1;
    }

    pub fn get(&self, name: &str) -> u64 {
        self.counters.lock().get(name).copied().unwrap_or(0)
    }

    pub fn snapshot(&self) -> HashMap<String, u64> {
        self.counters.lock().clone()
    }
}

lazy_static! {
    pub static ref METRICS: MetricsRegistry = MetricsRegistry::new();
}
