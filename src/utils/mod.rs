//! Utility module: logging and metrics plumbing.

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
pub use metrics::{MetricsRegistry, METRICS};
