mod options;
mod service;
mod stats;

pub use options::{EngineOptions, EngineOptionsBuilder, EngineOptionsError, DEFAULT_MAX_COMPONENTS};
pub use service::Engine;
pub use stats::{EngineMetrics, MetricsSnapshot};
