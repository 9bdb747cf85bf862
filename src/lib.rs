pub mod arena;
pub mod engine;
pub mod errors;
pub mod evaluator;
pub mod index;
pub mod path;
pub mod pattern;
pub mod types;

pub use engine::{Engine, EngineOptions, EngineOptionsBuilder, EngineOptionsError, MetricsSnapshot};
pub use errors::{EngineError, EngineResult};
