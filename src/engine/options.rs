use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_COMPONENTS: usize = 64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineOptions {
    /// ASCII-only case folding in literal and class matching.
    pub ignore_case: bool,
    /// Increment per-query counters; never affects the result.
    pub track_stats: bool,
    /// Paths deeper than this are reported as not ignored.
    pub max_components: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            ignore_case: true,
            track_stats: false,
            max_components: DEFAULT_MAX_COMPONENTS,
        }
    }
}

impl EngineOptions {
    pub fn builder() -> EngineOptionsBuilder {
        EngineOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), EngineOptionsError> {
        if self.max_components == 0 {
            return Err(EngineOptionsError::MaxComponentsInvalid { provided: 0 });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct EngineOptionsBuilder {
    options: EngineOptions,
}

impl EngineOptionsBuilder {
    pub fn ignore_case(mut self, value: bool) -> Self {
        self.options.ignore_case = value;
        self
    }

    pub fn track_stats(mut self, value: bool) -> Self {
        self.options.track_stats = value;
        self
    }

    pub fn max_components(mut self, value: usize) -> Self {
        self.options.max_components = value;
        self
    }

    pub fn build(self) -> Result<EngineOptions, EngineOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineOptionsError {
    #[error("max_components must be at least 1 (got {provided})")]
    MaxComponentsInvalid { provided: usize },
}
