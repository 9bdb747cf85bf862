use crate::engine::EngineOptionsError;
use crate::path::PathError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Options(#[from] EngineOptionsError),
}

pub type EngineResult<T> = Result<T, EngineError>;
