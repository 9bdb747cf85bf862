use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("path is empty")]
    Empty,
    #[error("path '{input}' is absolute; only relative paths are matched")]
    Absolute { input: String },
    #[error("path '{input}' carries a drive prefix")]
    DrivePrefix { input: String },
    #[error("path '{input}' starts with a '.' or '..' component")]
    RelativeTraversal { input: String },
    #[error("path '{input}' has {depth} components, more than the configured cap of {cap}")]
    TooDeep {
        input: String,
        depth: usize,
        cap: usize,
    },
}

pub type PathResult<T> = Result<T, PathError>;
