use thiserror::Error;

/// Reasons a rule line is dropped during compilation. The gitignore contract
/// is that every one of these is a silent skip, never a failed add; the typed
/// enum exists for tracing and tests.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("line is empty after trimming")]
    EmptyLine,
    #[error("line '{line}' is a comment")]
    CommentLine { line: String },
    #[error("line '{line}' ends with an unterminated escape")]
    UnterminatedEscape { line: String },
    #[error("line '{line}' has no pattern body after flag extraction")]
    EmptyBody { line: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
