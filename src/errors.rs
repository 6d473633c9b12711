use thiserror::Error;

/// Error type for scorediff operations.
#[derive(Debug, Error)]
pub enum ScoreDiffError {
    #[error("usage error: {0}")]
    UsageError(String),
    #[error("io error: {0}")]
    IoError(String),
    #[error("malformed log: {0}")]
    MalformedLog(String),
}

impl ScoreDiffError {
    pub fn usage<T: Into<String>>(msg: T) -> Self {
        ScoreDiffError::UsageError(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        ScoreDiffError::IoError(msg.into())
    }

    pub fn malformed<T: Into<String>>(msg: T) -> Self {
        ScoreDiffError::MalformedLog(msg.into())
    }
}
