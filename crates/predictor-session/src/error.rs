use thiserror::Error;

/// Errors surfaced by session operations.
///
/// None of these are retried or recovered locally; a failed `predict` leaves
/// previously presented text unchanged and releases every tensor it acquired.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("model artifact loading failed: {0}")]
    Load(#[from] LoadError),
    #[error("session is not initialized")]
    NotInitialized,
    #[error("input of length {actual} does not match the model input size {expected}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("model declares no outputs")]
    NoOutputs,
    #[error("model declares no output named '{0}'")]
    MissingOutput(String),
    #[error("presentation sink write failed: {0}")]
    Presentation(#[source] anyhow::Error),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

/// Errors produced while decoding a model artifact.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("weight record could not be decoded: {0}")]
    Record(#[from] burn::record::RecorderError),
}
