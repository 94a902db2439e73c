use thiserror::Error;

#[derive(Error, Debug)]
pub enum PadError {
    #[error("Allocation failed: {0}")]
    Allocation(String),

    #[error("Output overflowed its {capacity} byte buffer")]
    Overflow { capacity: usize },

    #[error("Terminal width unavailable: {0}")]
    TerminalUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Sandbox error: {0}")]
    Sandbox(String),
}

impl From<std::collections::TryReserveError> for PadError {
    fn from(err: std::collections::TryReserveError) -> Self {
        PadError::Allocation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PadError>;
