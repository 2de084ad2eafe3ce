use std::fmt;
use std::path::PathBuf;

/// Error type for catalog store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    Io { path: PathBuf, message: String },
    /// The stored document could not be encoded or decoded.
    Serde(String),
    /// An in-memory store's lock was poisoned.
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io { path, message } => {
                write!(f, "store I/O error at {}: {}", path.display(), message)
            }
            StoreError::Serde(msg) => write!(f, "store serialization error: {}", msg),
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serde(err.to_string())
    }
}
