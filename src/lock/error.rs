use std::fmt;

/// Error type for lock operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockError {
    /// A thread panicked while holding the state mutex.
    Poisoned(String),
}

impl fmt::Display for LockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockError::Poisoned(msg) => write!(f, "lock poisoned: {}", msg),
        }
    }
}

impl std::error::Error for LockError {}
