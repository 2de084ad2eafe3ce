use std::fmt;
use std::path::PathBuf;

use crate::store::StoreError;

/// Error type for seeding the catalog from its CSV and image sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// A source file or directory could not be read.
    Io { path: PathBuf, message: String },
    /// The CSV source is malformed.
    Csv { path: PathBuf, message: String },
    /// A CSV row names a type outside the fixed set.
    UnknownType { row: usize, value: String },
    /// Persisting the seeded catalog failed.
    Store(StoreError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, message } => {
                write!(f, "cannot read {}: {}", path.display(), message)
            }
            LoadError::Csv { path, message } => {
                write!(f, "malformed csv {}: {}", path.display(), message)
            }
            LoadError::UnknownType { row, value } => {
                write!(f, "row {} has unknown type {:?}", row, value)
            }
            LoadError::Store(e) => write!(f, "store error: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for LoadError {
    fn from(err: StoreError) -> Self {
        LoadError::Store(err)
    }
}
