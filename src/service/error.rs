//! Error types for catalog service operations.

use std::error::Error;
use std::fmt;

use crate::loader::LoadError;
use crate::lock::LockError;
use crate::store::StoreError;
use crate::validation::Violations;

pub const MISSING_VALUE: &str = "Missing required value";
pub const INVALID_TYPE: &str = "Pokémon's type is invalid";
pub const ALREADY_EXISTS: &str = "Pokémon is existing";
pub const NOT_EXISTING: &str = "Pokémon is not existing";
pub const NO_SUCH_POKEMON: &str = "No such pokemon";

/// Error type for catalog service operations.
#[derive(Debug)]
pub enum CatalogError {
    /// Required field missing or type outside the fixed set.
    Validation(Violations),
    /// Create collided with an existing name or id.
    Conflict { id: u64, name: String },
    /// Get or delete target absent.
    NotFound(String),
    /// Update target absent.
    NotExisting { id: Option<u64>, name: Option<String> },
    /// Request body could not be decoded.
    DecodeFailed(String),
    /// Store read or write failed.
    Store(StoreError),
    /// Seeding the empty store failed.
    Load(LoadError),
    /// The catalog lock could not be taken.
    Lock(LockError),
    /// The worker running the operation panicked or was cancelled.
    Worker(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Validation(v) => write!(f, "validation failed: {}", v),
            CatalogError::Conflict { id, name } => {
                write!(f, "pokemon already exists: id {} or name {}", id, name)
            }
            CatalogError::NotFound(id) => write!(f, "not found: {}", id),
            CatalogError::NotExisting { id, name } => write!(
                f,
                "no pokemon matches id {:?} or name {:?}",
                id, name
            ),
            CatalogError::DecodeFailed(msg) => write!(f, "decode failed: {}", msg),
            CatalogError::Store(e) => write!(f, "store error: {}", e),
            CatalogError::Load(e) => write!(f, "load error: {}", e),
            CatalogError::Lock(e) => write!(f, "lock error: {}", e),
            CatalogError::Worker(msg) => write!(f, "worker failed: {}", msg),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CatalogError::Store(e) => Some(e),
            CatalogError::Load(e) => Some(e),
            CatalogError::Lock(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for CatalogError {
    fn from(err: StoreError) -> Self {
        CatalogError::Store(err)
    }
}

impl From<LoadError> for CatalogError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Store(e) => CatalogError::Store(e),
            other => CatalogError::Load(other),
        }
    }
}

impl From<LockError> for CatalogError {
    fn from(err: LockError) -> Self {
        CatalogError::Lock(err)
    }
}

impl From<Violations> for CatalogError {
    fn from(violations: Violations) -> Self {
        CatalogError::Validation(violations)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::DecodeFailed(err.to_string())
    }
}

impl CatalogError {
    /// Map this error to an HTTP status code.
    ///
    /// Rejected writes answer 401, matching the established API.
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::Validation(_) => 401,
            CatalogError::Conflict { .. } => 401,
            CatalogError::NotFound(_) => 404,
            CatalogError::NotExisting { .. } => 401,
            CatalogError::DecodeFailed(_) => 400,
            CatalogError::Store(_)
            | CatalogError::Load(_)
            | CatalogError::Lock(_)
            | CatalogError::Worker(_) => 500,
        }
    }

    /// The `message` returned to clients.
    pub fn message(&self) -> String {
        match self {
            CatalogError::Validation(v) if v.has_missing() => MISSING_VALUE.to_string(),
            CatalogError::Validation(_) => INVALID_TYPE.to_string(),
            CatalogError::Conflict { .. } => ALREADY_EXISTS.to_string(),
            CatalogError::NotFound(_) => NO_SUCH_POKEMON.to_string(),
            CatalogError::NotExisting { .. } => NOT_EXISTING.to_string(),
            CatalogError::DecodeFailed(_) => self.to_string(),
            CatalogError::Store(_)
            | CatalogError::Load(_)
            | CatalogError::Lock(_)
            | CatalogError::Worker(_) => "Internal server error".to_string(),
        }
    }

    /// True for failures caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}
