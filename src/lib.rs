pub mod config;
pub mod loader;
pub mod lock;
mod pokemon;
pub mod service;
pub mod store;
pub mod validation;

// HTTP transport (requires "http" feature)
#[cfg(feature = "http")]
pub mod http;

pub use config::{Config, ConfigError};
pub use loader::{CatalogLoader, LoadError, Seeder};
pub use lock::{InMemoryLock, Lock, LockError};
pub use pokemon::{Catalog, Pokemon, PokemonType, UnknownType};
pub use service::{CatalogError, CatalogService, ListQuery, PokemonDetail};
pub use store::{CatalogStore, InMemoryStore, JsonFileStore, StoreError};
pub use validation::{PokemonInput, Violation, Violations};
