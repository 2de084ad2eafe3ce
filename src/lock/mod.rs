//! Single-writer lock guarding the catalog's read-modify-write cycle.
//!
//! Every service operation, including the lazy first load, runs while
//! holding one `Lock`. The default `InMemoryLock` serializes callers inside
//! this process; it does not protect against other processes writing the
//! same store file.

mod error;
mod in_memory;
mod lock;

pub use error::LockError;
pub use in_memory::InMemoryLock;
pub use lock::{Lock, LockGuard};
