use std::sync::{Condvar, Mutex, MutexGuard};

use super::{Lock, LockError};

/// In-memory lock backed by `Mutex<bool>` + `Condvar`.
///
/// Unlike a plain `Mutex<()>`, the held state is not tied to a borrow, so
/// the lock can sit behind `dyn Lock` and be released by a [`LockGuard`](super::LockGuard).
pub struct InMemoryLock {
    held: Mutex<bool>,
    released: Condvar,
}

impl InMemoryLock {
    pub fn new() -> Self {
        InMemoryLock {
            held: Mutex::new(false),
            released: Condvar::new(),
        }
    }

    fn state(&self) -> Result<MutexGuard<'_, bool>, LockError> {
        self.held.lock().map_err(|e| LockError::Poisoned(e.to_string()))
    }
}

impl Default for InMemoryLock {
    fn default() -> Self {
        Self::new()
    }
}

impl Lock for InMemoryLock {
    fn lock(&self) -> Result<(), LockError> {
        let state = self.state()?;
        let mut held = self
            .released
            .wait_while(state, |held| *held)
            .map_err(|e| LockError::Poisoned(e.to_string()))?;
        *held = true;
        Ok(())
    }

    fn unlock(&self) -> Result<(), LockError> {
        let mut held = self.state()?;
        if std::mem::replace(&mut *held, false) {
            self.released.notify_one();
        }
        Ok(())
    }
}
