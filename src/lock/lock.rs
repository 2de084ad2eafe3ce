use tracing::warn;

use super::LockError;

/// Trait for a single lock instance.
///
/// Prefer [`Lock::acquire`], which releases through a guard on every exit path.
pub trait Lock: Send + Sync {
    /// Acquire the lock, blocking until it becomes available.
    fn lock(&self) -> Result<(), LockError>;

    /// Release the lock.
    fn unlock(&self) -> Result<(), LockError>;

    /// Acquire the lock and return a guard that releases it on drop.
    fn acquire(&self) -> Result<LockGuard<'_, Self>, LockError>
    where
        Self: Sized,
    {
        self.lock()?;
        Ok(LockGuard { lock: self })
    }
}

/// Holds a [`Lock`] until dropped.
pub struct LockGuard<'a, L: Lock + ?Sized> {
    lock: &'a L,
}

impl<'a, L: Lock + ?Sized> LockGuard<'a, L> {
    /// Wrap a lock that the caller has already acquired.
    pub fn held(lock: &'a L) -> Self {
        LockGuard { lock }
    }
}

impl<L: Lock + ?Sized> Drop for LockGuard<'_, L> {
    fn drop(&mut self) {
        if let Err(e) = self.lock.unlock() {
            warn!(error = %e, "failed to release catalog lock");
        }
    }
}
