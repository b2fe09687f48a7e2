//! Busy flag shared by the poll loop and the admin resync.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Non-blocking mutual exclusion for cache-mutating sync operations.
///
/// A caller that fails to acquire the lock is expected to skip its work rather
/// than wait. Cloning shares the flag.
#[derive(Debug, Clone, Default)]
pub struct SyncLock {
    busy: Arc<AtomicBool>,
}

impl SyncLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the lock if it is free.
    ///
    /// # Returns
    /// - `Some(SyncGuard)` - The lock is held until the guard is dropped
    /// - `None` - Another sync holds the lock
    pub fn try_acquire(&self) -> Option<SyncGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SyncGuard {
                busy: Arc::clone(&self.busy),
            })
    }
}

/// Releases the [`SyncLock`] when dropped, on success, error and panic alike.
#[derive(Debug)]
pub struct SyncGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for SyncGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
