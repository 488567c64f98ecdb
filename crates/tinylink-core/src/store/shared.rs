//! Mutex-guarded store handle for multi-threaded callers.

use std::sync::{Arc, Mutex, MutexGuard};

use super::Store;

/// Cloneable handle that serializes all access to a [`Store`].
///
/// The original design is one request at a time; anything that dispatches
/// handlers from multiple threads must treat the store as a critical section,
/// which this wrapper enforces.
#[derive(Debug, Clone)]
pub struct SharedStore {
    inner: Arc<Mutex<Store>>,
}

impl SharedStore {
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Lock the store for one operation (or a short read-modify-write).
    ///
    /// A poisoned lock still yields the state as last written: every store
    /// operation applies fully or not at all, so a panicking holder cannot
    /// leave the maps half-updated.
    pub fn lock(&self) -> MutexGuard<'_, Store> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
