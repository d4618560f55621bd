//! # Striped Order Locks
//!
//! Serializes operations per order key. Keys hash onto a fixed set of
//! mutexes.

use crate::domain::OrderKey;
use parking_lot::{Mutex, MutexGuard};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Default number of stripes.
pub const DEFAULT_STRIPES: usize = 64;

/// Fixed pool of per-key mutexes.
pub struct StripedLocks {
    stripes: Vec<Mutex<()>>,
}

impl StripedLocks {
    /// Create `count` stripes (at least one).
    pub fn new(count: usize) -> Self {
        let count = count.max(1);
        Self {
            stripes: (0..count).map(|_| Mutex::new(())).collect(),
        }
    }

    /// Number of stripes.
    pub fn len(&self) -> usize {
        self.stripes.len()
    }

    /// Whether the pool is empty (never true).
    pub fn is_empty(&self) -> bool {
        self.stripes.is_empty()
    }

    /// Stripe index of `key`.
    pub fn index_of(&self, key: &OrderKey) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() % self.stripes.len() as u64) as usize
    }

    /// Block until the stripe guarding `key` is held.
    pub fn lock(&self, key: &OrderKey) -> MutexGuard<'_, ()> {
        self.stripes[self.index_of(key)].lock()
    }
}

impl Default for StripedLocks {
    fn default() -> Self {
        Self::new(DEFAULT_STRIPES)
    }
}
