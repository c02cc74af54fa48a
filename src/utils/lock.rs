//! Lock utilities
//!
//! Provides helpers for common lock patterns with automatic release.

use std::sync::{PoisonError, RwLock};
use tracing::warn;

/// Execute a closure with a read lock, automatically releasing it
///
/// A poisoned lock is recovered: the guarded data is still used.
///
/// # Example
/// ```rust
/// use std::sync::RwLock;
/// use autoimport::utils::with_read_lock;
///
/// let lock = RwLock::new(vec![1, 2, 3]);
/// let len = with_read_lock(&lock, |v| v.len());
/// assert_eq!(len, 3);
/// ```
pub fn with_read_lock<T, F, R>(rwlock: &RwLock<T>, f: F) -> R
where
    F: FnOnce(&T) -> R,
{
    let guard = rwlock.read().unwrap_or_else(|poisoned| {
        warn!("Recovering poisoned lock (read)");
        PoisonError::into_inner(poisoned)
    });
    f(&guard)
}

/// Execute a closure with a write lock, automatically releasing it
///
/// # Example
/// ```rust
/// use std::sync::RwLock;
/// use autoimport::utils::with_write_lock;
///
/// let lock = RwLock::new(Vec::new());
/// with_write_lock(&lock, |v| v.push(1));
/// ```
pub fn with_write_lock<T, F, R>(rwlock: &RwLock<T>, f: F) -> R
where
    F: FnOnce(&mut T) -> R,
{
    let mut guard = rwlock.write().unwrap_or_else(|poisoned| {
        warn!("Recovering poisoned lock (write)");
        PoisonError::into_inner(poisoned)
    });
    f(&mut guard)
}
