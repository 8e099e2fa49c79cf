//! Lock-acquisition helpers shared by the in-memory stores.
//!
//! A poisoned lock (a writer panicked mid-update) is reported as
//! `DatabaseError::Internal`, the same contract any other backend uses.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use ecotrack_core::errors::{DatabaseError, Result};

pub(crate) fn read_guard<'a, T>(
    lock: &'a RwLock<T>,
    store: &str,
) -> Result<RwLockReadGuard<'a, T>> {
    lock.read().map_err(|e| {
        DatabaseError::Internal(format!("{} store lock poisoned: {}", store, e)).into()
    })
}

pub(crate) fn write_guard<'a, T>(
    lock: &'a RwLock<T>,
    store: &str,
) -> Result<RwLockWriteGuard<'a, T>> {
    lock.write().map_err(|e| {
        DatabaseError::Internal(format!("{} store lock poisoned: {}", store, e)).into()
    })
}
