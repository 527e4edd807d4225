//! Shared map handle for multi-threaded pipelines.
//!
//! The `SharedMap` struct wraps the map in a read/write lock: any number of
//! threads may run queries (valid landmarks, depth statistics, feature
//! access) at once, while mutations (links, poses, rescaling) are exclusive.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::map::Map;

/// Map shared between threads.
pub struct SharedMap {
    /// Protected by RwLock: queries read, reconstruction steps write.
    map: RwLock<Map>,
}

impl SharedMap {
    /// Wrap a map for sharing.
    pub fn new(map: Map) -> Arc<Self> {
        Arc::new(Self {
            map: RwLock::new(map),
        })
    }

    /// Shared access for queries.
    pub fn read(&self) -> RwLockReadGuard<'_, Map> {
        self.map.read()
    }

    /// Exclusive access for mutations.
    pub fn write(&self) -> RwLockWriteGuard<'_, Map> {
        self.map.write()
    }

    /// Rescale the whole reconstruction under a single write lock.
    pub fn rescale(&self, factor: f64) {
        self.map.write().rescale(factor);
    }

    /// Unwrap the map once no other handle is alive.
    pub fn into_inner(self: Arc<Self>) -> Option<Map> {
        Arc::into_inner(self).map(|shared| shared.map.into_inner())
    }
}

impl Default for SharedMap {
    fn default() -> Self {
        Self {
            map: RwLock::new(Map::new()),
        }
    }
}
