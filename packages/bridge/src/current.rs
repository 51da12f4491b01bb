//! Per-thread current-environment tracking.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};

use gangway_core::Environment;

/// Which environment each thread is currently inside.
///
/// One entry per thread, present exactly while that thread has a current
/// environment: `set(Some(_))` inserts or overwrites the calling thread's
/// entry, `set(None)` erases it. The entry owns a strong handle for as
/// long as it exists, so a thread's current environment cannot die
/// underneath it.
///
/// Threads only ever read and write their own entry; the map itself is
/// guarded by one mutex whose scope is the map operation only. The lock
/// is never held across environment hooks, registry lookups, or user
/// callables. Entries are never cleaned up behind a thread's back:
/// `ThreadId`s are not reused, so a stale entry for a finished thread is
/// unreachable rather than wrong.
pub struct CurrentMap {
    inner: Mutex<HashMap<ThreadId, Arc<Environment>>>,
}

impl CurrentMap {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }

    /// The calling thread's current environment, if any.
    pub fn get(&self) -> Option<Arc<Environment>> {
        self.lock().get(&thread::current().id()).cloned()
    }

    /// Set or clear the calling thread's current environment.
    pub fn set(&self, env: Option<Arc<Environment>>) {
        let _ = self.swap(env);
    }

    /// Set or clear the calling thread's current environment, returning
    /// the previous value.
    pub fn swap(&self, env: Option<Arc<Environment>>) -> Option<Arc<Environment>> {
        let thread_id = thread::current().id();
        let mut map = self.lock();
        match env {
            Some(env) => map.insert(thread_id, env),
            None => map.remove(&thread_id),
        }
    }

    /// Number of threads that currently have an entry.
    pub fn tracked_threads(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<ThreadId, Arc<Environment>>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CurrentMap {
    fn default() -> Self {
        Self::new()
    }
}
