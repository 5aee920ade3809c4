//! Loading/error/data state for one fetch-on-key-change query.
//!
//! DESIGN
//! ======
//! Each invocation takes a [`QueryTicket`] from its view's [`QueryScope`]. A
//! result may only be committed while the ticket is current: the scope is
//! still open (view mounted) and no newer invocation has been issued. Late
//! results are dropped rather than written into a disposed view.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Observable state of a query.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryState<T> {
    pub loading: bool,
    pub error: Option<String>,
    pub data: Option<T>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            loading: true,
            error: None,
            data: None,
        }
    }
}

impl<T> QueryState<T> {
    /// Enter the loading state for a new invocation. Previous data is kept
    /// until the new result lands.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Commit an invocation's result.
    pub fn resolve(&mut self, result: Result<T, String>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(message) => {
                self.data = None;
                self.error = Some(message);
            }
        }
    }
}

/// Whether a query must run again for `next`. The first run always does.
pub fn key_changed<K: PartialEq>(previous: Option<&K>, next: &K) -> bool {
    previous != Some(next)
}

/// Lifetime and generation counter for one view's query.
#[derive(Clone, Debug)]
pub struct QueryScope {
    open: Arc<AtomicBool>,
    generation: Arc<AtomicU64>,
}

impl Default for QueryScope {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryScope {
    pub fn new() -> Self {
        Self {
            open: Arc::new(AtomicBool::new(true)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Start a new invocation, superseding every earlier ticket.
    pub fn issue(&self) -> QueryTicket {
        let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        QueryTicket {
            scope: self.clone(),
            generation,
        }
    }

    /// Mark the owning view as gone. Outstanding tickets become stale.
    pub fn close(&self) {
        self.open.store(false, Ordering::Relaxed);
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Relaxed)
    }
}

/// Permission to commit one invocation's result.
#[derive(Clone, Debug)]
pub struct QueryTicket {
    scope: QueryScope,
    generation: u64,
}

impl QueryTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True while the view is mounted and this is the newest invocation.
    pub fn is_current(&self) -> bool {
        self.scope.is_open() && self.scope.generation.load(Ordering::Relaxed) == self.generation
    }

    /// Apply `result` to `state` if the ticket is still current.
    ///
    /// Returns whether the result was committed.
    pub fn commit<T>(&self, state: &mut QueryState<T>, result: Result<T, String>) -> bool {
        if !self.is_current() {
            return false;
        }
        state.resolve(result);
        true
    }
}
