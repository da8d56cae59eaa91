//! Ordered record of dispatched actions

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Append-only list of actions shared between a test store and its recorder
///
/// Clones share the same entries.
#[derive(Debug)]
pub struct ActionLog<A> {
    entries: Arc<Mutex<Vec<A>>>,
}

impl<A> ActionLog<A> {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn entries(&self) -> MutexGuard<'_, Vec<A>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append an action
    pub fn record(&self, action: A) {
        self.entries().push(action);
    }

    /// Drop all recorded actions
    pub fn clear(&self) {
        self.entries().clear();
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Copy of the recorded actions in dispatch order
    pub fn snapshot(&self) -> Vec<A>
    where
        A: Clone,
    {
        self.entries().clone()
    }
}

impl<A> Clone for ActionLog<A> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<A> Default for ActionLog<A> {
    fn default() -> Self {
        Self::new()
    }
}
