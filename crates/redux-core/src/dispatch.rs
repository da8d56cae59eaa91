//! Values accepted by `Store::dispatch` and the dispatch function type

use crate::error::StoreError;
use crate::store::StoreApi;
use std::fmt;
use std::sync::Arc;

/// Result of a dispatch call
///
/// The base store returns the dispatched action. A thunk returns whatever its
/// body returns, which is `None` when it decided not to dispatch anything.
pub type DispatchResult<A> = Result<Option<A>, StoreError>;

/// One stage of the dispatch chain
pub type DispatchFn<S, A> = Arc<dyn Fn(Dispatchable<S, A>) -> DispatchResult<A> + Send + Sync>;

/// Deferred action producer
pub type Thunk<S, A> = Box<dyn FnOnce(&StoreApi<S, A>) -> DispatchResult<A> + Send>;

/// Something that can be dispatched: a plain action or a thunk
pub enum Dispatchable<S, A> {
    Action(A),
    Thunk(Thunk<S, A>),
}

impl<S, A> Dispatchable<S, A> {
    /// Build a thunk from a closure
    ///
    /// The closure receives the store API and may read state and dispatch any
    /// number of follow-up actions. Only a store enhanced with
    /// [`ThunkMiddleware`](crate::ThunkMiddleware) runs it.
    pub fn thunk<F>(f: F) -> Self
    where
        F: FnOnce(&StoreApi<S, A>) -> DispatchResult<A> + Send + 'static,
    {
        Self::Thunk(Box::new(f))
    }

    pub fn as_action(&self) -> Option<&A> {
        match self {
            Self::Action(action) => Some(action),
            Self::Thunk(_) => None,
        }
    }
}

impl<S, A> From<A> for Dispatchable<S, A> {
    fn from(action: A) -> Self {
        Self::Action(action)
    }
}

impl<S, A: fmt::Debug> fmt::Debug for Dispatchable<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Action(action) => f.debug_tuple("Action").field(action).finish(),
            Self::Thunk(_) => f.write_str("Thunk(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_value() {
        let dispatchable: Dispatchable<(), &str> = "ping".into();
        assert_eq!(dispatchable.as_action(), Some(&"ping"));
    }

    #[test]
    fn test_thunk_debug_output() {
        let dispatchable: Dispatchable<(), &str> = Dispatchable::thunk(|_api| Ok(None));
        assert!(dispatchable.as_action().is_none());
        assert_eq!(format!("{:?}", dispatchable), "Thunk(..)");
    }
}
