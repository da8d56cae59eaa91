//! Reducer type and helpers
//!
//! A reducer is a pure function `(state, action) -> state`. The store hands it
//! a clone of the current state and replaces the state with whatever it returns.

use std::sync::Arc;

/// Shared reducer function
pub type Reducer<S, A> = Arc<dyn Fn(S, &A) -> S + Send + Sync>;

/// Wrap a function or closure as a [`Reducer`]
pub fn reducer<S, A, F>(f: F) -> Reducer<S, A>
where
    S: 'static,
    A: 'static,
    F: Fn(S, &A) -> S + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Reducer that returns the state unchanged for every action
pub fn identity<S, A>() -> Reducer<S, A>
where
    S: 'static,
    A: 'static,
{
    Arc::new(|state, _action| state)
}
