//! ThunkMiddleware - runs deferred action producers

use super::{ApplyMiddleware, Middleware};
use crate::dispatch::{DispatchFn, DispatchResult, Dispatchable};
use crate::store::StoreApi;

/// Runs `Dispatchable::Thunk` values instead of passing them on
///
/// The thunk gets the store API, so it can look at the state and dispatch
/// zero or more actions, right away or later from a spawned task. Plain
/// actions are forwarded untouched.
pub struct ThunkMiddleware;

impl ThunkMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ThunkMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Middleware<S, A> for ThunkMiddleware
where
    S: Clone + Send + 'static,
    A: Send + 'static,
{
    fn handle(
        &self,
        action: Dispatchable<S, A>,
        api: &StoreApi<S, A>,
        next: &DispatchFn<S, A>,
    ) -> DispatchResult<A> {
        match action {
            Dispatchable::Thunk(thunk) => {
                log::trace!("ThunkMiddleware: running thunk");
                thunk(api)
            }
            action => next(action),
        }
    }
}

/// Enhancer with only [`ThunkMiddleware`] installed
pub fn thunk<S, A>() -> ApplyMiddleware<S, A>
where
    S: Clone + Send + 'static,
    A: Send + 'static,
{
    ApplyMiddleware::new().with(ThunkMiddleware)
}
