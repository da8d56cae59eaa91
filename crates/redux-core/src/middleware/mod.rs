//! Middleware chain for [`Store`]
//!
//! A middleware is one stage between `Store::dispatch` and the reducer. It
//! gets the dispatched value and the `next` stage, and decides what happens:
//! pass the value on, drop it, run it (as `ThunkMiddleware` does with thunks),
//! or dispatch further actions through the [`StoreApi`].
//!
//! ```text
//! Store::dispatch ─> first ─> second ─> ... ─> reducer
//!                      └───── StoreApi::dispatch re-enters here
//! ```
//!
//! [`ApplyMiddleware`] is the enhancer that installs a chain. Stages run in
//! the order they were added with [`ApplyMiddleware::with`].
//!
//! ## Example
//!
//! ```rust
//! use redux_core::{DispatchFn, DispatchResult, Dispatchable, Middleware, StoreApi};
//!
//! struct TraceDispatch;
//!
//! impl<S, A: std::fmt::Debug> Middleware<S, A> for TraceDispatch {
//!     fn handle(
//!         &self,
//!         action: Dispatchable<S, A>,
//!         _api: &StoreApi<S, A>,
//!         next: &DispatchFn<S, A>,
//!     ) -> DispatchResult<A> {
//!         log::debug!("dispatching {:?}", action);
//!         next(action)
//!     }
//! }
//! ```

use crate::dispatch::{DispatchFn, DispatchResult, Dispatchable};
use crate::enhancer::Enhancer;
use crate::error::StoreError;
use crate::reducer::Reducer;
use crate::store::{Store, StoreApi, StoreCreator};
use std::sync::Arc;

mod thunk;

pub use thunk::{thunk, ThunkMiddleware};

/// Middleware trait - handles dispatched values before they reach the reducer
pub trait Middleware<S, A>: Send + Sync {
    /// Handle a dispatched value
    ///
    /// # Parameters
    /// - `action`: The value being dispatched
    /// - `api`: Read state or dispatch through the whole chain again
    /// - `next`: The next stage; call it to let the value continue
    ///
    /// # Returns
    /// Whatever `next` returned, or the middleware's own result if it handled
    /// the value itself.
    fn handle(
        &self,
        action: Dispatchable<S, A>,
        api: &StoreApi<S, A>,
        next: &DispatchFn<S, A>,
    ) -> DispatchResult<A>;
}

/// Shared middleware
pub type SharedMiddleware<S, A> = Arc<dyn Middleware<S, A>>;

/// Enhancer that installs a middleware chain in front of the store's dispatch
///
/// Middleware run in the order they were added.
pub struct ApplyMiddleware<S, A> {
    middleware: Vec<SharedMiddleware<S, A>>,
}

impl<S, A> ApplyMiddleware<S, A> {
    pub fn new() -> Self {
        Self {
            middleware: Vec::new(),
        }
    }

    /// Append a middleware to the chain
    pub fn with<M: Middleware<S, A> + 'static>(mut self, middleware: M) -> Self {
        self.middleware.push(Arc::new(middleware));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.middleware.is_empty()
    }
}

impl<S, A> Default for ApplyMiddleware<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Enhancer<S, A> for ApplyMiddleware<S, A>
where
    S: Clone + Send + 'static,
    A: Send + 'static,
{
    fn enhance(&self, create: StoreCreator<S, A>) -> StoreCreator<S, A> {
        if self.is_empty() {
            log::debug!("ApplyMiddleware: empty chain, store left as is");
            return create;
        }
        let middleware = self.middleware.clone();

        Box::new(
            move |reducer: Reducer<S, A>, initial_state: S| -> Result<Store<S, A>, StoreError> {
                let store = create(reducer, initial_state)?;
                let innermost = store.dispatch_fn()?;

                let enhanced = Store::enhance_from(store);
                let api = enhanced.api();

                log::debug!(
                    "ApplyMiddleware: assembling chain of {} middleware",
                    middleware.len()
                );

                let dispatch = middleware.iter().rev().fold(innermost, |next, middleware| {
                    let middleware = Arc::clone(middleware);
                    let api = api.clone();
                    let stage: DispatchFn<S, A> =
                        Arc::new(move |action: Dispatchable<S, A>| {
                            middleware.handle(action, &api, &next)
                        });
                    stage
                });

                enhanced.install_dispatch(dispatch);
                Ok(enhanced)
            },
        )
    }
}
