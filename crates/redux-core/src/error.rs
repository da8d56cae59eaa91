//! Errors raised by the store engine

use thiserror::Error;

/// Errors that can occur while building a store or dispatching into it.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A middleware tried to dispatch before the chain was assembled.
    #[error("Dispatching while constructing middleware is not allowed")]
    DispatchWhileConstructing,

    /// The store behind a `StoreApi` handle no longer exists.
    #[error("Store has been dropped")]
    StoreDropped,

    /// A thunk reached the reducer because no thunk middleware handled it.
    #[error("Thunks need ThunkMiddleware; only plain actions can reach the reducer")]
    UnhandledThunk,

    /// Failure raised by a thunk, middleware or enhancer.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
