//! Redux-style store engine
//!
//! This crate provides a small, generic store: a single state value that only
//! changes when a reducer processes a dispatched action, with middleware and
//! enhancers as the extension points.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ create_store(reducer, initial_state, enhancer)│
//! └──────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────┐         ┌─────────────────────┐
//! │ Store::new      │         │ Enhancer            │
//! │ (reducer only)  │◄────────│ ApplyMiddleware,    │
//! └─────────────────┘         │ Compose, thunk()    │
//!                             └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use redux_core::{create_store, reducer, thunk, ApplyMiddleware, Dispatchable, StoreApi};
//!
//! # fn example() -> Result<(), redux_core::StoreError> {
//! let enhancer: ApplyMiddleware<i64, i64> = thunk();
//! let store = create_store(
//!     reducer(|total: i64, value: &i64| total + value),
//!     0,
//!     Some(&enhancer),
//! )?;
//!
//! store.dispatch(40)?;
//! store.dispatch(Dispatchable::thunk(|api: &StoreApi<i64, i64>| api.dispatch(2)))?;
//! assert_eq!(store.state(), 42);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod dispatch;
mod enhancer;
mod error;
mod middleware;
mod reducer;
mod store;

pub use dispatch::{DispatchFn, DispatchResult, Dispatchable, Thunk};
pub use enhancer::{compose, Compose, Enhancer, SharedEnhancer};
pub use error::StoreError;
pub use middleware::{thunk, ApplyMiddleware, Middleware, SharedMiddleware, ThunkMiddleware};
pub use reducer::{identity, reducer, Reducer};
pub use store::{create_store, Listener, Store, StoreApi, StoreCreator, SubscriptionId};
