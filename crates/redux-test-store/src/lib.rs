//! Test store for redux-core applications
//!
//! Wraps store creation so tests can inject an initial state and an optional
//! enhancer, and records every action that flows through the store for later
//! assertions, without touching the application's reducer.
//!
//! This crate provides:
//! - [`TestStore`]: the factory (`clear_actions`, `get_actions`, `initialize_store`)
//! - [`ActionLog`]: the ordered record of dispatched actions
//! - [`RecordingMiddleware`]: the middleware that fills the log
//! - [`TestStoreConfig`]: logging options, loadable from TOML
//! - [`logging::init`]: `env_logger` setup for tests

pub mod action_log;
pub mod config;
pub mod logging;
pub mod recorder;
pub mod test_store;

#[cfg(test)]
mod fixtures;

pub use action_log::ActionLog;
pub use config::TestStoreConfig;
pub use recorder::RecordingMiddleware;
pub use test_store::TestStore;
