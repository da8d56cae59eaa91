//! Logging setup for tests
//!
//! Installs `env_logger` in test mode so log output is captured per test.
//! The level comes from `RUST_LOG` and defaults to `warn`.

/// Initialize logging; safe to call from every test
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .is_test(true)
        .try_init();
}
