//! Test store configuration
//!
//! Nothing is read implicitly: a `TestStore` starts from the defaults, and a
//! test that wants a file passes the result of [`TestStoreConfig::load_from`]
//! to `TestStore::with_config`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Logging options for test stores
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TestStoreConfig {
    /// Emit a debug log line for every recorded action
    #[serde(default = "default_trace_actions")]
    pub trace_actions: bool,

    /// Prefix for log lines, handy when several test stores run side by side
    #[serde(default = "default_label")]
    pub label: String,
}

fn default_trace_actions() -> bool {
    true
}

fn default_label() -> String {
    "TestStore".to_string()
}

impl Default for TestStoreConfig {
    fn default() -> Self {
        Self {
            trace_actions: default_trace_actions(),
            label: default_label(),
        }
    }
}

impl TestStoreConfig {
    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parse config from TOML; missing fields use defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid test store config")
    }
}
