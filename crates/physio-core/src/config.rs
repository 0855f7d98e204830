//! Key/value configuration sources.
//!
//! Workloads never read module-level constants for addresses or credentials.
//! They build typed config structs from a `ConfigSource`, which in production
//! is backed by Spin application variables and in tests by a plain map.

use std::collections::HashMap;

/// Errors produced while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required config variable: {0}")]
    Missing(String),

    #[error("invalid value for config variable {key}: {reason}")]
    Invalid { key: String, reason: String },
}

/// A source of string configuration values.
pub trait ConfigSource {
    /// Look up the raw value, blank or not.
    fn get(&self, key: &str) -> Option<String>;

    /// Look up a required value. Blank counts as missing.
    fn require(&self, key: &str) -> Result<String, ConfigError> {
        self.get(key)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::Missing(key.to_string()))
    }

    /// Look up a value, falling back to a default when absent or blank.
    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| default.to_string())
    }
}

/// In-memory configuration source.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: HashMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl ConfigSource for MapSource {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

impl<T: ConfigSource + ?Sized> ConfigSource for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Configuration backed by Spin application variables.
///
/// Variables must be declared in `spin.toml` and mapped into the component's
/// `[component.<name>.variables]` table to be visible here.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinVariables;

#[cfg(target_arch = "wasm32")]
impl ConfigSource for SpinVariables {
    fn get(&self, key: &str) -> Option<String> {
        spin_sdk::variables::get(key).ok()
    }
}
