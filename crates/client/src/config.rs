// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration: which validator to run and how long to wait.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default validator location, relative to the working directory
pub const DEFAULT_EXECUTABLE: &str = "./validator";
/// Default time budget for one validator run
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

fn default_executable() -> PathBuf {
    PathBuf::from(DEFAULT_EXECUTABLE)
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Immutable configuration shared by every call of a client.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Path to the validator executable
    #[serde(default = "default_executable")]
    executable: PathBuf,

    /// Maximum wait for the validator, in milliseconds
    #[serde(default = "default_timeout_ms")]
    timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            executable: default_executable(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    pub fn new(executable: impl Into<PathBuf>, timeout_ms: u64) -> Self {
        Self {
            executable: executable.into(),
            timeout_ms,
        }
    }

    /// Load from a TOML file, or JSON when the extension is `.json`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Copy with the given overrides applied.
    pub fn with_overrides(
        &self,
        executable: Option<PathBuf>,
        timeout_ms: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            executable: executable.unwrap_or_else(|| self.executable.clone()),
            timeout_ms: timeout_ms.unwrap_or(self.timeout_ms),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.executable.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "executable path must not be empty".to_string(),
            ));
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
