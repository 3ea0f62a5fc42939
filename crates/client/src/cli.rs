// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command line for the validation demo.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ClientConfig, ConfigError};

/// Runs user records through an external validator and prints the outcome
#[derive(Parser, Debug, Clone)]
#[command(name = "validation-demo", version, about)]
pub struct Cli {
    /// Config file (TOML, or JSON with a .json extension)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Validator executable, overriding the config file
    #[arg(long, value_name = "PATH")]
    pub validator: Option<PathBuf>,

    /// Time budget per validation in milliseconds
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Validate this JSON payload instead of running the sample cases
    #[arg(long, value_name = "JSON")]
    pub input: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Defaults, then the config file, then command-line overrides.
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => ClientConfig::load(path)?,
            None => ClientConfig::default(),
        };
        base.with_overrides(self.validator.clone(), self.timeout_ms)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
