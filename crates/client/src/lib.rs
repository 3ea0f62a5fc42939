// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Out-of-process user validation client.
//!
//! Validation is delegated to an external executable invoked once per
//! request as `<validator> -mode single -input <json>`. Its merged
//! stdout/stderr is captured and decoded into a [`ValidationResult`].
//! Every failure (timeout, non-zero exit, unreadable output, spawn error)
//! comes back as a `valid = false` result instead of an error.
//!
//! ```no_run
//! use validation_client::{ClientConfig, ValidationClient, ValidationRecord};
//!
//! let client = ValidationClient::new(ClientConfig::new("./validator", 5000));
//! let record = ValidationRecord::new()
//!     .with("name", "Ana")
//!     .with("email", "ana@usp.br")
//!     .with("idade", 16);
//!
//! let result = client.validate(&record);
//! if !result.is_valid() {
//!     for error in result.errors() {
//!         eprintln!("{error}");
//!     }
//! }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod invocation;
pub mod report;

pub use client::ValidationClient;
pub use config::{ClientConfig, ConfigError};
pub use error::{ClientError, FailureKind};
pub use validation_result::{FieldValue, ValidationRecord, ValidationResult};
