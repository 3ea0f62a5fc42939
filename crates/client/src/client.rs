// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validation client.
//!
//! The blocking entry points drive the async ones on a private
//! current-thread runtime, one per call. Callers already inside a tokio
//! runtime must use the `_async` variants.

use std::future::Future;

use serde::Serialize;
use tracing::debug;
use validation_result::ValidationResult;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::invocation::{self, Execution};

/// Client for an external validator executable.
///
/// Holds only immutable configuration, so one client can be cloned or
/// shared freely; each call spawns and owns its own process.
#[derive(Clone, Debug, Default)]
pub struct ValidationClient {
    config: ClientConfig,
}

impl ValidationClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Encode a record into the validator's JSON payload.
    pub fn encode_record<T: Serialize + ?Sized>(record: &T) -> Result<String, ClientError> {
        serde_json::to_string(record).map_err(ClientError::Encode)
    }

    /// Validate a record, blocking until the validator answers or times out.
    pub fn validate<T: Serialize + ?Sized>(&self, record: &T) -> ValidationResult {
        match Self::encode_record(record) {
            Ok(payload) => self.validate_json(&payload),
            Err(e) => e.into(),
        }
    }

    /// Validate a pre-serialized JSON payload, blocking.
    pub fn validate_json(&self, payload: &str) -> ValidationResult {
        block_on(self.validate_json_async(payload))
    }

    pub async fn validate_async<T: Serialize + ?Sized>(&self, record: &T) -> ValidationResult {
        match Self::encode_record(record) {
            Ok(payload) => self.validate_json_async(&payload).await,
            Err(e) => e.into(),
        }
    }

    pub async fn validate_json_async(&self, payload: &str) -> ValidationResult {
        self.try_validate_json(payload)
            .await
            .unwrap_or_else(ValidationResult::from)
    }

    /// Validate a JSON payload, keeping the failure class typed.
    ///
    /// `Ok` carries the validator's own answer (which may still be
    /// `valid = false`); `Err` means no authoritative answer was obtained.
    pub async fn try_validate_json(&self, payload: &str) -> Result<ValidationResult, ClientError> {
        let Execution { status, output } =
            invocation::execute(self.config.executable(), payload, self.config.timeout()).await?;

        if !status.success() {
            return Err(ClientError::NonZeroExit {
                code: status.code(),
                output,
            });
        }

        let result = ValidationResult::from_json(&output).map_err(ClientError::InvalidResponse)?;
        debug!(valid = result.valid, errors = result.errors.len(), "validator answered");
        Ok(result)
    }
}

fn block_on<F>(future: F) -> ValidationResult
where
    F: Future<Output = ValidationResult>,
{
    if tokio::runtime::Handle::try_current().is_ok() {
        return ClientError::NestedRuntime.into();
    }
    match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime.block_on(future),
        Err(e) => ClientError::Runtime(e).into(),
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
