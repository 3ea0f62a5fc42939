// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Failure taxonomy for validator invocations.

use std::path::PathBuf;
use thiserror::Error;
use validation_result::ValidationResult;

/// Message reported when the validator outlives its time budget
pub const TIMEOUT_MESSAGE: &str = "Validation timed out";
/// Prefix for validator runs that exit non-zero
pub const EXECUTION_FAILURE_PREFIX: &str = "Validator execution failed";
/// Prefix for failures inside the client itself
pub const INTERNAL_ERROR_PREFIX: &str = "Internal error";

/// Coarse classification of a failed invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// The process did not terminate within the bound and was killed
    Timeout,
    /// The process terminated with a non-zero status
    ExecutionFailure,
    /// Encoding, spawning, stream or decoding failure on the client side
    InternalError,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to encode record as JSON: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to spawn validator {}: {source}", path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("validator {0} not captured")]
    StreamUnavailable(&'static str),

    #[error("validator I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("validator timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("validator exited with non-zero status (code: {code:?}): {output}")]
    NonZeroExit { code: Option<i32>, output: String },

    #[error("invalid validator response: {0}")]
    InvalidResponse(#[source] serde_json::Error),

    #[error("failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("blocking validation called from within an async runtime; use the async variant")]
    NestedRuntime,
}

impl ClientError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ClientError::Timeout { .. } => FailureKind::Timeout,
            ClientError::NonZeroExit { .. } => FailureKind::ExecutionFailure,
            ClientError::Encode(_)
            | ClientError::Spawn { .. }
            | ClientError::StreamUnavailable(_)
            | ClientError::Io(_)
            | ClientError::InvalidResponse(_)
            | ClientError::Runtime(_)
            | ClientError::NestedRuntime => FailureKind::InternalError,
        }
    }

    /// Message carried by the `valid = false` result for this failure.
    pub fn result_message(&self) -> String {
        match self {
            ClientError::Timeout { .. } => TIMEOUT_MESSAGE.to_string(),
            ClientError::NonZeroExit { output, .. } => {
                format!("{EXECUTION_FAILURE_PREFIX}: {output}")
            }
            other => format!("{INTERNAL_ERROR_PREFIX}: {other}"),
        }
    }
}

impl From<ClientError> for ValidationResult {
    fn from(err: ClientError) -> Self {
        ValidationResult::failure(err.result_message())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
