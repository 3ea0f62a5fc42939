#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use std::io;
use yare::parameterized;

fn decode_error() -> serde_json::Error {
    serde_json::from_str::<ValidationResult>("not json").unwrap_err()
}

#[parameterized(
    timeout = { ClientError::Timeout { timeout_ms: 50 }, FailureKind::Timeout },
    non_zero = { ClientError::NonZeroExit { code: Some(1), output: "boom".into() }, FailureKind::ExecutionFailure },
    spawn = { ClientError::Spawn { path: "./missing".into(), source: io::Error::from(io::ErrorKind::NotFound) }, FailureKind::InternalError },
    io = { ClientError::Io(io::Error::other("pipe closed")), FailureKind::InternalError },
    stream = { ClientError::StreamUnavailable("stdout"), FailureKind::InternalError },
    invalid_response = { ClientError::InvalidResponse(decode_error()), FailureKind::InternalError },
    nested = { ClientError::NestedRuntime, FailureKind::InternalError },
)]
fn kind_classifies_failure(err: ClientError, expected: FailureKind) {
    assert_eq!(err.kind(), expected);
}

#[test]
fn timeout_result_has_fixed_message() {
    let result = ValidationResult::from(ClientError::Timeout { timeout_ms: 5000 });
    assert!(!result.valid);
    assert_eq!(result.message(), Some(TIMEOUT_MESSAGE));
    assert!(result.errors().is_empty());
}

#[test]
fn non_zero_result_includes_output() {
    let result = ValidationResult::from(ClientError::NonZeroExit {
        code: Some(1),
        output: "Input JSON is required in single mode".into(),
    });
    assert_eq!(
        result.message(),
        Some("Validator execution failed: Input JSON is required in single mode")
    );
    assert!(result.errors().is_empty());
}

#[test]
fn internal_result_includes_cause() {
    let result = ValidationResult::from(ClientError::Spawn {
        path: "./validator".into(),
        source: io::Error::from(io::ErrorKind::NotFound),
    });
    let message = result.message().unwrap();
    assert!(message.starts_with("Internal error: "), "{message}");
    assert!(message.contains("./validator"), "{message}");
    assert!(!result.valid);
}

#[test]
fn decode_failure_is_internal_error() {
    let result = ValidationResult::from(ClientError::InvalidResponse(decode_error()));
    let message = result.message().unwrap();
    assert!(message.starts_with(INTERNAL_ERROR_PREFIX), "{message}");
    assert!(message.contains("invalid validator response"), "{message}");
}
