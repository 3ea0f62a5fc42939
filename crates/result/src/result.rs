// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validation outcome as emitted by the validator on stdout.

use serde::{Deserialize, Deserializer, Serialize};

/// Outcome of a validation attempt.
///
/// Decodes the validator's JSON answer. Missing fields fall back to
/// `valid = false`, no message and no errors, so a decoded value is always
/// fully populated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the record passed validation
    #[serde(default)]
    pub valid: bool,

    /// Human-readable summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Individual violations, in the order the validator reported them
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Successful validation with a summary message
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: Some(message.into()),
            errors: Vec::new(),
        }
    }

    /// Validation rejected with a list of violations
    pub fn rejected<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            valid: false,
            message: None,
            errors: errors.into_iter().map(Into::into).collect(),
        }
    }

    /// Failure synthesized locally (timeout, crash, bad output).
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
            errors: Vec::new(),
        }
    }

    /// Replace the message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Message, if one was reported and it is not blank
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Decode a validator answer.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Encode in the validator's wire format.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Validators written in languages with nil slices emit `"errors": null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
