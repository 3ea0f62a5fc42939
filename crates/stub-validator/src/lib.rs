// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reference user validator.
//!
//! Implements the validator side of the single-record process protocol so
//! the client can be exercised against a real executable. Rules:
//! name required with at least 2 characters, email required and
//! well-formed, age (`idade`) between 18 and 120.

use std::ffi::OsString;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use validation_result::ValidationResult;

static EMAIL_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").ok());

/// Message reported for a record without violations
pub const VALID_MESSAGE: &str = "user is valid";

pub const MIN_AGE: i64 = 18;
pub const MAX_AGE: i64 = 120;

/// Fields the validator looks at; anything else is ignored.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub idade: i64,
}

fn check_name(name: &str) -> Option<&'static str> {
    let name = name.trim();
    if name.is_empty() {
        Some("name is required")
    } else if name.chars().count() < 2 {
        Some("name must have at least 2 characters")
    } else {
        None
    }
}

fn check_email(email: &str) -> Option<&'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Some("email is required");
    }
    let well_formed = EMAIL_REGEX.as_ref().is_some_and(|re| re.is_match(email));
    if well_formed {
        None
    } else {
        Some("email must be a valid address")
    }
}

fn check_age(idade: i64) -> Option<&'static str> {
    if idade < MIN_AGE {
        Some("age must be at least 18")
    } else if idade > MAX_AGE {
        Some("age must be realistic (at most 120)")
    } else {
        None
    }
}

/// Apply every rule, collecting violations in rule order.
pub fn validate_user(user: &UserRequest) -> ValidationResult {
    let errors: Vec<&str> = [
        check_name(&user.name),
        check_email(&user.email),
        check_age(user.idade),
    ]
    .into_iter()
    .flatten()
    .collect();

    if errors.is_empty() {
        ValidationResult::accepted(VALID_MESSAGE)
    } else {
        ValidationResult::rejected(errors)
    }
}

/// Answer for one JSON record, plus the exit code to report it with.
#[derive(Debug, PartialEq, Eq)]
pub struct Answer {
    pub result: ValidationResult,
    pub exit_code: i32,
}

/// Decode and validate one record.
///
/// Undecodable input is answered with `valid = false` and exit code 1.
pub fn process_json(input: &str) -> Answer {
    match serde_json::from_str::<UserRequest>(input) {
        Ok(user) => Answer {
            result: validate_user(&user),
            exit_code: 0,
        },
        Err(e) => Answer {
            result: ValidationResult::failure(format!("invalid JSON: {e}")),
            exit_code: 1,
        },
    }
}

/// Accept Go-style single-dash long flags (`-mode single`, `-input=...`).
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 {
                return arg;
            }
            match arg.to_str() {
                Some(s) if is_single_dash_long(s) => OsString::from(format!("-{s}")),
                _ => arg,
            }
        })
        .collect()
}

fn is_single_dash_long(arg: &str) -> bool {
    let name = arg
        .strip_prefix('-')
        .filter(|rest| !rest.starts_with('-'))
        .map(|rest| rest.split('=').next().unwrap_or(rest));
    matches!(name, Some("mode" | "input"))
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
