// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validation demo binary entry point.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use validation_client::cli::Cli;
use validation_client::report::{print_error, write_report};
use validation_client::{ValidationClient, ValidationRecord, ValidationResult};

/// Sample cases run when no `--input` is given.
fn sample_cases() -> Vec<(&'static str, Sample)> {
    vec![
        (
            "Valid user",
            Sample::Record(
                ValidationRecord::new()
                    .with("name", "João Silva")
                    .with("email", "raywall@usp.br")
                    .with("idade", 25),
            ),
        ),
        (
            "Underage user",
            Sample::Record(
                ValidationRecord::new()
                    .with("name", "Ana")
                    .with("email", "ana@usp.br")
                    .with("idade", 16),
            ),
        ),
        (
            "Raw JSON",
            Sample::Json(r#"{"name":"nome","email":"raywall@usp.br","idade":18}"#.to_string()),
        ),
    ]
}

enum Sample {
    Record(ValidationRecord),
    Json(String),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let config = match cli.client_config() {
        Ok(config) => config,
        Err(e) => {
            print_error(e);
            return ExitCode::from(2);
        }
    };
    info!(executable = %config.executable().display(), timeout_ms = config.timeout_ms(), "using validator");
    let client = ValidationClient::new(config);

    let mut stdout = io::stdout().lock();

    if let Some(payload) = cli.input.as_deref() {
        let result = client.validate_json(payload);
        if let Err(e) = write_report(&mut stdout, "Input", &result) {
            print_error(e);
            return ExitCode::FAILURE;
        }
        return if result.valid {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    let _ = writeln!(stdout, "=== User validation ===");
    for (title, sample) in sample_cases() {
        let result: ValidationResult = match &sample {
            Sample::Record(record) => client.validate(record),
            Sample::Json(payload) => client.validate_json(payload),
        };
        let written = writeln!(stdout, "\n--- {title} ---")
            .and_then(|()| write_report(&mut stdout, title, &result));
        if let Err(e) = written {
            print_error(e);
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
