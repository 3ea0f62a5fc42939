// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reference validator entry point.
//!
//! `validator -mode single -input <json>` validates the given record;
//! `validator -mode stdin` reads one JSON line from stdin.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use stub_validator::{normalize_args, process_json};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Read one JSON record from stdin
    Stdin,
    /// Validate the record given with --input
    Single,
}

/// Validates a user record and prints the result as JSON
#[derive(Parser, Debug)]
#[command(name = "validator")]
struct Cli {
    /// Processing mode
    #[arg(long, value_enum, default_value = "stdin")]
    mode: Mode,

    /// JSON input for single mode
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    input: String,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let input = match cli.mode {
        Mode::Single if cli.input.is_empty() => {
            eprintln!("Input JSON is required in single mode");
            return ExitCode::FAILURE;
        }
        Mode::Single => cli.input,
        Mode::Stdin => {
            let mut line = String::new();
            if let Err(e) = io::stdin().lock().read_line(&mut line) {
                eprintln!("Failed to read stdin: {e}");
                return ExitCode::FAILURE;
            }
            line
        }
    };

    let answer = process_json(input.trim());
    match answer.result.to_json() {
        Ok(json) => {
            let _ = writeln!(io::stdout(), "{json}");
        }
        Err(e) => {
            eprintln!("Failed to encode result: {e}");
            return ExitCode::FAILURE;
        }
    }
    if answer.exit_code == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
