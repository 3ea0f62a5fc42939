// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable rendering of validation results.

use std::io::{self, IsTerminal, Write};

use validation_result::ValidationResult;

/// Write a titled report for one validation run.
pub fn write_report<W: Write>(
    writer: &mut W,
    title: &str,
    result: &ValidationResult,
) -> io::Result<()> {
    writeln!(writer, "{title}:")?;
    writeln!(writer, "Valid: {}", result.valid)?;
    if let Some(message) = result.message() {
        writeln!(writer, "Message: {message}")?;
    }
    if !result.errors().is_empty() {
        writeln!(writer, "Errors:")?;
        for error in result.errors() {
            writeln!(writer, "     - {error}")?;
        }
    }
    Ok(())
}

/// Print an error message to stderr, red on a terminal.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31mError: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Error: {}", msg);
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
