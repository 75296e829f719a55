// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output helpers for consistent error/warning/toast formatting.
//!
//! Diagnostics go to stderr so stdout stays clean for piping. ANSI colour is
//! used only when the target is a terminal.

use std::io::{self, IsTerminal, Write};

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

/// Write an error message to a writer with explicit terminal flag.
pub fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31mError: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Error: {}", msg);
    }
}

/// Print a warning message to stderr.
pub fn print_warning(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_warning(&mut io::stderr(), msg, is_tty);
}

/// Write a warning message to a writer with explicit terminal flag.
pub fn write_warning<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[33mWarning: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Warning: {}", msg);
    }
}

/// Print a short acknowledgement to stderr.
pub fn print_toast(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_toast(&mut io::stderr(), msg, is_tty);
}

/// Write a short acknowledgement ("Saved", "Link copied").
///
/// Dimmed on a terminal. These are transient notices, never errors.
pub fn write_toast<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[2m✓ {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "✓ {}", msg);
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
