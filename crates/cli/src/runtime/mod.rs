// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime module for executing wheel commands.
//!
//! This module provides:
//! - [`RuntimeBuilder`] - Resolves config, store and history for a command
//! - [`Runtime`] - Owns the wheel and executes one command
//! - The interactive `play` loop

mod builder;
mod core;
mod play;

pub use builder::{history_path, RuntimeBuildError, RuntimeBuilder, HISTORY_FILE_NAME};
pub use core::{CommandError, OutputOptions, Runtime};
