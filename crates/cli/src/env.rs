// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by spinwheel are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

pub use names::*;

use std::path::PathBuf;

/// `SPINWHEEL_CONFIG` — TOML configuration file.
pub fn config_path() -> Option<PathBuf> {
    var_path(names::SPINWHEEL_CONFIG)
}

/// `SPINWHEEL_STORE` — File holding the raw option text.
pub fn store_path() -> Option<PathBuf> {
    var_path(names::SPINWHEEL_STORE)
}

/// `SPINWHEEL_HISTORY` — JSONL spin history file.
pub fn history_path() -> Option<PathBuf> {
    var_path(names::SPINWHEEL_HISTORY)
}

/// `SPINWHEEL_FRAME_MS` — Overrides the animation frame interval.
pub fn frame_interval_ms() -> Option<u64> {
    std::env::var(names::SPINWHEEL_FRAME_MS)
        .ok()
        .and_then(|v| v.parse().ok())
}

/// `HOME` — User's home directory.
pub fn home() -> Option<PathBuf> {
    var_path(names::HOME)
}

fn var_path(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
