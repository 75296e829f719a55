// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for binary integration tests.
//!
//! Every test runs against its own temporary `$HOME` so the option store and
//! spin history never touch the real user directory.

#![allow(dead_code)]
#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::{NamedTempFile, TempDir};

/// Short spin timings so animated runs finish quickly.
pub const FAST_SPIN_CONFIG: &str = r#"
[spin]
min_duration_ms = 40
max_duration_ms = 60
"#;

/// Isolated home directory for one test.
pub struct Sandbox {
    home: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().unwrap(),
        }
    }

    /// Sandbox whose store already holds `text`.
    pub fn with_options(text: &str) -> Self {
        let sandbox = Self::new();
        let path = sandbox.store_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, text).unwrap();
        sandbox
    }

    pub fn home(&self) -> PathBuf {
        self.home.path().to_path_buf()
    }

    pub fn store_path(&self) -> PathBuf {
        self.home.path().join(".spinwheel").join("options.txt")
    }

    pub fn history_path(&self) -> PathBuf {
        self.home.path().join(".spinwheel").join("history.jsonl")
    }

    /// Saved option text, or `None` if nothing was saved.
    pub fn options(&self) -> Option<String> {
        std::fs::read_to_string(self.store_path()).ok()
    }

    /// `spinwheel` with the sandbox as `$HOME`.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("spinwheel").unwrap();
        cmd.env("HOME", self.home.path())
            .env_remove("SPINWHEEL_CONFIG")
            .env_remove("SPINWHEEL_STORE")
            .env_remove("SPINWHEEL_HISTORY")
            .env("SPINWHEEL_FRAME_MS", "1");
        cmd
    }

    /// Stdout of a successful run.
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self.cmd().args(args).output().unwrap();
        assert!(
            output.status.success(),
            "spinwheel {:?} failed: {:?}",
            args,
            output
        );
        String::from_utf8(output.stdout).unwrap()
    }
}

/// Create a temporary TOML config file.
pub fn write_config(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Winner announced in a spin's stdout.
pub fn winner_of(stdout: &str) -> String {
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Winner: "))
        .unwrap_or_else(|| panic!("no winner in {:?}", stdout))
        .to_string()
}
