// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Integration tests for configuration loading and startup failures.
//!
//! Invalid configuration is reported on stderr and exits with status 1.

mod common;

use common::{write_config, Sandbox};
use predicates::prelude::*;

// =============================================================================
// Rejected Configuration
// =============================================================================

mod rejected {
    use super::*;

    #[test]
    fn test_unknown_field_rejected() {
        let sandbox = Sandbox::new();
        let config = write_config("no_repeat = true\n");
        sandbox
            .cmd()
            .args(["--config", config.path().to_str().unwrap(), "list"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Error:"))
            .stderr(predicate::str::contains("no_repeat"));
    }

    #[test]
    fn test_inverted_durations_rejected() {
        let sandbox = Sandbox::new();
        let config = write_config("[spin]\nmin_duration_ms = 5000\nmax_duration_ms = 1000\n");
        sandbox
            .cmd()
            .args(["--config", config.path().to_str().unwrap(), "spin"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("min_duration_ms"));
    }

    #[test]
    fn test_missing_config_file_names_path() {
        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .args(["--config", "/nonexistent/wheel.toml", "list"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("/nonexistent/wheel.toml"));
    }

    #[test]
    fn test_corrupt_history_rejected_by_listing() {
        let sandbox = Sandbox::with_options("A\nB");
        std::fs::write(sandbox.history_path(), "{ not json\n").unwrap();
        sandbox
            .cmd()
            .arg("history")
            .assert()
            .failure()
            .stderr(predicate::str::contains("history"));
    }

    #[test]
    fn test_corrupt_history_still_spins() {
        let sandbox = Sandbox::with_options("A\nB");
        std::fs::write(sandbox.history_path(), "{ not json\n").unwrap();
        sandbox
            .cmd()
            .arg("spin")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Winner: "))
            .stderr(predicate::str::contains("Not recording spins"));
    }

    #[test]
    fn test_listing_history_leaves_home_untouched() {
        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .arg("history")
            .assert()
            .success()
            .stdout("No spins yet\n");
        assert!(!sandbox.home().join(".spinwheel").exists());
    }

    #[test]
    fn test_set_missing_file_fails() {
        let sandbox = Sandbox::with_options("A\nB");
        sandbox
            .cmd()
            .args(["set", "/nonexistent/options.txt"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("/nonexistent/options.txt"));
        assert_eq!(sandbox.options().as_deref(), Some("A\nB"));
    }
}

// =============================================================================
// Accepted Configuration
// =============================================================================

mod accepted {
    use super::*;

    #[test]
    fn test_config_from_environment() {
        let sandbox = Sandbox::new();
        let config = write_config("sample_options = [\"Heads\", \"Tails\"]\n");
        sandbox
            .cmd()
            .env("SPINWHEEL_CONFIG", config.path())
            .arg("list")
            .assert()
            .success()
            .stdout("1. Heads\n2. Tails\n");
    }

    #[test]
    fn test_config_no_repeats_applies_to_spin() {
        let sandbox = Sandbox::with_options("A\nB\nC");
        let config = write_config("no_repeats = true\n");
        sandbox
            .cmd()
            .args(["--config", config.path().to_str().unwrap(), "spin"])
            .assert()
            .success();
        assert_eq!(sandbox.options().unwrap().lines().count(), 2);
    }

    #[test]
    fn test_store_from_environment() {
        let sandbox = Sandbox::new();
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("env-store.txt");
        std::fs::write(&store, "X\nY").unwrap();
        sandbox
            .cmd()
            .env("SPINWHEEL_STORE", &store)
            .arg("list")
            .assert()
            .success()
            .stdout("1. X\n2. Y\n");
    }

    #[test]
    fn test_history_from_environment() {
        let sandbox = Sandbox::with_options("A\nB");
        let dir = tempfile::tempdir().unwrap();
        let history = dir.path().join("spins.jsonl");
        sandbox
            .cmd()
            .env("SPINWHEEL_HISTORY", &history)
            .arg("spin")
            .assert()
            .success();
        let recorded = std::fs::read_to_string(&history).unwrap();
        assert_eq!(recorded.lines().count(), 1);
    }

    #[test]
    fn test_equalized_colours_from_config() {
        let sandbox = Sandbox::with_options("A\nB\nC\nD");
        let config = write_config("[layout]\nequalize_colors = true\n");
        let config_arg = config.path().to_str().unwrap();
        let stdout = sandbox.stdout(&["--config", config_arg, "show", "--json"]);
        let layout: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(layout["slices"][1]["fill"]["hue"], 90.0);
        assert_eq!(layout["slices"][3]["fill"]["hue"], 270.0);
    }
}
