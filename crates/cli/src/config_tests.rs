// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use std::f64::consts::PI;
use std::io::Write;
use yare::parameterized;

fn parse(content: &str) -> Result<WheelConfig, toml::de::Error> {
    toml::from_str(content)
}

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn empty_file_gives_defaults() {
    let config = parse("").unwrap();
    assert_eq!(config, WheelConfig::default());
    assert!(config.validate().is_ok());
}

#[test]
fn default_spin_matches_engine_defaults() {
    let spin = SpinSection::default().to_spin_config();
    assert_eq!(spin.min_turns, 4);
    assert_eq!(spin.extra_turns, 2);
    assert_eq!(spin.min_duration_ms, 3200);
    assert_eq!(spin.max_duration_ms, 4700);
    assert!((spin.pointer_angle - 3.0 * PI / 2.0).abs() < 1e-12);
}

#[test]
fn default_layout_matches_engine_defaults() {
    assert_eq!(
        LayoutSection::default().to_layout_config(),
        LayoutConfig::default()
    );
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config = parse(
        r#"
        no_repeats = true
        sample_options = ["Heads", "Tails"]

        [spin]
        min_turns = 2

        [layout]
        equalize_colors = true
        "#,
    )
    .unwrap();

    assert!(config.no_repeats);
    assert_eq!(config.sample_text(), "Heads\nTails");
    assert_eq!(config.spin.min_turns, 2);
    assert_eq!(config.spin.max_duration_ms, 4700);
    assert!(config.layout.equalize_colors);
    assert_eq!(config.layout.max_label_chars, 28);

    let settings = config.settings();
    assert!(settings.no_repeats);
    assert!(settings.equalize_colors);
}

#[test]
fn unknown_fields_rejected() {
    assert!(parse("colour = 'red'").is_err());
    assert!(parse("[spin]\nspeed = 3").is_err());
}

#[parameterized(
    durations = { "[spin]\nmin_duration_ms = 5000\nmax_duration_ms = 4000", "min_duration_ms" },
    frame = { "[spin]\nframe_interval_ms = 0", "frame_interval_ms" },
    radius = { "[layout]\nradius = 0.0", "layout.radius" },
    ratio = { "[layout]\nlabel_radius_ratio = 1.5", "label_radius_ratio" },
    saturation = { "[layout]\nsaturation = 2.0", "saturation" },
    label_chars = { "[layout]\nmax_label_chars = 1", "max_label_chars" },
)]
fn invalid_values_rejected(content: &str, needle: &str) {
    let err = parse(content).unwrap().validate().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains(needle), "{}", err);
}

#[test]
fn load_reads_file() {
    let file = write_config("share_base_url = \"https://example.com/w\"\n");
    let config = WheelConfig::load(file.path()).unwrap();
    assert_eq!(config.share_base_url, "https://example.com/w");
}

#[test]
fn load_reports_parse_errors_with_path() {
    let file = write_config("no_repeats = maybe\n");
    let err = WheelConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = WheelConfig::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn load_or_default_without_path() {
    assert_eq!(
        WheelConfig::load_or_default(None).unwrap(),
        WheelConfig::default()
    );
}
