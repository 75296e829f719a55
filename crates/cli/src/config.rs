// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration file types.
//!
//! The configuration is a TOML file; every field is optional and falls back
//! to the built-in default.
//!
//! ```toml
//! no_repeats = true
//! sample_options = ["Heads", "Tails"]
//!
//! [spin]
//! min_turns = 3
//! max_duration_ms = 4000
//!
//! [layout]
//! equalize_colors = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::wheel::{ColorMode, Hsl, LayoutConfig, SpinConfig, WheelSettings};

/// Options shown when nothing has been saved yet
pub const DEFAULT_SAMPLE_OPTIONS: &[&str] =
    &["Pizza", "Sushi", "Burgers", "Tacos", "Salad", "Curry"];

/// Base URL used for share links
pub const DEFAULT_SHARE_BASE_URL: &str = "https://spinwheel.app/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

fn default_sample_options() -> Vec<String> {
    DEFAULT_SAMPLE_OPTIONS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_share_base_url() -> String {
    DEFAULT_SHARE_BASE_URL.to_string()
}

/// Top-level configuration
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WheelConfig {
    /// Remove winners after each spin
    #[serde(default)]
    pub no_repeats: bool,

    /// Options used when no saved option text exists
    #[serde(default = "default_sample_options")]
    pub sample_options: Vec<String>,

    /// Page that share links point at
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,

    #[serde(default)]
    pub spin: SpinSection,

    #[serde(default)]
    pub layout: LayoutSection,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            no_repeats: false,
            sample_options: default_sample_options(),
            share_base_url: default_share_base_url(),
            spin: SpinSection::default(),
            layout: LayoutSection::default(),
        }
    }
}

/// `[spin]` section
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct SpinSection {
    pub min_turns: u32,
    pub extra_turns: u32,
    pub min_duration_ms: u64,
    pub max_duration_ms: u64,
    /// Pointer position in degrees, screen convention (270 = top)
    pub pointer_angle_deg: f64,
    pub frame_interval_ms: u64,
}

impl Default for SpinSection {
    fn default() -> Self {
        Self {
            min_turns: 4,
            extra_turns: 2,
            min_duration_ms: 3200,
            max_duration_ms: 4700,
            pointer_angle_deg: 270.0,
            frame_interval_ms: 16,
        }
    }
}

impl SpinSection {
    pub fn to_spin_config(&self) -> SpinConfig {
        SpinConfig {
            min_turns: self.min_turns,
            extra_turns: self.extra_turns,
            min_duration_ms: self.min_duration_ms,
            max_duration_ms: self.max_duration_ms,
            pointer_angle: self.pointer_angle_deg.to_radians(),
        }
    }
}

/// `[layout]` section
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct LayoutSection {
    pub radius: f64,
    pub label_radius_ratio: f64,
    pub max_label_chars: usize,
    pub label_width_ratio: f64,
    pub glyph_width_px: f64,
    pub line_height_px: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub equalize_colors: bool,
    pub placeholder_label: String,
}

impl Default for LayoutSection {
    fn default() -> Self {
        let layout = LayoutConfig::default();
        Self {
            radius: layout.radius,
            label_radius_ratio: layout.label_radius_ratio,
            max_label_chars: layout.max_label_chars,
            label_width_ratio: layout.label_width_ratio,
            glyph_width_px: 8.0,
            line_height_px: layout.line_height,
            saturation: layout.saturation,
            lightness: layout.lightness,
            equalize_colors: false,
            placeholder_label: layout.placeholder_label,
        }
    }
}

impl LayoutSection {
    pub fn to_layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            radius: self.radius,
            label_radius_ratio: self.label_radius_ratio,
            max_label_chars: self.max_label_chars,
            label_width_ratio: self.label_width_ratio,
            line_height: self.line_height_px,
            saturation: self.saturation,
            lightness: self.lightness,
            color_mode: ColorMode::GoldenAngle,
            placeholder_label: self.placeholder_label.clone(),
            placeholder_fill: Hsl::new(220.0, 0.13, 0.91),
        }
    }
}

impl WheelConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let spin = &self.spin;
        if spin.min_duration_ms > spin.max_duration_ms {
            return Err(ConfigError::Invalid(format!(
                "spin.min_duration_ms ({}) exceeds spin.max_duration_ms ({})",
                spin.min_duration_ms, spin.max_duration_ms
            )));
        }
        if spin.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "spin.frame_interval_ms must be positive".to_string(),
            ));
        }
        if !spin.pointer_angle_deg.is_finite() {
            return Err(ConfigError::Invalid(
                "spin.pointer_angle_deg must be finite".to_string(),
            ));
        }

        let layout = &self.layout;
        let positive = [
            ("layout.radius", layout.radius),
            ("layout.glyph_width_px", layout.glyph_width_px),
            ("layout.line_height_px", layout.line_height_px),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("{} must be positive", name)));
            }
        }
        let ratios = [
            ("layout.label_radius_ratio", layout.label_radius_ratio),
            ("layout.label_width_ratio", layout.label_width_ratio),
        ];
        for (name, value) in ratios {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::Invalid(format!("{} must be in (0, 1]", name)));
            }
        }
        let fractions = [
            ("layout.saturation", layout.saturation),
            ("layout.lightness", layout.lightness),
        ];
        for (name, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!("{} must be in [0, 1]", name)));
            }
        }
        if layout.max_label_chars < 2 {
            return Err(ConfigError::Invalid(
                "layout.max_label_chars must be at least 2".to_string(),
            ));
        }
        Ok(())
    }

    pub fn settings(&self) -> WheelSettings {
        WheelSettings {
            no_repeats: self.no_repeats,
            equalize_colors: self.layout.equalize_colors,
        }
    }

    /// Sample options as option text.
    pub fn sample_text(&self) -> String {
        self.sample_options.join("\n")
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
