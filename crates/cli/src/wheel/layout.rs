// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Radial layout and paint model for the wheel.
//!
//! [`layout_wheel`] is a pure function of the candidates, the current rotation
//! and a [`LayoutConfig`]. It returns a [`WheelLayout`] describing every slice:
//! angular bounds, fill colour and the wrapped label with its placement. Any
//! surface (terminal, canvas, SVG) can draw from that description.
//!
//! Angles are radians in screen convention: 0 points along +x and angles grow
//! clockwise. Label coordinates are relative to the wheel centre with y
//! pointing down.

use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, TAU};
use unicode_width::UnicodeWidthStr;

use super::options::Candidate;
use super::scheduler::normalize_angle;
use super::slice_arc;

/// Hue step used by [`ColorMode::GoldenAngle`], in degrees.
pub const GOLDEN_ANGLE_DEG: f64 = 137.508;

/// Ellipsis appended to truncated labels.
pub const ELLIPSIS: char = '…';

/// Slice colouring policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// `hue(i) = i * 137.508° mod 360°`; neighbours never share a hue family.
    #[default]
    GoldenAngle,
    /// `hue(i) = round(360° * i / n)`; hues spread evenly over the circle.
    Equalized,
}

impl ColorMode {
    pub fn from_equalize(equalize: bool) -> Self {
        if equalize {
            Self::Equalized
        } else {
            Self::GoldenAngle
        }
    }
}

/// Colour in HSL space. Saturation and lightness are fractions in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Convert to 8-bit RGB.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        let h = self.hue.rem_euclid(360.0) / 60.0;
        let s = self.saturation.clamp(0.0, 1.0);
        let l = self.lightness.clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - c / 2.0;
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let to_byte = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        (to_byte(r), to_byte(g), to_byte(b))
    }

    /// CSS notation, e.g. `hsl(137.5 72% 58%)`.
    pub fn css(&self) -> String {
        format!(
            "hsl({} {}% {}%)",
            round_to(self.hue, 3),
            round_to(self.saturation * 100.0, 1),
            round_to(self.lightness * 100.0, 1)
        )
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Measures rendered text width in pixels.
pub trait TextMeasure {
    fn width(&self, text: &str) -> f64;
}

/// Fixed-pitch measurement: display columns times a glyph width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMeasure {
    pub glyph_width: f64,
}

impl MonospaceMeasure {
    pub fn new(glyph_width: f64) -> Self {
        Self { glyph_width }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn width(&self, text: &str) -> f64 {
        text.width() as f64 * self.glyph_width
    }
}

/// Geometry and paint settings for [`layout_wheel`].
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Wheel radius in pixels
    pub radius: f64,
    /// Distance of the label anchor from the centre, as a fraction of radius
    pub label_radius_ratio: f64,
    /// Labels longer than this many characters are cut with an ellipsis
    pub max_label_chars: usize,
    /// Maximum wrapped line width, as a fraction of radius
    pub label_width_ratio: f64,
    pub line_height: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub color_mode: ColorMode,
    /// Label shown on the empty wheel
    pub placeholder_label: String,
    pub placeholder_fill: Hsl,
}

impl LayoutConfig {
    /// Maximum width of a wrapped label line in pixels.
    pub fn label_max_width(&self) -> f64 {
        self.radius * self.label_width_ratio
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            radius: 240.0,
            label_radius_ratio: 0.62,
            max_label_chars: 28,
            label_width_ratio: 0.55,
            line_height: 16.0,
            saturation: 0.72,
            lightness: 0.58,
            color_mode: ColorMode::GoldenAngle,
            placeholder_label: "Add some options to spin".to_string(),
            placeholder_fill: Hsl::new(220.0, 0.13, 0.91),
        }
    }
}

/// Placement of one label.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LabelLayout {
    /// Display text after truncation
    pub text: String,
    /// Wrapped lines, top to bottom
    pub lines: Vec<String>,
    /// Anchor relative to the wheel centre
    pub x: f64,
    pub y: f64,
    /// Text rotation in radians; tangential to the wheel
    pub rotation: f64,
    pub line_height: f64,
}

impl LabelLayout {
    /// Vertical offset of line `k` from the anchor, centring the block.
    pub fn line_offset(&self, k: usize) -> f64 {
        let count = self.lines.len().max(1) as f64;
        (k as f64 - (count - 1.0) / 2.0) * self.line_height
    }
}

/// One drawable slice.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SliceLayout {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub mid_angle: f64,
    pub fill: Hsl,
    pub label: LabelLayout,
}

impl SliceLayout {
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Drawable description of the whole wheel.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WheelLayout {
    pub rotation: f64,
    pub radius: f64,
    /// True when the wheel has no candidates and shows the prompt slice
    pub placeholder: bool,
    pub slices: Vec<SliceLayout>,
}

impl WheelLayout {
    /// Index of the slice covering screen angle `angle`.
    pub fn slice_at_angle(&self, angle: f64) -> Option<usize> {
        if self.placeholder || self.slices.is_empty() {
            return None;
        }
        let arc = slice_arc(self.slices.len());
        let relative = normalize_angle(angle - self.rotation);
        let index = (relative / arc).floor() as usize;
        Some(index.min(self.slices.len() - 1))
    }
}

/// Fill colour for slice `index` of `count`.
pub fn slice_color(
    index: usize,
    count: usize,
    mode: ColorMode,
    saturation: f64,
    lightness: f64,
) -> Hsl {
    let hue = match mode {
        ColorMode::GoldenAngle => (index as f64 * GOLDEN_ANGLE_DEG) % 360.0,
        ColorMode::Equalized => (360.0 * index as f64 / count.max(1) as f64).round() % 360.0,
    };
    Hsl::new(hue, saturation, lightness)
}

/// Cut `label` to `max_chars` characters, ending in an ellipsis when cut.
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let mut out: String = label.chars().take(max_chars.saturating_sub(1)).collect();
    out.push(ELLIPSIS);
    out
}

/// Greedy word wrap.
///
/// Words are packed onto a line until the next one would push it past
/// `max_width`. A word is never split, so a single long word may exceed the
/// width on its own line.
pub fn wrap_label(text: &str, max_width: f64, measure: &impl TextMeasure) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", current, word);
        if measure.width(&candidate) > max_width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn place_label(
    label: &str,
    mid_angle: f64,
    config: &LayoutConfig,
    measure: &impl TextMeasure,
) -> LabelLayout {
    let text = truncate_label(label, config.max_label_chars);
    let lines = wrap_label(&text, config.label_max_width(), measure);
    let distance = config.radius * config.label_radius_ratio;
    LabelLayout {
        x: mid_angle.cos() * distance,
        y: mid_angle.sin() * distance,
        rotation: normalize_angle(mid_angle + FRAC_PI_2),
        line_height: config.line_height,
        text,
        lines,
    }
}

/// Lay out the wheel for `candidates` at `rotation`.
pub fn layout_wheel(
    candidates: &[Candidate],
    rotation: f64,
    config: &LayoutConfig,
    measure: &impl TextMeasure,
) -> WheelLayout {
    if candidates.is_empty() {
        let text = config.placeholder_label.clone();
        let lines = wrap_label(&text, config.label_max_width() * 2.0, measure);
        let slice = SliceLayout {
            index: 0,
            start_angle: rotation,
            end_angle: rotation + TAU,
            mid_angle: rotation + TAU / 2.0,
            fill: config.placeholder_fill,
            label: LabelLayout {
                text,
                lines,
                x: 0.0,
                y: 0.0,
                rotation: 0.0,
                line_height: config.line_height,
            },
        };
        return WheelLayout {
            rotation,
            radius: config.radius,
            placeholder: true,
            slices: vec![slice],
        };
    }

    let count = candidates.len();
    let arc = slice_arc(count);
    let slices = candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| {
            let start_angle = rotation + index as f64 * arc;
            let mid_angle = start_angle + arc / 2.0;
            SliceLayout {
                index,
                start_angle,
                end_angle: start_angle + arc,
                mid_angle,
                fill: slice_color(
                    index,
                    count,
                    config.color_mode,
                    config.saturation,
                    config.lightness,
                ),
                label: place_label(candidate.label(), mid_angle, config, measure),
            }
        })
        .collect();

    WheelLayout {
        rotation,
        radius: config.radius,
        placeholder: false,
        slices,
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
