// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal rendering of a [`WheelLayout`].
//!
//! The disc is rasterised into character cells. A cell is roughly twice as
//! tall as it is wide, so each row unit spans two columns.

use unicode_width::UnicodeWidthStr;

use crate::wheel::{normalize_angle, Hsl, WheelLayout};

/// ANSI escape sequence helpers
pub mod escape {
    /// 24-bit foreground color
    pub fn fg(r: u8, g: u8, b: u8) -> String {
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }

    /// 24-bit background color
    pub fn bg(r: u8, g: u8, b: u8) -> String {
        format!("\x1b[48;2;{};{};{}m", r, g, b)
    }

    /// Reset background color
    pub const BG_RESET: &str = "\x1b[49m";

    /// Reset all attributes
    pub const RESET: &str = "\x1b[0m";

    /// Bold
    pub const BOLD: &str = "\x1b[1m";
}

/// Smallest disc diameter in rows that still shows distinct slices
pub const MIN_DISC_ROWS: usize = 5;

/// Default disc diameter in rows
pub const DEFAULT_DISC_ROWS: usize = 15;

/// Spinner glyphs cycled while a spin animates
const FRAME_GLYPHS: &[&str] = &["◐", "◓", "◑", "◒"];

/// Symbols marking slices when colour is off
const PLAIN_MARKS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    /// Disc diameter in rows
    pub rows: usize,
    pub color: bool,
    /// Screen angle of the pointer in radians
    pub pointer_angle: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            rows: DEFAULT_DISC_ROWS,
            color: true,
            pointer_angle: 3.0 * std::f64::consts::FRAC_PI_2,
        }
    }
}

/// Current terminal width in columns, if stdout is a terminal.
pub fn terminal_width() -> Option<u16> {
    crossterm::terminal::size().ok().map(|(width, _)| width)
}

/// Largest disc that fits `requested` rows into `width` columns.
pub fn fit_rows(requested: usize, width: Option<u16>) -> usize {
    let requested = requested.max(MIN_DISC_ROWS);
    match width {
        // Two columns per row plus the pointer margin on both sides
        Some(width) => requested
            .min((width as usize).saturating_sub(4) / 2)
            .max(MIN_DISC_ROWS),
        None => requested,
    }
}

/// Render the disc, pointer and legend.
pub fn render_wheel(layout: &WheelLayout, options: &RenderOptions) -> String {
    let mut out = render_disc(layout, options);
    out.push('\n');
    out.push_str(&render_legend(layout, options.color));
    out
}

/// Render only the disc with its pointer marker.
pub fn render_disc(layout: &WheelLayout, options: &RenderOptions) -> String {
    let rows = options.rows.max(MIN_DISC_ROWS);
    let grid_rows = rows + 2;
    let grid_cols = rows * 2 + 4;
    let radius = rows as f64 / 2.0;
    let centre_row = grid_rows as f64 / 2.0;
    let centre_col = grid_cols as f64 / 2.0;
    let (marker_row, marker_col, marker) =
        pointer_marker(options.pointer_angle, radius, centre_row, centre_col);

    let mut lines = Vec::with_capacity(grid_rows);
    for row in 0..grid_rows {
        let mut line = String::new();
        let mut current: Option<usize> = None;
        for col in 0..grid_cols {
            let y = row as f64 + 0.5 - centre_row;
            let x = (col as f64 + 0.5 - centre_col) / 2.0;
            let cell = if x * x + y * y <= radius * radius {
                slice_for_cell(layout, y.atan2(x))
            } else {
                None
            };

            if options.color {
                if cell != current {
                    match cell {
                        Some(index) => {
                            let (r, g, b) = fill_of(layout, index).to_rgb();
                            line.push_str(&escape::bg(r, g, b));
                        }
                        None => line.push_str(escape::BG_RESET),
                    }
                    current = cell;
                }
                if cell.is_none() && row == marker_row && col == marker_col {
                    line.push_str(marker);
                } else {
                    line.push(' ');
                }
            } else {
                match cell {
                    Some(index) => line.push(plain_mark(layout, index)),
                    None if row == marker_row && col == marker_col => line.push_str(marker),
                    None => line.push(' '),
                }
            }
        }
        if options.color && current.is_some() {
            line.push_str(escape::BG_RESET);
        }
        lines.push(line.trim_end().to_string());
    }

    // Drop margin rows left empty by the marker placement
    while lines.first().is_some_and(|l| l.is_empty()) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

/// Legend of slice labels in wheel order.
pub fn render_legend(layout: &WheelLayout, color: bool) -> String {
    if layout.placeholder {
        let text = layout
            .slices
            .first()
            .map(|s| s.label.lines.join(" "))
            .unwrap_or_default();
        return format!("{}\n", text);
    }

    let number_width = layout.slices.len().to_string().len();
    let mut out = String::new();
    for slice in &layout.slices {
        let swatch = if color {
            let (r, g, b) = slice.fill.to_rgb();
            format!("{}██{}", escape::fg(r, g, b), escape::RESET)
        } else {
            format!("[{}]", plain_mark(layout, slice.index))
        };
        let prefix = format!(
            "{} {:>width$}. ",
            swatch,
            slice.index + 1,
            width = number_width
        );
        let indent = " ".repeat(visible_width(&prefix));
        for (k, line) in slice.label.lines.iter().enumerate() {
            if k == 0 {
                out.push_str(&prefix);
            } else {
                out.push_str(&indent);
            }
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

/// One status line for an animation frame, padded to `width` columns.
pub fn render_frame_line(label: Option<&str>, progress: f64, width: usize) -> String {
    let progress = progress.clamp(0.0, 1.0);
    let step = (progress * 40.0) as usize % FRAME_GLYPHS.len();
    let glyph = if progress >= 1.0 {
        "●"
    } else {
        FRAME_GLYPHS[step]
    };
    let percent = (progress * 100.0).round() as u32;
    let mut line = format!("{} {:>3}%  {}", glyph, percent, label.unwrap_or(""));
    let used = line.width();
    if used < width {
        line.push_str(&" ".repeat(width - used));
    }
    line
}

/// Winner announcement.
pub fn render_winner(label: &str, fill: Option<Hsl>, color: bool) -> String {
    match fill {
        Some(fill) if color => {
            let (r, g, b) = fill.to_rgb();
            format!(
                "{}██{} Winner: {}{}{}",
                escape::fg(r, g, b),
                escape::RESET,
                escape::BOLD,
                label,
                escape::RESET
            )
        }
        _ => format!("Winner: {}", label),
    }
}

fn slice_for_cell(layout: &WheelLayout, angle: f64) -> Option<usize> {
    if layout.placeholder {
        return Some(0);
    }
    layout.slice_at_angle(angle)
}

fn fill_of(layout: &WheelLayout, index: usize) -> Hsl {
    layout
        .slices
        .get(index)
        .map(|s| s.fill)
        .unwrap_or(Hsl::new(0.0, 0.0, 0.5))
}

fn plain_mark(layout: &WheelLayout, index: usize) -> char {
    if layout.placeholder {
        return '·';
    }
    char::from(PLAIN_MARKS[index % PLAIN_MARKS.len()])
}

/// Marker cell just outside the disc, pointing at the centre.
fn pointer_marker(
    angle: f64,
    radius: f64,
    centre_row: f64,
    centre_col: f64,
) -> (usize, usize, &'static str) {
    let angle = normalize_angle(angle);
    let (dx, dy) = (angle.cos(), angle.sin());
    let distance = radius + 0.5;
    let row = (centre_row + dy * distance - 0.5).round().max(0.0) as usize;
    let col = (centre_col + dx * distance * 2.0 - 0.5).round().max(0.0) as usize;
    let glyph = if dy.abs() >= dx.abs() {
        if dy < 0.0 {
            "▼"
        } else {
            "▲"
        }
    } else if dx < 0.0 {
        "▶"
    } else {
        "◀"
    };
    (row, col, glyph)
}

/// Display width ignoring ANSI escape sequences.
fn visible_width(text: &str) -> usize {
    let mut plain = String::with_capacity(text.len());
    let mut in_escape = false;
    for c in text.chars() {
        match (in_escape, c) {
            (false, '\x1b') => in_escape = true,
            (true, 'm') => in_escape = false,
            (true, _) => {}
            (false, c) => plain.push(c),
        }
    }
    plain.width()
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
