// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::wheel::{layout_wheel, parse_options, LayoutConfig, MonospaceMeasure};
use rstest::rstest;
use std::f64::consts::FRAC_PI_2;
use yare::parameterized;

fn layout_for(text: &str) -> WheelLayout {
    layout_wheel(
        &parse_options(text),
        0.0,
        &LayoutConfig::default(),
        &MonospaceMeasure::new(8.0),
    )
}

fn plain(rows: usize) -> RenderOptions {
    RenderOptions {
        rows,
        color: false,
        ..RenderOptions::default()
    }
}

#[test]
fn plain_disc_marks_every_slice() {
    let disc = render_disc(&layout_for("Pizza\nSushi\nTacos"), &plain(15));
    for mark in ['0', '1', '2'] {
        assert!(disc.contains(mark), "missing slice {mark}:\n{disc}");
    }
    assert!(!disc.contains('\x1b'));
}

#[test]
fn pointer_marker_sits_above_disc_by_default() {
    let disc = render_disc(&layout_for("a\nb"), &plain(9));
    let first = disc.lines().next().unwrap();
    assert_eq!(first.trim(), "▼");
}

#[rstest]
#[case(0.0, "◀")]
#[case(FRAC_PI_2, "▲")]
#[case(std::f64::consts::PI, "▶")]
#[case(3.0 * FRAC_PI_2, "▼")]
fn pointer_marker_faces_centre(#[case] angle: f64, #[case] glyph: &str) {
    let (_, _, marker) = pointer_marker(angle, 5.0, 6.0, 12.0);
    assert_eq!(marker, glyph);
}

#[test]
fn plain_rows_fit_grid_width() {
    let rows = 11;
    let disc = render_disc(&layout_for("a\nb\nc\nd"), &plain(rows));
    for line in disc.lines() {
        assert!(line.chars().count() <= rows * 2 + 4, "{line:?}");
    }
}

#[test]
fn colour_disc_uses_slice_fills() {
    let layout = layout_for("Pizza\nSushi");
    let options = RenderOptions {
        rows: 9,
        ..RenderOptions::default()
    };
    let disc = render_disc(&layout, &options);
    for slice in &layout.slices {
        let (r, g, b) = slice.fill.to_rgb();
        assert!(disc.contains(&escape::bg(r, g, b)));
    }
    assert!(disc.contains(escape::BG_RESET));
}

#[test]
fn placeholder_renders_prompt() {
    let layout = layout_for("");
    let out = render_wheel(&layout, &plain(9));
    assert!(out.contains('·'));
    assert!(out.ends_with("Add some options to spin\n"));
}

#[test]
fn legend_numbers_slices_in_order() {
    let legend = render_legend(&layout_for("Pizza\nSushi"), false);
    assert_eq!(legend, "[0] 1. Pizza\n[1] 2. Sushi\n");
}

#[test]
fn legend_indents_wrapped_lines() {
    let legend = render_legend(&layout_for("Extra spicy vindaloo curry\nRice"), false);
    let lines: Vec<&str> = legend.lines().collect();
    assert_eq!(lines[0], "[0] 1. Extra spicy");
    assert_eq!(lines[1], "       vindaloo curry");
    assert_eq!(lines[2], "[1] 2. Rice");
}

#[test]
fn colour_legend_swatch_matches_fill() {
    let layout = layout_for("Pizza");
    let (r, g, b) = layout.slices[0].fill.to_rgb();
    let legend = render_legend(&layout, true);
    assert!(legend.starts_with(&escape::fg(r, g, b)));
    assert!(legend.contains("1. Pizza"));
}

#[test]
fn frame_line_pads_to_width() {
    let line = render_frame_line(Some("Sushi"), 0.5, 30);
    assert_eq!(line.width(), 30);
    assert!(line.contains(" 50%"));
    assert!(line.contains("Sushi"));
}

#[test]
fn frame_line_marks_completion() {
    let line = render_frame_line(None, 1.0, 0);
    assert!(line.starts_with('●'));
    assert!(line.contains("100%"));
}

#[parameterized(
    wide_terminal = { 15, Some(200), 15 },
    narrow_terminal = { 15, Some(20), 8 },
    tiny_terminal = { 15, Some(10), MIN_DISC_ROWS },
    no_terminal = { 15, None, 15 },
    below_minimum = { 2, None, MIN_DISC_ROWS },
)]
fn fit_rows_respects_width(requested: usize, width: Option<u16>, expected: usize) {
    assert_eq!(fit_rows(requested, width), expected);
}

#[test]
fn winner_plain_text() {
    assert_eq!(render_winner("Tacos", None, true), "Winner: Tacos");
    assert_eq!(
        render_winner("Tacos", Some(Hsl::new(10.0, 0.5, 0.5)), false),
        "Winner: Tacos"
    );
}

#[test]
fn visible_width_skips_escapes() {
    let prefix = format!("{}██{} 1. ", escape::fg(1, 2, 3), escape::RESET);
    assert_eq!(visible_width(&prefix), 6);
}
