// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Selection wheel engine.
//!
//! The engine is split the same way the wheel is used:
//!
//! - [`options`] parses and serializes the newline-separated option text.
//! - [`share`] turns option text into a URL-fragment token and back.
//! - [`layout`] computes slices, colours and label placement for drawing.
//! - [`scheduler`] drives a single spin from request to settled rotation.
//! - [`engine`] owns the candidates and rotation and routes every mutation.
//!
//! Nothing in here performs I/O; persistence and drawing are done by callers.

pub mod engine;
pub mod layout;
pub mod options;
pub mod scheduler;
pub mod share;

pub use engine::{SpinOutcome, SpinRequest, Tick, Wheel, WheelSettings};
pub use layout::{
    layout_wheel, ColorMode, Hsl, LabelLayout, LayoutConfig, MonospaceMeasure, SliceLayout,
    TextMeasure, WheelLayout,
};
pub use options::{parse_options, serialize_options, Candidate, CandidateSequence};
pub use scheduler::{
    ease_out_cubic, normalize_angle, SpinConfig, SpinPlan, SpinScheduler, SpinSession,
};
pub use share::{decode_location, decode_share_token, encode_share_token, share_url};

use std::f64::consts::TAU;

/// Angular size of one slice for `count` slices.
///
/// An empty wheel is drawn as a single placeholder slice, so zero counts as one.
pub fn slice_arc(count: usize) -> f64 {
    TAU / count.max(1) as f64
}
