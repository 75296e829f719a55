// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The selection wheel: candidates, rotation and the spin lifecycle.
//!
//! [`Wheel`] owns all mutable wheel state. Callers drive spins by calling
//! [`Wheel::request_spin`] once and then [`Wheel::tick`] with increasing
//! timestamps until it returns [`Tick::Settled`]. Persistence is left to the
//! caller: a settled spin that pruned its winner hands back the option text
//! to save.

use super::layout::{layout_wheel, ColorMode, LayoutConfig, TextMeasure, WheelLayout};
use super::options::{parse_options, serialize_options, Candidate, CandidateSequence};
use super::scheduler::{normalize_angle, Advance, SpinConfig, SpinPlan, SpinScheduler, SpinSession};
use super::share::encode_share_token;
use super::slice_arc;

/// Fewest candidates a spin accepts. A single-candidate wheel has only one
/// possible outcome, so spinning it is refused rather than animated.
pub const MIN_SPIN_CANDIDATES: usize = 2;

/// User-facing toggles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WheelSettings {
    /// Remove each winner once its spin settles
    pub no_repeats: bool,
    /// Spread slice hues evenly instead of stepping by the golden angle
    pub equalize_colors: bool,
}

/// Response to a spin request.
#[derive(Clone, Debug, PartialEq)]
pub enum SpinRequest {
    Started {
        winner: usize,
        duration_ms: u64,
        target_angle: f64,
    },
    /// A spin is already in flight; it was left untouched
    AlreadySpinning,
    /// Fewer than [`MIN_SPIN_CANDIDATES`] candidates
    TooFewCandidates,
    /// An injected plan named a winner outside the candidate range
    InvalidPlan,
}

impl SpinRequest {
    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started { .. })
    }
}

/// A settled spin.
#[derive(Clone, Debug, PartialEq)]
pub struct SpinOutcome {
    pub index: usize,
    pub label: String,
    /// Candidate count when the spin started
    pub candidate_count: usize,
    /// Whether the winner was removed from the wheel
    pub pruned: bool,
    /// Final rotation, normalized into `[0, 2π)`
    pub rotation: f64,
    /// Option text to persist when the candidate list changed
    pub persist_text: Option<String>,
}

/// Result of a frame tick.
#[derive(Clone, Debug, PartialEq)]
pub enum Tick {
    Idle,
    Spinning { angle: f64, progress: f64 },
    Settled(SpinOutcome),
}

/// Selection wheel state.
#[derive(Debug)]
pub struct Wheel {
    candidates: CandidateSequence,
    rotation: f64,
    scheduler: SpinScheduler,
    settings: WheelSettings,
    spin_config: SpinConfig,
    layout_config: LayoutConfig,
    rng: fastrand::Rng,
    last_winner: Option<String>,
}

impl Wheel {
    pub fn new(
        spin_config: SpinConfig,
        layout_config: LayoutConfig,
        settings: WheelSettings,
    ) -> Self {
        Self {
            candidates: Vec::new(),
            rotation: 0.0,
            scheduler: SpinScheduler::new(),
            settings,
            spin_config,
            layout_config,
            rng: fastrand::Rng::new(),
            last_winner: None,
        }
    }

    /// Use a fixed seed for winner, turn, duration and shuffle draws.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = fastrand::Rng::with_seed(seed);
        self
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn labels(&self) -> Vec<&str> {
        self.candidates.iter().map(Candidate::label).collect()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Current rotation in radians. Unbounded mid-spin, normalized once settled.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn settings(&self) -> WheelSettings {
        self.settings
    }

    pub fn set_no_repeats(&mut self, enabled: bool) {
        self.settings.no_repeats = enabled;
    }

    pub fn set_equalize_colors(&mut self, enabled: bool) {
        self.settings.equalize_colors = enabled;
    }

    pub fn spin_config(&self) -> &SpinConfig {
        &self.spin_config
    }

    pub fn layout_config(&self) -> &LayoutConfig {
        &self.layout_config
    }

    pub fn is_spinning(&self) -> bool {
        self.scheduler.is_spinning()
    }

    pub fn session(&self) -> Option<&SpinSession> {
        self.scheduler.session()
    }

    /// Label of the most recently settled spin.
    pub fn last_winner(&self) -> Option<&str> {
        self.last_winner.as_deref()
    }

    /// Option text for the current candidates.
    pub fn text(&self) -> String {
        serialize_options(&self.candidates)
    }

    /// Replace the candidates by parsing `text`.
    pub fn set_text(&mut self, text: &str) {
        self.replace_all(parse_options(text));
    }

    /// Replace every candidate. Rotation is kept.
    pub fn replace_all(&mut self, candidates: CandidateSequence) {
        self.candidates = candidates;
    }

    /// Append one label; blank labels are ignored. Returns whether it was added.
    pub fn push(&mut self, label: &str) -> bool {
        match Candidate::new(label) {
            Some(candidate) => {
                self.candidates.push(candidate);
                true
            }
            None => false,
        }
    }

    /// Remove the candidate at `index`, shifting later candidates down by one.
    pub fn remove_at(&mut self, index: usize) -> Option<Candidate> {
        if index < self.candidates.len() {
            Some(self.candidates.remove(index))
        } else {
            None
        }
    }

    /// Uniform random permutation (Fisher–Yates).
    pub fn shuffle(&mut self) {
        self.rng.shuffle(&mut self.candidates);
    }

    pub fn clear(&mut self) {
        self.candidates.clear();
    }

    /// Start a spin with randomly drawn winner, turns and duration.
    pub fn request_spin(&mut self, now: u64) -> SpinRequest {
        if let Some(rejection) = self.rejection() {
            return rejection;
        }
        let plan = SpinPlan::draw(&mut self.rng, self.candidates.len(), &self.spin_config);
        self.request_spin_with(plan, now)
    }

    /// Start a spin with a predetermined plan.
    pub fn request_spin_with(&mut self, plan: SpinPlan, now: u64) -> SpinRequest {
        if let Some(rejection) = self.rejection() {
            return rejection;
        }
        let Some(candidate) = self.candidates.get(plan.winner) else {
            return SpinRequest::InvalidPlan;
        };
        let label = candidate.label().to_string();
        match self.scheduler.begin(
            &plan,
            label,
            self.candidates.len(),
            self.rotation,
            now,
            &self.spin_config,
        ) {
            Some(session) => SpinRequest::Started {
                winner: session.winner,
                duration_ms: session.duration_ms,
                target_angle: session.target_angle(),
            },
            None => SpinRequest::AlreadySpinning,
        }
    }

    fn rejection(&self) -> Option<SpinRequest> {
        if self.scheduler.is_spinning() {
            Some(SpinRequest::AlreadySpinning)
        } else if self.candidates.len() < MIN_SPIN_CANDIDATES {
            Some(SpinRequest::TooFewCandidates)
        } else {
            None
        }
    }

    /// Advance the animation to `now`.
    pub fn tick(&mut self, now: u64) -> Tick {
        match self.scheduler.advance(now) {
            Advance::Idle => Tick::Idle,
            Advance::Moving { angle, progress } => {
                self.rotation = angle;
                Tick::Spinning { angle, progress }
            }
            Advance::Finished(session) => Tick::Settled(self.settle(session)),
        }
    }

    fn settle(&mut self, session: SpinSession) -> SpinOutcome {
        self.rotation = normalize_angle(session.target_angle());
        self.last_winner = Some(session.winner_label.clone());

        // The list may have been edited mid-spin; only prune the slot if it
        // still holds the winner.
        let still_there = self
            .candidates
            .get(session.winner)
            .is_some_and(|c| c.label() == session.winner_label);
        let pruned = self.settings.no_repeats && still_there;
        if pruned {
            self.candidates.remove(session.winner);
        }

        SpinOutcome {
            index: session.winner,
            label: session.winner_label,
            candidate_count: session.candidate_count,
            pruned,
            rotation: self.rotation,
            persist_text: pruned.then(|| self.text()),
        }
    }

    /// Index of the candidate currently under the pointer.
    pub fn index_at_pointer(&self) -> Option<usize> {
        if self.candidates.is_empty() {
            return None;
        }
        let arc = slice_arc(self.candidates.len());
        let relative = normalize_angle(self.spin_config.pointer_angle - self.rotation);
        let index = (relative / arc).floor() as usize;
        Some(index.min(self.candidates.len() - 1))
    }

    /// Candidate currently under the pointer.
    pub fn candidate_at_pointer(&self) -> Option<&Candidate> {
        self.index_at_pointer().and_then(|i| self.candidates.get(i))
    }

    /// Drawable description at the current rotation.
    pub fn layout(&self, measure: &impl TextMeasure) -> WheelLayout {
        let mut config = self.layout_config.clone();
        if self.settings.equalize_colors {
            config.color_mode = ColorMode::Equalized;
        }
        layout_wheel(&self.candidates, self.rotation, &config, measure)
    }

    /// Shareable token for the current option text.
    pub fn share_token(&self) -> String {
        encode_share_token(&self.text())
    }
}

impl Default for Wheel {
    fn default() -> Self {
        Self::new(
            SpinConfig::default(),
            LayoutConfig::default(),
            WheelSettings::default(),
        )
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
