// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spin scheduling.
//!
//! A spin is an explicit two-state machine. `begin` moves `Idle` to
//! `Spinning` and fixes everything about the spin up front: winner, target
//! rotation and duration. `advance` is fed timestamps by whatever drives
//! frames (a timer, a render loop, a test) and reports the eased rotation
//! until the duration has elapsed, at which point the scheduler returns to
//! `Idle` and hands back the finished session.

use std::f64::consts::{PI, TAU};

use super::slice_arc;

/// Cubic ease-out: fast start, velocity decays to zero at `t = 1`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Wrap an angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Angle of the middle of slice `index` before rotation is applied.
pub fn slice_mid_angle(index: usize, count: usize) -> f64 {
    let arc = slice_arc(count);
    index as f64 * arc + arc / 2.0
}

/// Timing and geometry of spins.
#[derive(Clone, Debug, PartialEq)]
pub struct SpinConfig {
    /// Whole turns every spin makes at least
    pub min_turns: u32,
    /// Up to this many additional whole turns are drawn at random
    pub extra_turns: u32,
    pub min_duration_ms: u64,
    pub max_duration_ms: u64,
    /// Screen angle of the pointer; the winning slice's midpoint settles here
    pub pointer_angle: f64,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            min_turns: 4,
            extra_turns: 2,
            min_duration_ms: 3200,
            max_duration_ms: 4700,
            pointer_angle: 3.0 * PI / 2.0,
        }
    }
}

/// The random choices behind one spin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpinPlan {
    pub winner: usize,
    pub turns: u32,
    pub duration_ms: u64,
}

impl SpinPlan {
    /// Draw a plan uniformly: winner over `[0, count)`, turns and duration
    /// over the configured inclusive ranges.
    ///
    /// `count` must be non-zero.
    pub fn draw(rng: &mut fastrand::Rng, count: usize, config: &SpinConfig) -> Self {
        let max_turns = config.min_turns.saturating_add(config.extra_turns);
        let max_duration = config.max_duration_ms.max(config.min_duration_ms);
        Self {
            winner: rng.usize(..count.max(1)),
            turns: rng.u32(config.min_turns..=max_turns),
            duration_ms: rng.u64(config.min_duration_ms..=max_duration),
        }
    }
}

/// One in-flight spin.
#[derive(Clone, Debug, PartialEq)]
pub struct SpinSession {
    pub started_at: u64,
    pub duration_ms: u64,
    pub start_angle: f64,
    /// Total rotation added over the spin
    pub delta: f64,
    pub winner: usize,
    /// Winner's label when the spin started
    pub winner_label: String,
    /// Candidate count when the spin started
    pub candidate_count: usize,
}

impl SpinSession {
    /// Unnormalized rotation once the spin has settled.
    pub fn target_angle(&self) -> f64 {
        self.start_angle + self.delta
    }

    /// Elapsed fraction of the spin in `[0, 1]`.
    pub fn progress(&self, now: u64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at) as f64;
        (elapsed / self.duration_ms as f64).clamp(0.0, 1.0)
    }

    /// Eased rotation at `now`.
    pub fn angle_at(&self, now: u64) -> f64 {
        self.start_angle + self.delta * ease_out_cubic(self.progress(now))
    }
}

/// Result of feeding a timestamp to the scheduler.
#[derive(Clone, Debug, PartialEq)]
pub enum Advance {
    /// No spin in flight
    Idle,
    /// Mid-spin rotation
    Moving { angle: f64, progress: f64 },
    /// The spin reached `t = 1`; the scheduler is idle again
    Finished(SpinSession),
}

#[derive(Clone, Debug, Default, PartialEq)]
enum SpinPhase {
    #[default]
    Idle,
    Spinning(SpinSession),
}

/// Holds at most one spin session.
#[derive(Clone, Debug, Default)]
pub struct SpinScheduler {
    phase: SpinPhase,
}

impl SpinScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, SpinPhase::Spinning(_))
    }

    pub fn session(&self) -> Option<&SpinSession> {
        match &self.phase {
            SpinPhase::Spinning(session) => Some(session),
            SpinPhase::Idle => None,
        }
    }

    /// Start a spin from `start_angle` landing `plan.winner` under the pointer.
    ///
    /// Returns `None` and leaves the running session untouched if a spin is
    /// already in flight.
    pub fn begin(
        &mut self,
        plan: &SpinPlan,
        winner_label: String,
        candidate_count: usize,
        start_angle: f64,
        now: u64,
        config: &SpinConfig,
    ) -> Option<&SpinSession> {
        if self.is_spinning() {
            return None;
        }
        let mid = slice_mid_angle(plan.winner, candidate_count);
        let alignment = normalize_angle(config.pointer_angle - mid - start_angle);
        let delta = plan.turns as f64 * TAU + alignment;

        self.phase = SpinPhase::Spinning(SpinSession {
            started_at: now,
            duration_ms: plan.duration_ms,
            start_angle,
            delta,
            winner: plan.winner,
            winner_label,
            candidate_count,
        });
        self.session()
    }

    /// Feed the current time.
    pub fn advance(&mut self, now: u64) -> Advance {
        let SpinPhase::Spinning(session) = &self.phase else {
            return Advance::Idle;
        };
        let progress = session.progress(now);
        if progress < 1.0 {
            return Advance::Moving {
                angle: session.angle_at(now),
                progress,
            };
        }
        match std::mem::take(&mut self.phase) {
            SpinPhase::Spinning(session) => Advance::Finished(session),
            SpinPhase::Idle => Advance::Idle,
        }
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
