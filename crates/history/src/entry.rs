// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recorded spin data.

use crate::{duration_serde, system_time_serde};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

/// One settled spin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpinEntry {
    /// Sequence number within the log
    pub seq: u64,

    /// Wall-clock time the spin settled
    #[serde(rename = "timestamp_ms", with = "system_time_serde")]
    pub timestamp: SystemTime,

    /// Time since the log was opened
    #[serde(rename = "elapsed_ms", with = "duration_serde")]
    pub elapsed: Duration,

    /// Winning label
    pub winner: String,

    /// Position of the winner at the time of the spin
    pub index: usize,

    /// Number of candidates on the wheel when the spin started
    pub candidate_count: usize,

    /// Whether the winner was removed afterwards
    #[serde(default)]
    pub pruned: bool,
}
