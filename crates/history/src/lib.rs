// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spin history recording.
//!
//! Every settled spin can be recorded into a [`SpinLog`], which keeps the
//! entries in memory and optionally appends them to a JSONL file so later
//! runs can list recent winners.

mod duration_serde;
mod entry;
mod log;
mod system_time_serde;

pub use entry::SpinEntry;
pub use log::{HistoryError, SpinLog};
