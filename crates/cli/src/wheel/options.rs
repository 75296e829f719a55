// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Option text parsing and serialization.
//!
//! Option text is plain text with one candidate per line. There is no quoting
//! or escaping; surrounding whitespace is trimmed and blank lines are dropped.

use serde::{Deserialize, Serialize};

/// One selectable label on the wheel.
///
/// Identity is positional: two candidates with the same label are distinct
/// entries and both get a slice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Candidate {
    label: String,
}

impl Candidate {
    /// Build a candidate from a raw line.
    ///
    /// Returns `None` when the line is blank after trimming.
    pub fn new(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.is_empty() {
            None
        } else {
            Some(Self {
                label: label.to_string(),
            })
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Ordered candidates; order decides angular position.
pub type CandidateSequence = Vec<Candidate>;

/// Parse option text into candidates, keeping the original order.
pub fn parse_options(text: &str) -> CandidateSequence {
    text.lines().filter_map(Candidate::new).collect()
}

/// Join candidate labels with line breaks.
pub fn serialize_options(candidates: &[Candidate]) -> String {
    candidates
        .iter()
        .map(Candidate::label)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
