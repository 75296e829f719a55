// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spin log implementation.

use crate::entry::SpinEntry;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::{Instant, SystemTime};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt history line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Log of settled spins
pub struct SpinLog {
    start: Instant,
    entries: Arc<Mutex<Vec<SpinEntry>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl SpinLog {
    /// Create an in-memory log
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            entries: Arc::new(Mutex::new(Vec::new())),
            file_writer: None,
        }
    }

    /// Create an in-memory log holding `entries`, without a backing file.
    ///
    /// Used to list a history file read with [`SpinLog::read`].
    pub fn with_entries(entries: Vec<SpinEntry>) -> Self {
        Self {
            start: Instant::now(),
            entries: Arc::new(Mutex::new(entries)),
            file_writer: None,
        }
    }

    /// Create a log that also appends JSONL lines to `path`.
    ///
    /// Sequence numbers continue from the entries already in the file.
    pub fn with_file(path: &Path) -> Result<Self, HistoryError> {
        let existing = if path.exists() {
            Self::read(path)?
        } else {
            Vec::new()
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            start: Instant::now(),
            entries: Arc::new(Mutex::new(existing)),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Read every entry from a JSONL history file
    pub fn read(path: &Path) -> Result<Vec<SpinEntry>, HistoryError> {
        let reader = BufReader::new(File::open(path)?);
        let mut entries = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let entry = serde_json::from_str(&line)
                .map_err(|source| HistoryError::Parse {
                    line: i + 1,
                    source,
                })?;
            entries.push(entry);
        }
        Ok(entries)
    }

    /// Record a settled spin and return the stored entry
    pub fn record(
        &self,
        winner: impl Into<String>,
        index: usize,
        candidate_count: usize,
        pruned: bool,
    ) -> SpinEntry {
        let mut entries = self.entries.lock();
        let seq = entries.last().map_or(0, |e| e.seq + 1);
        let entry = SpinEntry {
            seq,
            timestamp: SystemTime::now(),
            elapsed: self.start.elapsed(),
            winner: winner.into(),
            index,
            candidate_count,
            pruned,
        };

        entries.push(entry.clone());

        // A history write failure never affects the spin itself
        if let Some(ref writer) = self.file_writer {
            let mut w = writer.lock();
            if let Ok(json) = serde_json::to_string(&entry) {
                let _ = writeln!(w, "{}", json);
                let _ = w.flush();
            }
        }
        entry
    }

    /// All recorded entries, oldest first
    pub fn entries(&self) -> Vec<SpinEntry> {
        self.entries.lock().clone()
    }

    /// The last `n` entries, oldest first
    pub fn last(&self, n: usize) -> Vec<SpinEntry> {
        let all = self.entries.lock();
        all.iter().rev().take(n).rev().cloned().collect()
    }

    /// Winning labels in the order they were drawn
    pub fn winners(&self) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .map(|e| e.winner.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Forget the in-memory entries. The backing file is left untouched.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Default for SpinLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SpinLog {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            entries: Arc::clone(&self.entries),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
        }
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
