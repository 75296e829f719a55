// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Local persistence of the option text.
//!
//! The persisted record is the raw option text, exactly as shown in the
//! option editor, under a single key (one file). There is no structured
//! format to migrate.

use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::env;

/// Directory under `$HOME` holding spinwheel state
pub const STATE_DIR_NAME: &str = ".spinwheel";

/// File name of the option record
pub const OPTIONS_FILE_NAME: &str = "options.txt";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Storage for the option text.
pub trait OptionStore: Send + Sync {
    /// Saved option text, or `None` if nothing was ever saved
    fn load(&self) -> Result<Option<String>, StoreError>;

    fn save(&self, text: &str) -> Result<(), StoreError>;
}

/// Option text kept in a single file.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the store location.
    ///
    /// # Priority
    ///
    /// 1. Explicit path (from `--store`)
    /// 2. `SPINWHEEL_STORE`
    /// 3. `$HOME/.spinwheel/options.txt`
    /// 4. `.spinwheel/options.txt` in the working directory
    pub fn resolve(explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return Self::new(path);
        }
        if let Some(path) = env::store_path() {
            return Self::new(path);
        }
        let base = env::home().unwrap_or_default();
        Self::new(base.join(STATE_DIR_NAME).join(OPTIONS_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl OptionStore for FileStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn save(&self, text: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }
        std::fs::write(&self.path, text).map_err(|e| self.io_error(e))
    }
}

/// In-memory store. Clones share the same record.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryRecord>>,
}

#[derive(Debug, Default)]
struct MemoryRecord {
    text: Option<String>,
    saves: usize,
    failing: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let store = Self::new();
        store.inner.lock().text = Some(text.into());
        store
    }

    /// Make every load and save fail, as with disabled storage.
    pub fn set_failing(&self, failing: bool) {
        self.inner.lock().failing = failing;
    }

    pub fn text(&self) -> Option<String> {
        self.inner.lock().text.clone()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.inner.lock().saves
    }
}

impl OptionStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        let record = self.inner.lock();
        if record.failing {
            return Err(StoreError::Unavailable("memory store disabled".to_string()));
        }
        Ok(record.text.clone())
    }

    fn save(&self, text: &str) -> Result<(), StoreError> {
        let mut record = self.inner.lock();
        if record.failing {
            return Err(StoreError::Unavailable("memory store disabled".to_string()));
        }
        record.text = Some(text.to_string());
        record.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
