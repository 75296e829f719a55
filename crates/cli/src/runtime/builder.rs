// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! RuntimeBuilder for constructing Runtime with fluent API.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Duration;

use spinwheel_history::{HistoryError, SpinLog};

use crate::cli::{Cli, Command};
use crate::config::{ConfigError, WheelConfig};
use crate::env;
use crate::output::print_warning;
use crate::render::terminal_width;
use crate::store::{FileStore, OptionStore, STATE_DIR_NAME};
use crate::time::ClockHandle;
use crate::wheel::{MonospaceMeasure, Wheel};

use super::core::{OutputOptions, Runtime};

/// File name of the spin history under the state directory
pub const HISTORY_FILE_NAME: &str = "history.jsonl";

/// Builder for constructing Runtime instances.
///
/// Anything not injected is resolved from the CLI and environment:
/// ```ignore
/// let runtime = RuntimeBuilder::new(cli)
///     .with_store(MemoryStore::new())
///     .with_clock(ClockHandle::fake_at(0))
///     .build()?;
/// ```
pub struct RuntimeBuilder {
    cli: Cli,
    config: Option<WheelConfig>,
    store: Option<Box<dyn OptionStore>>,
    history: Option<SpinLog>,
    clock: Option<ClockHandle>,
    terminal: Option<bool>,
}

impl RuntimeBuilder {
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            config: None,
            store: None,
            history: None,
            clock: None,
            terminal: None,
        }
    }

    /// Use `config` instead of loading a file.
    pub fn with_config(mut self, config: WheelConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_store(mut self, store: impl OptionStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    pub fn with_history(mut self, log: SpinLog) -> Self {
        self.history = Some(log);
        self
    }

    pub fn with_clock(mut self, clock: ClockHandle) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Override terminal detection for stdout.
    pub fn with_terminal(mut self, is_terminal: bool) -> Self {
        self.terminal = Some(is_terminal);
        self
    }

    /// Build the Runtime.
    pub fn build(self) -> Result<Runtime, RuntimeBuildError> {
        let command = self.cli.command();

        let config = match self.config {
            Some(config) => config,
            None => {
                let path = self.cli.config.clone().or_else(env::config_path);
                WheelConfig::load_or_default(path.as_deref())?
            }
        };

        let mut settings = config.settings();
        settings.no_repeats |= command.no_repeats();
        let mut wheel = Wheel::new(
            config.spin.to_spin_config(),
            config.layout.to_layout_config(),
            settings,
        );
        if let Some(seed) = command.seed() {
            wheel = wheel.with_seed(seed);
        }

        let store: Box<dyn OptionStore> = match self.store {
            Some(store) => store,
            None => Box::new(FileStore::resolve(self.cli.store.as_deref())),
        };
        match store.load() {
            Ok(Some(text)) => wheel.set_text(&text),
            Ok(None) => wheel.set_text(&config.sample_text()),
            Err(e) => {
                print_warning(format_args!("Could not load saved options: {}", e));
                wheel.set_text(&config.sample_text());
            }
        }

        let history = match self.history {
            Some(log) => Some(log),
            None => open_history(&command, self.cli.history.as_deref())?,
        };

        let is_terminal = self
            .terminal
            .unwrap_or_else(|| std::io::stdout().is_terminal());
        let output = OutputOptions {
            quiet: self.cli.quiet,
            color: is_terminal && !self.cli.no_color,
            animate: is_terminal,
            width: if is_terminal { terminal_width() } else { None },
        };

        let frame_ms = env::frame_interval_ms()
            .filter(|ms| *ms > 0)
            .unwrap_or(config.spin.frame_interval_ms);

        Ok(Runtime {
            command,
            measure: MonospaceMeasure::new(config.layout.glyph_width_px),
            config,
            wheel,
            store,
            history,
            clock: self.clock.unwrap_or_default(),
            frame_interval: Duration::from_millis(frame_ms),
            output,
        })
    }
}

/// Open the spin history `command` needs, if any.
///
/// `history` only reads the file, so a missing file lists nothing and a
/// corrupt one is an error. Spinning commands append to the file; when it
/// cannot be opened they warn and record into memory instead.
fn open_history(
    command: &Command,
    explicit: Option<&Path>,
) -> Result<Option<SpinLog>, HistoryError> {
    let path = history_path(explicit);
    match command {
        Command::History { .. } if path.exists() => {
            Ok(Some(SpinLog::with_entries(SpinLog::read(&path)?)))
        }
        Command::History { .. } => Ok(Some(SpinLog::new())),
        _ if command.uses_history() => match SpinLog::with_file(&path) {
            Ok(log) => Ok(Some(log)),
            Err(e) => {
                print_warning(format_args!("Not recording spins: {}", e));
                Ok(Some(SpinLog::new()))
            }
        },
        _ => Ok(None),
    }
}

/// Resolve the history file.
///
/// # Priority
///
/// 1. Explicit path (from `--history`)
/// 2. `SPINWHEEL_HISTORY`
/// 3. `$HOME/.spinwheel/history.jsonl`
pub fn history_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(path) = env::history_path() {
        return path;
    }
    env::home()
        .unwrap_or_default()
        .join(STATE_DIR_NAME)
        .join(HISTORY_FILE_NAME)
}

/// Errors that can occur when building a Runtime.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeBuildError {
    #[error("Failed to load config: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to open spin history: {0}")]
    History(#[from] HistoryError),
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
