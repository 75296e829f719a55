// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core Runtime struct for executing wheel commands.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use spinwheel_history::{HistoryError, SpinLog};
use tokio::io::{AsyncBufRead, AsyncReadExt};

use crate::cli::{Command, ShowArgs, SpinArgs};
use crate::config::WheelConfig;
use crate::output::{print_toast, print_warning};
use crate::render::{
    fit_rows, render_frame_line, render_wheel, render_winner, RenderOptions, DEFAULT_DISC_ROWS,
};
use crate::store::OptionStore;
use crate::time::{Clock, ClockHandle};
use crate::wheel::layout::slice_color;
use crate::wheel::{
    decode_location, parse_options, share_url, ColorMode, Hsl, MonospaceMeasure, SpinOutcome,
    SpinRequest, Tick, Wheel,
};

/// How command output is presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Suppress toasts
    pub quiet: bool,
    pub color: bool,
    /// Draw animation frames and the play prompt
    pub animate: bool,
    /// Terminal width in columns
    pub width: Option<u16>,
}

/// How long `share --copy` keeps ownership of the selection on Linux.
#[cfg(target_os = "linux")]
const CLIPBOARD_HOLD: Duration = Duration::from_secs(5);

/// Errors from executing a command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {path}: {source}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode layout: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read spin history: {0}")]
    History(#[from] HistoryError),
}

/// Executes one command against the wheel.
///
/// Owns the wheel, the option store and the spin history for the lifetime of
/// the command.
pub struct Runtime {
    pub(super) command: Command,
    pub(super) config: WheelConfig,
    pub(super) wheel: Wheel,
    pub(super) store: Box<dyn OptionStore>,
    pub(super) history: Option<SpinLog>,
    pub(super) clock: ClockHandle,
    pub(super) frame_interval: Duration,
    pub(super) measure: MonospaceMeasure,
    pub(super) output: OutputOptions,
}

impl Runtime {
    pub fn command(&self) -> &Command {
        &self.command
    }

    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn history(&self) -> Option<&SpinLog> {
        self.history.as_ref()
    }

    pub fn output(&self) -> OutputOptions {
        self.output
    }

    /// Execute the command. `input` backs `set` without a file and `play`.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<(), CommandError>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        match self.command.clone() {
            Command::List => self.list(out),
            Command::Add { labels } => {
                self.add(&labels);
                Ok(())
            }
            Command::Set { file } => self.set(file.as_deref(), input).await,
            Command::Clear => {
                self.wheel.clear();
                self.persist(&self.wheel.text(), true);
                Ok(())
            }
            Command::Shuffle { .. } => {
                self.wheel.shuffle();
                self.persist(&self.wheel.text(), true);
                Ok(())
            }
            Command::Spin(args) => self.spin(&args, out).await,
            Command::Show(args) => self.show(&args, out),
            Command::Share { base_url, copy } => self.share(base_url.as_deref(), copy, out),
            Command::Open { link } => {
                self.open(&link);
                Ok(())
            }
            Command::History { count } => self.print_history(count, out),
            Command::Play { .. } => self.play(input, out).await,
        }
    }

    pub(super) fn list<W: Write>(&self, out: &mut W) -> Result<(), CommandError> {
        if self.wheel.is_empty() {
            writeln!(out, "No options yet. Add some with `spinwheel add`.")?;
            return Ok(());
        }
        let width = self.wheel.len().to_string().len();
        for (i, label) in self.wheel.labels().iter().enumerate() {
            writeln!(out, "{:>width$}. {}", i + 1, label, width = width)?;
        }
        Ok(())
    }

    pub(super) fn add(&mut self, labels: &[String]) {
        let mut added = 0;
        for label in labels {
            // A label argument may itself hold several lines
            for line in label.lines() {
                if self.wheel.push(line) {
                    added += 1;
                }
            }
        }
        if added == 0 {
            print_warning("Nothing to add: every label was blank");
            return;
        }
        self.persist(&self.wheel.text(), true);
    }

    async fn set<R>(&mut self, file: Option<&Path>, mut input: R) -> Result<(), CommandError>
    where
        R: AsyncBufRead + Unpin,
    {
        let text = match file {
            Some(path) if path != Path::new("-") => {
                std::fs::read_to_string(path).map_err(|source| CommandError::ReadInput {
                    path: path.display().to_string(),
                    source,
                })?
            }
            _ => {
                let mut text = String::new();
                input
                    .read_to_string(&mut text)
                    .await
                    .map_err(|source| CommandError::ReadInput {
                        path: "stdin".to_string(),
                        source,
                    })?;
                text
            }
        };
        self.wheel.set_text(&text);
        // The raw text is the record, exactly as it was entered
        self.persist(&text, true);
        Ok(())
    }

    pub(super) fn open(&mut self, link: &str) {
        let text = decode_location(link);
        let count = parse_options(&text).len();
        if count == 0 {
            print_warning("Link has no options; keeping the current ones");
            return;
        }
        self.wheel.set_text(&text);
        self.persist(&self.wheel.text(), true);
        self.toast(format_args!("Loaded {} options", count));
    }

    async fn spin<W: Write>(&mut self, args: &SpinArgs, out: &mut W) -> Result<(), CommandError> {
        let now = self.clock.now_millis();
        let SpinRequest::Started { duration_ms, .. } = self.request_spin(now) else {
            return Ok(());
        };
        let outcome = if args.no_animate || !self.output.animate {
            self.settle_at(now.saturating_add(duration_ms))
        } else {
            self.animate(out).await?
        };
        if let Some(outcome) = outcome {
            self.finish_spin(outcome, out)?;
        }
        Ok(())
    }

    /// Request a spin, warning when the wheel cannot spin.
    pub(super) fn request_spin(&mut self, now: u64) -> SpinRequest {
        let request = self.wheel.request_spin(now);
        if request == SpinRequest::TooFewCandidates {
            print_warning("Add at least two options to spin");
        }
        request
    }

    /// Settle the current spin at `end_ms` without drawing frames.
    pub(super) fn settle_at(&mut self, end_ms: u64) -> Option<SpinOutcome> {
        match self.wheel.tick(end_ms) {
            Tick::Settled(outcome) => Some(outcome),
            Tick::Idle | Tick::Spinning { .. } => None,
        }
    }

    async fn animate<W: Write>(
        &mut self,
        out: &mut W,
    ) -> Result<Option<SpinOutcome>, CommandError> {
        let clock = self.clock.clone();
        loop {
            if let Some(outcome) = self.frame(out)? {
                return Ok(Some(outcome));
            }
            if !self.wheel.is_spinning() {
                return Ok(None);
            }
            clock.sleep(self.frame_interval).await;
        }
    }

    /// Advance the spin to the clock's current time, drawing a frame line.
    pub(super) fn frame<W: Write>(
        &mut self,
        out: &mut W,
    ) -> Result<Option<SpinOutcome>, CommandError> {
        let width = self.output.width.map_or(0, usize::from);
        match self.wheel.tick(self.clock.now_millis()) {
            Tick::Idle => Ok(None),
            Tick::Spinning { progress, .. } => {
                if self.output.animate {
                    let label = self.wheel.candidate_at_pointer().map(|c| c.label());
                    write!(out, "\r{}", render_frame_line(label, progress, width))?;
                    out.flush()?;
                }
                Ok(None)
            }
            Tick::Settled(outcome) => {
                if self.output.animate {
                    let line = render_frame_line(Some(outcome.label.as_str()), 1.0, width);
                    writeln!(out, "\r{}", line)?;
                }
                Ok(Some(outcome))
            }
        }
    }

    /// Announce the winner, persist any pruning and record the spin.
    pub(super) fn finish_spin<W: Write>(
        &mut self,
        outcome: SpinOutcome,
        out: &mut W,
    ) -> Result<(), CommandError> {
        let fill = self.winner_fill(&outcome);
        let winner = render_winner(&outcome.label, Some(fill), self.output.color);
        writeln!(out, "{}", winner)?;

        if let Some(text) = &outcome.persist_text {
            self.persist(text, false);
        }
        if let Some(history) = &self.history {
            history.record(
                outcome.label.clone(),
                outcome.index,
                outcome.candidate_count,
                outcome.pruned,
            );
        }
        Ok(())
    }

    fn winner_fill(&self, outcome: &SpinOutcome) -> Hsl {
        let layout = self.wheel.layout_config();
        let mode = if self.wheel.settings().equalize_colors {
            ColorMode::Equalized
        } else {
            layout.color_mode
        };
        slice_color(
            outcome.index,
            outcome.candidate_count,
            mode,
            layout.saturation,
            layout.lightness,
        )
    }

    fn show<W: Write>(&mut self, args: &ShowArgs, out: &mut W) -> Result<(), CommandError> {
        if args.equalize_colors {
            self.wheel.set_equalize_colors(true);
        }
        let layout = self.wheel.layout(&self.measure);
        if args.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&layout)?)?;
            return Ok(());
        }
        let requested = args.size.map_or(DEFAULT_DISC_ROWS, usize::from);
        let options = RenderOptions {
            rows: fit_rows(requested, self.output.width),
            color: self.output.color,
            pointer_angle: self.wheel.spin_config().pointer_angle,
        };
        write!(out, "{}", render_wheel(&layout, &options))?;
        Ok(())
    }

    pub(super) fn share<W: Write>(
        &self,
        base_url: Option<&str>,
        copy: bool,
        out: &mut W,
    ) -> Result<(), CommandError> {
        if self.wheel.is_empty() {
            print_warning("The wheel is empty; the link will open an empty wheel");
        }
        let base = base_url.unwrap_or(&self.config.share_base_url);
        let url = share_url(base, &self.wheel.text());
        writeln!(out, "{}", url)?;
        if copy {
            match copy_to_clipboard(url) {
                Ok(()) => self.toast("Link copied"),
                Err(e) => print_warning(format_args!("Clipboard unavailable: {}", e)),
            }
        }
        Ok(())
    }

    fn print_history<W: Write>(&self, count: usize, out: &mut W) -> Result<(), CommandError> {
        let entries = self
            .history
            .as_ref()
            .map(|log| log.last(count))
            .unwrap_or_default();
        if entries.is_empty() {
            writeln!(out, "No spins yet")?;
            return Ok(());
        }
        for entry in entries {
            let removed = if entry.pruned { ", removed" } else { "" };
            writeln!(
                out,
                "#{} {} (slot {} of {}{})",
                entry.seq + 1,
                entry.winner,
                entry.index + 1,
                entry.candidate_count,
                removed
            )?;
        }
        Ok(())
    }

    /// Save option text, never failing the command.
    pub(super) fn persist(&self, text: &str, notify: bool) {
        match self.store.save(text) {
            Ok(()) if notify => self.toast("Saved"),
            Ok(()) => {}
            Err(e) => print_warning(format_args!("Could not save options: {}", e)),
        }
    }

    pub(super) fn toast(&self, msg: impl std::fmt::Display) {
        if !self.output.quiet {
            print_toast(msg);
        }
    }
}

/// Put `text` on the system clipboard.
///
/// X11 and Wayland drop the selection when its owner exits, so on Linux the
/// copy blocks until a clipboard manager takes it over or the hold expires.
#[cfg(target_os = "linux")]
fn copy_to_clipboard(text: String) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    let deadline = std::time::Instant::now() + CLIPBOARD_HOLD;
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set().wait_until(deadline).text(text)?;
    Ok(())
}

#[cfg(not(target_os = "linux"))]
fn copy_to_clipboard(text: String) -> Result<(), arboard::Error> {
    arboard::Clipboard::new()?.set_text(text)
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
