// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive session over stdin.
//!
//! On a terminal, input is read while a spin animates, so options can change
//! mid-spin and a second spin trigger is ignored until the wheel settles.
//! Piped input is a script: each spin settles at once, before the next line
//! is read.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::output::print_warning;
use crate::time::Clock;
use crate::wheel::SpinRequest;

use super::core::{CommandError, Runtime};

const PLAY_HELP: &str = "\
Commands:
  <enter>, spin   spin the wheel
  add <label>     add an option
  shuffle         shuffle the options
  clear           remove every option
  list            list the options
  share           print a share link
  quit            leave";

/// What the loop does after a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum PlayStep {
    Continue,
    Quit,
}

impl Runtime {
    pub(super) async fn play<R, W>(&mut self, input: R, out: &mut W) -> Result<(), CommandError>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        let clock = self.clock.clone();
        let mut input_open = true;

        if self.output.animate {
            writeln!(out, "{}", PLAY_HELP)?;
        }

        loop {
            if self.wheel.is_spinning() {
                if !input_open {
                    clock.sleep(self.frame_interval).await;
                    self.play_frame(out)?;
                    continue;
                }
                tokio::select! {
                    biased;
                    _ = clock.sleep(self.frame_interval) => {
                        self.play_frame(out)?;
                    }
                    line = lines.next_line() => match line? {
                        Some(line) => {
                            if self.play_line(&line, out)? == PlayStep::Quit {
                                return Ok(());
                            }
                        }
                        None => input_open = false,
                    }
                }
                continue;
            }

            if !input_open {
                return Ok(());
            }
            if self.output.animate {
                write!(out, "> ")?;
                out.flush()?;
            }
            match lines.next_line().await? {
                Some(line) => {
                    if self.play_line(&line, out)? == PlayStep::Quit {
                        return Ok(());
                    }
                }
                None => return Ok(()),
            }
        }
    }

    fn play_frame<W: Write>(&mut self, out: &mut W) -> Result<(), CommandError> {
        if let Some(outcome) = self.frame(out)? {
            self.finish_spin(outcome, out)?;
        }
        Ok(())
    }

    /// Handle one input line.
    pub(super) fn play_line<W: Write>(
        &mut self,
        line: &str,
        out: &mut W,
    ) -> Result<PlayStep, CommandError> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

        match verb {
            "" | "spin" => {
                // A trigger while spinning is ignored
                if !self.wheel.is_spinning() {
                    let now = self.clock.now_millis();
                    let request = self.request_spin(now);
                    if let SpinRequest::Started { duration_ms, .. } = request {
                        if !self.output.animate {
                            writeln!(out, "Spinning...")?;
                            let end_ms = now.saturating_add(duration_ms);
                            if let Some(outcome) = self.settle_at(end_ms) {
                                self.finish_spin(outcome, out)?;
                            }
                        }
                    }
                }
            }
            "add" => {
                if rest.is_empty() {
                    print_warning("Usage: add <label>");
                } else {
                    self.add(&[rest.to_string()]);
                }
            }
            "shuffle" => {
                self.wheel.shuffle();
                self.persist(&self.wheel.text(), true);
            }
            "clear" => {
                self.wheel.clear();
                self.persist(&self.wheel.text(), true);
            }
            "list" => self.list(out)?,
            "share" => self.share(None, false, out)?,
            "help" | "?" => writeln!(out, "{}", PLAY_HELP)?,
            "quit" | "exit" | "q" => return Ok(PlayStep::Quit),
            other => print_warning(format_args!("Unknown command: {} (try `help`)", other)),
        }
        Ok(PlayStep::Continue)
    }
}

#[cfg(test)]
#[path = "play_tests.rs"]
mod tests;
