// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Randomized selection wheel
#[derive(Parser, Clone, Debug)]
#[command(
    name = "spinwheel",
    version,
    about = "Spin a wheel to pick one of your options"
)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// File holding the option text
    #[arg(long, global = true, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// JSONL spin history file
    #[arg(long, global = true, value_name = "FILE")]
    pub history: Option<PathBuf>,

    /// Suppress acknowledgements such as "Saved"
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable ANSI colour
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The requested command; `show` when none was given.
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Show(ShowArgs::default()))
    }
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// List the options in wheel order
    List,

    /// Append options
    Add {
        /// Labels to append, one option each
        #[arg(required = true, value_name = "LABEL")]
        labels: Vec<String>,
    },

    /// Replace every option with text from a file (or stdin), one per line
    Set {
        /// File to read; stdin when omitted or "-"
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Remove every option
    Clear,

    /// Randomly reorder the options
    Shuffle {
        /// Seed for a reproducible order
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Spin the wheel once and print the winner
    Spin(SpinArgs),

    /// Draw the wheel
    Show(ShowArgs),

    /// Print a link that reproduces the current options
    Share {
        /// Base URL the token is appended to
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        /// Copy the link to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Load options from a shared link, fragment or token
    Open {
        #[arg(value_name = "LINK")]
        link: String,
    },

    /// Show recent spins
    History {
        /// Number of spins to show
        #[arg(short = 'n', long = "count", default_value_t = 10)]
        count: usize,
    },

    /// Interactive session reading commands from stdin
    Play {
        /// Remove each winner after its spin
        #[arg(long)]
        no_repeats: bool,

        /// Seed for reproducible spins
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Command {
    /// Seed requested for random draws, if any.
    pub fn seed(&self) -> Option<u64> {
        match self {
            Self::Shuffle { seed } | Self::Play { seed, .. } => *seed,
            Self::Spin(args) => args.seed,
            _ => None,
        }
    }

    /// Whether the command forces no-repeat mode on.
    pub fn no_repeats(&self) -> bool {
        match self {
            Self::Spin(args) => args.no_repeats,
            Self::Play { no_repeats, .. } => *no_repeats,
            _ => false,
        }
    }

    /// Whether the command reads or appends spin history.
    pub fn uses_history(&self) -> bool {
        matches!(
            self,
            Self::Spin(_) | Self::Play { .. } | Self::History { .. }
        )
    }
}

#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct SpinArgs {
    /// Remove the winner once the spin settles
    #[arg(long)]
    pub no_repeats: bool,

    /// Seed for a reproducible spin
    #[arg(long)]
    pub seed: Option<u64>,

    /// Settle immediately without drawing frames
    #[arg(long)]
    pub no_animate: bool,
}

#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct ShowArgs {
    /// Print the layout description as JSON
    #[arg(long)]
    pub json: bool,

    /// Spread slice hues evenly
    #[arg(long)]
    pub equalize_colors: bool,

    /// Disc diameter in rows
    #[arg(long, value_parser = clap::value_parser!(u16).range(5..=99))]
    pub size: Option<u16>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
