// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Selection wheel
//!
//! Keeps a list of options, lays them out as equal slices of a coloured
//! wheel and spins it to pick one at random. Option lists persist locally
//! and travel as compact share links.
//!
#![doc = include_str!("../README.md")]

pub mod cli;
pub mod config;
pub mod env;
pub mod output;
pub mod render;
pub mod runtime;
pub mod store;
pub mod time;
pub mod wheel;
