//! Command-line interface for fluid type scales
//!
//! This crate provides the `fluidscale` binary. Argument definitions and
//! subcommands live here so they can be unit tested; `main.rs` only sets up
//! logging and dispatches.

pub mod cli;
pub mod commands;
mod output;
