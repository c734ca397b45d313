// file: src/cli/mod.rs
// version: 1.0.0
// guid: 1b647ce3-f626-4667-adc0-aba28a777ab3

//! Command line interface for the history backfill

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
