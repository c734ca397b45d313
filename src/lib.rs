// file: src/lib.rs
// version: 1.0.0
// guid: 923c5c6a-3d9b-48dd-b286-5514c69daa58

//! # cmdtrack-backfill
//!
//! Replays shell history into cmdtrack. Each line of `fc -t %s -l` output is
//! parsed into a number, a timestamp and the command text, and handed to
//! `cmdtrack track` one entry at a time. The first tracker failure aborts
//! the run.

pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod input;
pub mod logging;
pub mod tracker;

pub use error::{BackfillError, Result};

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
