// file: src/logging/mod.rs
// version: 1.0.0
// guid: a314434f-c52a-41bc-8875-6892c2294743

//! Logging system for the history backfill

pub mod logger;

pub use logger::init_logger;
