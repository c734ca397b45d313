// file: src/history/mod.rs
// version: 1.0.0
// guid: 5a6df9ed-66a3-4515-9d4c-cca435906744

//! Shell history parsing
//!
//! Turns `fc -t %s -l` style listings into [`HistoryEntry`] records.

pub mod entry;
pub mod parser;

pub use entry::HistoryEntry;
pub use parser::HistoryParser;
