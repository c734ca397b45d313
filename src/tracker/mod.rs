// file: src/tracker/mod.rs
// version: 1.0.0
// guid: d4859bba-c3a8-4b83-95dd-fdfd26074fb8

//! Invocation of the external command tracker

pub mod invocation;
pub mod process;

pub use invocation::{TrackerSettings, DEFAULT_TRACKER_PROGRAM, DEFAULT_WORKDIR};
pub use process::ProcessTracker;

use crate::{history::HistoryEntry, Result};

/// Records a history entry with the tracking service
#[async_trait::async_trait]
pub trait Tracker: Send {
    /// Track one entry, returning once the tracker has finished
    async fn track(&mut self, entry: &HistoryEntry) -> Result<()>;
}
