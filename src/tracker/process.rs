// file: src/tracker/process.rs
// version: 1.0.0
// guid: 64ebe929-a538-4195-b9f6-429a427fb2aa

//! Tracker backed by the real `cmdtrack` binary

use super::{Tracker, TrackerSettings};
use crate::error::{BackfillError, Result};
use crate::history::HistoryEntry;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Runs the tracker binary once per entry, inheriting stdout and stderr
pub struct ProcessTracker {
    settings: TrackerSettings,
    dry_run: bool,
}

impl ProcessTracker {
    /// Create a new process tracker
    pub fn new(settings: TrackerSettings) -> Self {
        Self {
            settings,
            dry_run: false,
        }
    }

    /// Print invocations instead of running them
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn settings(&self) -> &TrackerSettings {
        &self.settings
    }

    /// Make sure the tracker program can be found before any input is read
    pub fn preflight(&self) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }

        let path = which::which(&self.settings.program)
            .map_err(|_| BackfillError::TrackerNotFound(self.settings.program.clone()))?;
        debug!("Using tracker at {}", path.display());
        Ok(())
    }

    async fn run(&self, entry: &HistoryEntry, args: Vec<String>) -> Result<()> {
        let os_args = self.settings.build_os_args(entry);
        let status = Command::new(&os_args[0])
            .args(&os_args[1..])
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await;

        let status = match status {
            Ok(status) => status,
            Err(e) => {
                return Err(BackfillError::TrackerSpawn {
                    args,
                    reason: e.to_string(),
                })
            }
        };

        if !status.success() {
            return Err(BackfillError::TrackerFailed {
                args,
                code: status.code(),
            });
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl Tracker for ProcessTracker {
    async fn track(&mut self, entry: &HistoryEntry) -> Result<()> {
        let args = self.settings.build_args(entry);

        if self.dry_run {
            println!("DRY RUN: Would execute: {:?}", args);
            return Ok(());
        }

        debug!("Executing tracker: {:?}", args);
        self.run(entry, args).await?;
        debug!("Tracked entry {}", entry.ordinal);
        Ok(())
    }
}
