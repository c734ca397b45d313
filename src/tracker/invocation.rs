// file: src/tracker/invocation.rs
// version: 1.0.0
// guid: 7d7486f5-b4f5-4b63-ae72-f09d035455fd

//! Argument list construction for `cmdtrack track`

use crate::history::HistoryEntry;
use std::ffi::OsString;

/// Position of the command text in the argument list
const COMMAND_ARG_INDEX: usize = 3;

/// Tracker binary looked up on PATH
pub const DEFAULT_TRACKER_PROGRAM: &str = "cmdtrack";

/// Working directory recorded for backfilled commands
pub const DEFAULT_WORKDIR: &str = "~";

/// Fixed parts of every tracker invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerSettings {
    pub program: String,
    pub workdir: String,
    pub url: Option<String>,
    pub hostname: Option<String>,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            program: DEFAULT_TRACKER_PROGRAM.to_string(),
            workdir: DEFAULT_WORKDIR.to_string(),
            url: None,
            hostname: None,
        }
    }
}

impl TrackerSettings {
    /// Full argument list for tracking `entry`, program name first
    pub fn build_args(&self, entry: &HistoryEntry) -> Vec<String> {
        let mut args = vec![
            self.program.clone(),
            "track".to_string(),
            "--command".to_string(),
            entry.command.clone(),
            "--timestamp".to_string(),
            entry.timestamp.clone(),
            "--workdir".to_string(),
            self.workdir.clone(),
        ];

        if let Some(ref url) = self.url {
            args.push("--url".to_string());
            args.push(url.clone());
        }

        if let Some(ref hostname) = self.hostname {
            args.push("--hostname".to_string());
            args.push(hostname.clone());
        }

        args
    }

    /// Same list as [`build_args`](Self::build_args), with the command text
    /// as raw bytes for handing to the process
    pub fn build_os_args(&self, entry: &HistoryEntry) -> Vec<OsString> {
        let mut args: Vec<OsString> = self
            .build_args(entry)
            .into_iter()
            .map(OsString::from)
            .collect();
        args[COMMAND_ARG_INDEX] = entry.command_os();
        args
    }
}
