// file: src/history/entry.rs
// version: 1.0.0
// guid: 81e2346d-4e3a-4a48-b6f1-dbea241bde34

//! A single parsed history line

use chrono::{DateTime, Utc};
use std::ffi::OsString;
use std::fmt;
use std::io::{self, Write};

/// Marker `fc` appends to the number of an edited history entry
pub const MODIFIED_MARKER: char = '*';

/// One matched history line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Sequence number as printed, including any modified marker
    pub ordinal: String,
    /// Epoch seconds as printed
    pub timestamp: String,
    /// Remainder of the line, lossily decoded for display
    pub command: String,
    raw_command: Vec<u8>,
}

impl HistoryEntry {
    /// Create a new entry from its three captured fields
    pub fn new(
        ordinal: impl Into<String>,
        timestamp: impl Into<String>,
        command: impl Into<String>,
    ) -> Self {
        let command = command.into();
        Self {
            ordinal: ordinal.into(),
            timestamp: timestamp.into(),
            raw_command: command.clone().into_bytes(),
            command,
        }
    }

    /// Create an entry whose command text may not be valid UTF-8
    pub fn from_raw(
        ordinal: impl Into<String>,
        timestamp: impl Into<String>,
        raw_command: &[u8],
    ) -> Self {
        Self {
            ordinal: ordinal.into(),
            timestamp: timestamp.into(),
            command: String::from_utf8_lossy(raw_command).into_owned(),
            raw_command: raw_command.to_vec(),
        }
    }

    /// Command bytes exactly as read from the history
    pub fn raw_command(&self) -> &[u8] {
        &self.raw_command
    }

    /// Command as a process argument, bytes passed through untouched
    #[cfg(unix)]
    pub fn command_os(&self) -> OsString {
        use std::os::unix::ffi::OsStrExt;
        std::ffi::OsStr::from_bytes(&self.raw_command).to_os_string()
    }

    #[cfg(not(unix))]
    pub fn command_os(&self) -> OsString {
        OsString::from(&self.command)
    }

    /// Write the success echo line, command bytes unchanged
    pub fn write_echo<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{} {} ", self.ordinal, self.timestamp)?;
        out.write_all(&self.raw_command)?;
        out.write_all(b"\n")
    }

    /// Whether the shell flagged this entry as edited
    pub fn is_modified(&self) -> bool {
        self.ordinal.ends_with(MODIFIED_MARKER)
    }

    /// Sequence number without the marker
    pub fn number(&self) -> Option<u64> {
        self.ordinal.trim_end_matches(MODIFIED_MARKER).parse().ok()
    }

    /// Timestamp as epoch seconds
    pub fn timestamp_secs(&self) -> Option<i64> {
        self.timestamp.parse().ok()
    }

    /// Timestamp as a UTC datetime, if it is in range
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp_secs()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.ordinal, self.timestamp, self.command)
    }
}
