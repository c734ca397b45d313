// file: src/history/parser.rs
// version: 1.0.0
// guid: 3266dc5b-d42b-4404-8b36-37a1ba1d8782

//! History line parser

use super::HistoryEntry;
use crate::Result;
use regex::bytes::Regex;

/// Number (optionally `*`-flagged), epoch seconds, then the command text.
///
/// Matching is bytewise and ASCII-only. `(?m)` lets `$` stop before a kept
/// `\n`, so `\s+` may consume the terminator when the command is empty.
pub const HISTORY_LINE_PATTERN: &str = r"(?m-u)^\s*?([0-9]+\*?)\s*?([0-9]+)\s+(.*)$";

/// Extracts history entries from `fc -t %s -l` output
#[derive(Debug, Clone)]
pub struct HistoryParser {
    pattern: Regex,
}

impl HistoryParser {
    /// Create a parser with the history line pattern compiled
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(HISTORY_LINE_PATTERN)?,
        })
    }

    /// Parse one line, terminator included if present. Non-matching lines yield `None`.
    pub fn parse_line(&self, line: impl AsRef<[u8]>) -> Option<HistoryEntry> {
        let cap = self.pattern.captures(line.as_ref())?;

        // Both groups are ASCII digits (plus `*`)
        let ordinal = String::from_utf8_lossy(&cap[1]).into_owned();
        let timestamp = String::from_utf8_lossy(&cap[2]).into_owned();
        let command = &cap[3];
        let command = command.strip_suffix(b"\r").unwrap_or(command);

        Some(HistoryEntry::from_raw(ordinal, timestamp, command))
    }

    /// Parse every matching line of a block of text
    pub fn parse_all(&self, text: impl AsRef<[u8]>) -> Vec<HistoryEntry> {
        text.as_ref()
            .split_inclusive(|&b| b == b'\n')
            .filter_map(|line| self.parse_line(line))
            .collect()
    }
}
