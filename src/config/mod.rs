// file: src/config/mod.rs
// version: 1.0.0
// guid: f1ad0cab-b43c-4a67-8445-8733ef667d08

//! Configuration module for the history backfill
//!
//! Settings come from built-in defaults, an optional TOML file, environment
//! variables and finally command line flags, each layer overriding the last.

pub mod loader;

pub use loader::ConfigLoader;

use crate::tracker::TrackerSettings;
use serde::{Deserialize, Serialize};

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackfillConfig {
    pub tracker: TrackerSection,
}

/// `[tracker]` table, every key optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerSection {
    pub program: Option<String>,
    pub workdir: Option<String>,
    pub url: Option<String>,
    pub hostname: Option<String>,
}

impl TrackerSection {
    /// Overlay `other` on top of `self`, keeping values `other` leaves unset
    pub fn merge(self, other: TrackerSection) -> TrackerSection {
        TrackerSection {
            program: other.program.or(self.program),
            workdir: other.workdir.or(self.workdir),
            url: other.url.or(self.url),
            hostname: other.hostname.or(self.hostname),
        }
    }

    /// Resolve against the defaults
    pub fn into_settings(self) -> TrackerSettings {
        let defaults = TrackerSettings::default();
        TrackerSettings {
            program: self.program.unwrap_or(defaults.program),
            workdir: self.workdir.unwrap_or(defaults.workdir),
            url: self.url,
            hostname: self.hostname,
        }
    }
}
