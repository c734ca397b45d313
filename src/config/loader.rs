// file: src/config/loader.rs
// version: 1.0.0
// guid: b38fa442-77f9-4db1-8af1-20cd815c7d11

//! Configuration file loading and environment variable overrides

use super::{BackfillConfig, TrackerSection};
use crate::error::{BackfillError, Result};
use crate::tracker::TrackerSettings;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const ENV_PROGRAM: &str = "CMDTRACK_BACKFILL_PROGRAM";
pub const ENV_WORKDIR: &str = "CMDTRACK_BACKFILL_WORKDIR";
pub const ENV_URL: &str = "CMDTRACK_BACKFILL_URL";
pub const ENV_HOSTNAME: &str = "CMDTRACK_BACKFILL_HOSTNAME";

/// Configuration loader with environment variable overrides
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a new config loader from the process environment
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Create a loader that sees no environment variables
    pub fn empty() -> Self {
        Self {
            env_vars: HashMap::new(),
        }
    }

    /// Set environment variable for overrides
    pub fn set_env_var(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }

    /// Per-user config file location
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cmdtrack-backfill").join("config.toml"))
    }

    /// Load the config file. An explicit path must exist; the default path is optional.
    pub fn load(&self, explicit: Option<&str>) -> Result<BackfillConfig> {
        if let Some(path) = explicit {
            let expanded = shellexpand::full(path).map_err(|e| {
                BackfillError::config(format!("Failed to expand config path {}: {}", path, e))
            })?;
            return self.load_file(Path::new(expanded.as_ref()));
        }

        match Self::default_config_path() {
            Some(path) if path.exists() => self.load_file(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(BackfillConfig::default())
            }
        }
    }

    /// Load configuration from a TOML file
    pub fn load_file(&self, path: &Path) -> Result<BackfillConfig> {
        info!("Loading configuration from: {}", path.display());

        let content = fs::read_to_string(path).map_err(|e| {
            BackfillError::config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            BackfillError::config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Tracker values taken from the environment; empty values are ignored
    pub fn env_overrides(&self) -> TrackerSection {
        let lookup = |key: &str| {
            self.env_vars
                .get(key)
                .filter(|value| !value.is_empty())
                .cloned()
        };

        TrackerSection {
            program: lookup(ENV_PROGRAM),
            workdir: lookup(ENV_WORKDIR),
            url: lookup(ENV_URL),
            hostname: lookup(ENV_HOSTNAME),
        }
    }

    /// Layer file, environment and command line values into final settings
    pub fn resolve(&self, explicit: Option<&str>, cli: TrackerSection) -> Result<TrackerSettings> {
        let file = self.load(explicit)?;
        let settings = file
            .tracker
            .merge(self.env_overrides())
            .merge(cli)
            .into_settings();

        debug!("Final tracker settings: {:?}", settings);
        Ok(settings)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
