// file: src/error.rs
// version: 1.0.0
// guid: b55f88c5-93c3-4d1f-b112-cf186165bdda

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, BackfillError>;

/// Error types for the history backfill
#[derive(Error, Debug)]
pub enum BackfillError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {path}: {source}")]
    Input {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid history pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Tracker exited with status {code:?}: {args:?}")]
    TrackerFailed {
        args: Vec<String>,
        code: Option<i32>,
    },

    #[error("Failed to start tracker: {reason}")]
    TrackerSpawn { args: Vec<String>, reason: String },

    #[error("Tracker not found on PATH: {0}")]
    TrackerNotFound(String),
}

impl BackfillError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error came from the external tracker and should abort
    /// with the failure diagnostic
    pub fn is_tracker_failure(&self) -> bool {
        matches!(
            self,
            Self::TrackerFailed { .. } | Self::TrackerSpawn { .. } | Self::TrackerNotFound(_)
        )
    }

    /// Argument list of the failed invocation, empty when nothing was run
    pub fn tracker_args(&self) -> &[String] {
        match self {
            Self::TrackerFailed { args, .. } | Self::TrackerSpawn { args, .. } => args,
            _ => &[],
        }
    }
}
