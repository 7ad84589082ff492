//! Driver errors
//!
//! Every failure is terminal for the enclosing test: operations return
//! `Result<_, DriverError>` and tests propagate with `?`.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriverError {
    /// A polled check never succeeded before the global timeout.
    ///
    /// Not-found, ambiguous-match and wrong-context failures all end here;
    /// `message` is the diagnostic from the last failing attempt.
    #[error("{message} (gave up after {attempts} attempts in {elapsed:?})")]
    Timeout {
        message: String,
        attempts: u32,
        elapsed: Duration,
    },

    /// Test code failed the test explicitly
    #[error("{0}")]
    Failed(String),

    #[error("invalid matcher pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("shell command `{command}` failed: {reason}")]
    Shell { command: String, reason: String },
}

impl DriverError {
    /// Diagnostic message without the retry bookkeeping
    pub fn message(&self) -> String {
        match self {
            DriverError::Timeout { message, .. } => message.clone(),
            DriverError::Failed(message) => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, DriverError::Timeout { .. })
    }
}
