//! Driver configuration
//!
//! Timing constants and keybindings are plain values threaded into the
//! retry engine and input dispatcher at construction.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::DriverError;

/// Environment variable naming a TOML config file
pub const CONFIG_PATH_ENV: &str = "TUI_DRIVER_CONFIG";

/// Environment variable overriding `input_delay_ms`
pub const INPUT_DELAY_ENV: &str = "TUI_DRIVER_INPUT_DELAY_MS";

/// Driver configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Sleep between retry attempts (ms)
    pub poll_interval_ms: u64,

    /// Maximum total wait for one assertion (ms)
    pub timeout_ms: u64,

    /// Delay before every key press (ms)
    pub input_delay_ms: u64,

    /// Logical action to key string
    pub keybindings: KeybindingConfig,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 10,
            timeout_ms: 5000,
            input_delay_ms: 0,
            keybindings: KeybindingConfig::default(),
        }
    }
}

/// Keys for the actions the driver issues itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingConfig {
    pub next_item: String,
    pub prev_item: String,
    pub confirm: String,
    #[serde(rename = "return")]
    pub return_key: String,
    pub rebase_options_menu: String,
    pub clear_prompt: String,
    pub submit_commit: String,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self {
            next_item: "<down>".to_string(),
            prev_item: "<up>".to_string(),
            confirm: "<enter>".to_string(),
            return_key: "<esc>".to_string(),
            rebase_options_menu: "m".to_string(),
            clear_prompt: "<c-u>".to_string(),
            submit_commit: "<enter>".to_string(),
        }
    }
}

impl DriverConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn input_delay(&self) -> Duration {
        Duration::from_millis(self.input_delay_ms)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, DriverError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, DriverError> {
        let content = std::fs::read_to_string(path).map_err(|source| DriverError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load from `TUI_DRIVER_CONFIG` if set, falling back to defaults,
    /// then apply the `TUI_DRIVER_INPUT_DELAY_MS` override.
    pub fn load() -> Self {
        let path = std::env::var_os(CONFIG_PATH_ENV);
        let delay = std::env::var(INPUT_DELAY_ENV).ok();
        Self::resolve(path.as_deref().map(Path::new), delay.as_deref())
    }

    /// Build a config from an optional file and an optional raw input
    /// delay override. Unreadable files and unparseable delays are logged
    /// and ignored.
    pub fn resolve(path: Option<&Path>, input_delay: Option<&str>) -> Self {
        let mut config = match path {
            Some(path) => match Self::load_from(path) {
                Ok(config) => {
                    tracing::info!(?path, "loaded driver configuration");
                    config
                }
                Err(e) => {
                    tracing::warn!(?path, error = %e, "failed to load driver config");
                    Self::default()
                }
            },
            None => {
                tracing::info!("using default driver configuration");
                Self::default()
            }
        };

        if let Some(raw) = input_delay {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.input_delay_ms = ms,
                Err(e) => {
                    tracing::warn!(value = %raw, error = %e, "ignoring invalid input delay")
                }
            }
        }

        config
    }
}
