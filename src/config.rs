// File: src/config.rs
use std::env;
use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "IE_DATA_DIR";
pub const HISTORY_WINDOW_ENV: &str = "IE_HISTORY_WINDOW";

const DEFAULT_DATA_DIR: &str = "ie_data_autonomous";
const DEFAULT_HISTORY_WINDOW: usize = 5;

/// Runtime settings for the engine and its binaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the four dictionary files.
    pub data_dir: PathBuf,
    /// Number of recent lookups kept in the session history.
    pub history_window: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            history_window: DEFAULT_HISTORY_WINDOW,
        }
    }
}

impl Config {
    /// Reads `IE_DATA_DIR` and `IE_HISTORY_WINDOW`, keeping defaults for
    /// anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|d| !d.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup(HISTORY_WINDOW_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(n) => config.history_window = n,
                Err(_) => tracing::warn!(
                    value = %raw,
                    default = DEFAULT_HISTORY_WINDOW,
                    "ignoring unparsable {}",
                    HISTORY_WINDOW_ENV
                ),
            }
        }

        config
    }
}
