//! Recorder configuration.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_RESULTS_PATH: &str = "natty-results.jsonl";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecorderConfig {
    pub results_path: PathBuf,
    /// Keep results in memory instead of writing the log file.
    pub disabled: bool,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            results_path: PathBuf::from(DEFAULT_RESULTS_PATH),
            disabled: false,
        }
    }
}

impl RecorderConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("NATTY_RESULTS_PATH").ok(),
            env::var("NATTY_RECORDER_DISABLED").ok(),
        )
    }

    fn from_vars(results_path: Option<String>, disabled: Option<String>) -> Self {
        let results_path = results_path
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS_PATH));

        let disabled = disabled
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            results_path,
            disabled,
        }
    }
}
