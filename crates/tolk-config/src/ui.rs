use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_debounce_ms() -> u64 {
    600
}

fn default_status_clear_ms() -> u64 {
    1200
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Quiet period after the last keystroke before translating
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// How long transient status messages stay visible
    #[serde(default = "default_status_clear_ms")]
    pub status_clear_ms: u64,
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            status_clear_ms: default_status_clear_ms(),
            export_dir: default_export_dir(),
        }
    }
}

impl UiConfig {
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let debounce_ms = lookup("TOLK_DEBOUNCE_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_debounce_ms);

        let export_dir = lookup("TOLK_EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_export_dir);

        Self {
            debounce_ms,
            status_clear_ms: default_status_clear_ms(),
            export_dir,
        }
    }
}
