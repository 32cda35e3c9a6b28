//! User settings for the budget tracker
//!
//! Display preferences: the currency suffix printed after every amount, how
//! long the "added" notification stays visible, and the label of the
//! synthetic show-all filter option.

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Suffix printed after formatted amounts (e.g. "SEK")
    #[serde(default = "default_currency_suffix")]
    pub currency_suffix: String,

    /// Seconds the "Added to list!" notification stays visible
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,

    /// Display label of the synthetic "all categories" filter option
    #[serde(default = "default_show_all_label")]
    pub show_all_label: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency_suffix() -> String {
    "SEK".to_string()
}

fn default_notification_secs() -> u64 {
    2
}

fn default_show_all_label() -> String {
    "Show all".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_suffix: default_currency_suffix(),
            notification_secs: default_notification_secs(),
            show_all_label: default_show_all_label(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BudgetError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BudgetError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
