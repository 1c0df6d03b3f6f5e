//! User settings for the expense tracker
//!
//! Presentation preferences: currency symbol, the category suggestions
//! offered when recording an expense, and chart width.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::{TrackerError, TrackerResult};
use crate::storage::{read_json, write_json_atomic};

/// User settings for the expense tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Categories suggested before any expense has been recorded
    #[serde(default = "default_categories")]
    pub default_categories: Vec<String>,

    /// Width of bar charts in characters
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_categories() -> Vec<String> {
    [
        "Food",
        "Transportation",
        "Entertainment",
        "Utilities",
        "Shopping",
        "Other",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect()
}

fn default_chart_width() -> usize {
    40
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_categories: default_categories(),
            chart_width: default_chart_width(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or the defaults if no settings file exists
    ///
    /// Nothing is written; `init` decides when to persist.
    pub fn load_or_create(paths: &TrackerPaths) -> TrackerResult<Self> {
        match read_json(paths.settings_file()) {
            Ok(settings) => Ok(settings.unwrap_or_default()),
            Err(TrackerError::Storage(msg)) => Err(TrackerError::Config(msg)),
            Err(e) => Err(e),
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> TrackerResult<()> {
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.chart_width, 40);
        assert_eq!(settings.default_categories.len(), 6);
        assert_eq!(settings.default_categories[0], "Food");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "€".to_string(),
            chart_width: 20,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "£"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "£");
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.default_categories, default_categories());
    }

    #[test]
    fn test_malformed_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_missing_file_gives_defaults_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }
}
