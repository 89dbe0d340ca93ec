//! User settings for payday
//!
//! Manages the currency symbol, the default pocket-money allowance and the
//! preferred blueprint file format.

use serde::{Deserialize, Serialize};

use super::paths::PaydayPaths;
use crate::error::PaydayError;

/// On-disk format for the blueprint snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BlueprintFormat {
    #[default]
    Json,
    Yaml,
}

impl BlueprintFormat {
    /// File extension used for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// User settings for payday
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when rendering amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Pocket spending allowance used when none is given on the command line
    #[serde(default = "default_allowance")]
    pub default_allowance: f64,

    /// Format of the default blueprint file
    #[serde(default)]
    pub blueprint_format: BlueprintFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₱".to_string()
}

fn default_allowance() -> f64 {
    2000.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_allowance: default_allowance(),
            blueprint_format: BlueprintFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PaydayPaths) -> Result<Self, PaydayError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| PaydayError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PaydayError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PaydayPaths) -> Result<(), PaydayError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PaydayError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PaydayError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
