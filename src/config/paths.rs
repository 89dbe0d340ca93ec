//! Path management for payday
//!
//! ## Path Resolution Order
//!
//! 1. `PAYDAY_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/payday` on Linux,
//!    `~/Library/Application Support/payday` on macOS, `%APPDATA%\payday` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::PaydayError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "PAYDAY_DATA_DIR";

/// Manages all paths used by payday
#[derive(Debug, Clone)]
pub struct PaydayPaths {
    base_dir: PathBuf,
}

impl PaydayPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, PaydayError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create PaydayPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the default blueprint path for the given file extension
    pub fn blueprint_file(&self, extension: &str) -> PathBuf {
        self.data_dir().join(format!("blueprint.{}", extension))
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), PaydayError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PaydayError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| PaydayError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if payday has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, PaydayError> {
    ProjectDirs::from("", "", "payday")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PaydayError::Config("Could not determine a home directory".into()))
}
