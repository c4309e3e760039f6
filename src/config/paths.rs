//! Path management for MoneyTrunk
//!
//! Resolves where the data file and backups live.
//!
//! ## Path Resolution Order
//!
//! 1. `MONEYTRUNK_DATA_DIR` environment variable (if set)
//! 2. The platform config directory via `directories`
//!    (`~/.config/moneytrunk` on Linux, `%APPDATA%\moneytrunk` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::TrunkError;

/// Manages all paths used by MoneyTrunk
#[derive(Debug, Clone)]
pub struct TrunkPaths {
    /// Base directory for all MoneyTrunk data
    base_dir: PathBuf,
}

impl TrunkPaths {
    /// Create a new TrunkPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, TrunkError> {
        let base_dir = if let Ok(custom) = std::env::var("MONEYTRUNK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "moneytrunk").ok_or_else(|| {
                TrunkError::Config("Could not determine a config directory".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create TrunkPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the backup directory (`<base>/backups/`)
    pub fn backup_dir(&self) -> PathBuf {
        self.base_dir.join("backups")
    }

    /// Get the path to the single persisted state document
    pub fn store_file(&self) -> PathBuf {
        self.data_dir().join("store.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), TrunkError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrunkError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| TrunkError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.backup_dir())
            .map_err(|e| TrunkError::Io(format!("Failed to create backup directory: {}", e)))?;

        Ok(())
    }

    /// Check if a data file already exists at this location
    pub fn is_initialized(&self) -> bool {
        self.store_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrunkPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.backup_dir(), temp_dir.path().join("backups"));
        assert_eq!(
            paths.store_file(),
            temp_dir.path().join("data").join("store.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrunkPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(paths.backup_dir().exists());
        assert!(!paths.is_initialized());
    }
}
