//! Path management for the credit kiosk
//!
//! Provides XDG-compliant path resolution for configuration and state files.
//!
//! ## Path Resolution Order
//!
//! 1. `CREDIT_KIOSK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/credit-kiosk` or `~/.config/credit-kiosk`
//! 3. Windows: `%APPDATA%\credit-kiosk`

use std::path::PathBuf;

use crate::error::KioskError;

/// Manages all paths used by the kiosk
#[derive(Debug, Clone)]
pub struct KioskPaths {
    /// Base directory for all kiosk data
    base_dir: PathBuf,
}

impl KioskPaths {
    /// Create a new KioskPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, KioskError> {
        let base_dir = if let Ok(custom) = std::env::var("CREDIT_KIOSK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create KioskPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/credit-kiosk/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the state directory (~/.config/credit-kiosk/state/)
    pub fn state_dir(&self) -> PathBuf {
        self.base_dir.join("state")
    }

    /// Get the path to the kiosk configuration file
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to balances.json
    pub fn balances_file(&self) -> PathBuf {
        self.state_dir().join("balances.json")
    }

    /// Get the path to history.json
    pub fn history_file(&self) -> PathBuf {
        self.state_dir().join("history.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), KioskError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| KioskError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.state_dir())
            .map_err(|e| KioskError::Io(format!("Failed to create state directory: {}", e)))?;

        Ok(())
    }

    /// Check if the kiosk has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.config_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, KioskError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("credit-kiosk"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, KioskError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| KioskError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("credit-kiosk"))
}
