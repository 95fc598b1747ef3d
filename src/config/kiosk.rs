//! Kiosk configuration
//!
//! The static configuration the core consumes at startup: the account set
//! (id, display name, access code, limit flag, initial balance) and the
//! store catalog. The core treats these as injected constants, not owned
//! data.

use serde::{Deserialize, Serialize};

use super::paths::KioskPaths;
use crate::error::{KioskError, KioskResult};
use crate::models::{AccountProfile, Catalog, CatalogItem};

/// Static kiosk configuration: accounts and store items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KioskConfig {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// The fixed account set
    pub accounts: Vec<AccountProfile>,

    /// The redeemable store items
    pub store_items: Vec<CatalogItem>,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for KioskConfig {
    /// One unlimited account, one bounded account starting at 260
    /// credits, and a three-item store
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            accounts: vec![
                AccountProfile::unlimited("kristen", "Kristén", "0002"),
                AccountProfile::bounded("joe", "Joe", "0824", 260),
            ],
            store_items: vec![
                CatalogItem::new("One hole", 3),
                CatalogItem::new("Two holes", 6),
                CatalogItem::new("Three holes", 12),
            ],
        }
    }
}

impl KioskConfig {
    /// Load configuration from disk, or the built-in defaults if the file
    /// doesn't exist
    ///
    /// A file that exists but fails to parse is an error rather than a
    /// silent fallback: misconfiguration should be fixed, not masked.
    pub fn load_or_default(paths: &KioskPaths) -> KioskResult<Self> {
        let config_path = paths.config_file();

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .map_err(|e| KioskError::Io(format!("Failed to read config file: {}", e)))?;

            let config: KioskConfig = serde_json::from_str(&contents)
                .map_err(|e| KioskError::Config(format!("Failed to parse config file: {}", e)))?;

            Ok(config)
        } else {
            Ok(KioskConfig::default())
        }
    }

    /// Save configuration to disk
    pub fn save(&self, paths: &KioskPaths) -> KioskResult<()> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| KioskError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(paths.config_file(), contents)
            .map_err(|e| KioskError::Io(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Build the validated catalog from the configured items
    pub fn catalog(&self) -> KioskResult<Catalog> {
        Catalog::new(self.store_items.clone())
            .map_err(|e| KioskError::Config(e.to_string()))
    }
}
