//! Store catalog model
//!
//! The static list of redeemable items. Loaded once at startup from
//! configuration and never mutated at runtime.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::credits::Credits;

/// One redeemable store item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Display label, unique within the catalog
    pub name: String,

    /// Positive credit price
    pub cost: Credits,
}

impl CatalogItem {
    /// Create an item
    pub fn new(name: impl Into<String>, cost: u64) -> Self {
        Self {
            name: name.into(),
            cost: Credits::new(cost),
        }
    }
}

impl fmt::Display for CatalogItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.cost)
    }
}

/// The fixed set of redeemable items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names and non-positive costs
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogValidationError> {
        let mut seen = HashSet::new();
        for item in &items {
            if item.name.trim().is_empty() {
                return Err(CatalogValidationError::EmptyName);
            }
            if item.cost.is_zero() {
                return Err(CatalogValidationError::ZeroCost(item.name.clone()));
            }
            if !seen.insert(item.name.as_str()) {
                return Err(CatalogValidationError::DuplicateName(item.name.clone()));
            }
        }
        Ok(Self { items })
    }

    /// All items, in configured order
    pub fn list(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Look up an item by exact name
    pub fn find(&self, name: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.name == name)
    }
}

/// Validation errors for the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogValidationError {
    EmptyName,
    ZeroCost(String),
    DuplicateName(String),
}

impl fmt::Display for CatalogValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Store item name cannot be empty"),
            Self::ZeroCost(name) => write!(f, "Store item '{}' must cost at least 1 credit", name),
            Self::DuplicateName(name) => write!(f, "Duplicate store item: {}", name),
        }
    }
}

impl std::error::Error for CatalogValidationError {}
