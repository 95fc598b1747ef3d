//! Core data models for the credit kiosk
//!
//! This module contains the data structures that represent the kiosk domain:
//! accounts, balances, credit counts, history entries, and the store catalog.

pub mod account;
pub mod balance;
pub mod catalog;
pub mod credits;
pub mod entry;
pub mod ids;

pub use account::{AccountProfile, ProfileValidationError};
pub use balance::Balance;
pub use catalog::{Catalog, CatalogItem, CatalogValidationError};
pub use credits::Credits;
pub use entry::HistoryEntry;
pub use ids::{AccountId, EntryId};
