//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger engine.

pub mod commands;

pub use commands::{handle_balance, handle_history, handle_redeem, handle_send, handle_store};
