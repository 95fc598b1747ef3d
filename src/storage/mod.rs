//! Storage layer for the credit kiosk
//!
//! JSON file state with atomic writes, fallback loading, and the
//! persistence sink the ledger engine fires after each committed mutation.

pub mod file_io;
pub mod sink;
pub mod snapshot;

pub use file_io::{read_json, write_json_atomic};
pub use sink::{JsonFileSink, NullSink, PersistenceSink};
pub use snapshot::LedgerSnapshot;
