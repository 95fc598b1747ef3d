//! Persistence sink
//!
//! The seam between the in-memory ledger and durable storage. The engine
//! invokes the sink after every committed mutation, once the in-memory
//! state is already consistent; a sink is free to batch or defer as long as
//! it doesn't mutate the snapshot it is handed.

use tracing::debug;

use crate::config::KioskPaths;
use crate::error::KioskResult;

use super::file_io::write_json_atomic;
use super::snapshot::LedgerSnapshot;

/// Receives the ledger state after every committed mutation
pub trait PersistenceSink {
    /// Persist the snapshot
    fn persist(&self, snapshot: &LedgerSnapshot) -> KioskResult<()>;
}

/// Sink that records the intent and stores nothing
///
/// Useful for demos and tests that want a live ledger without a data
/// directory; state lasts for the process lifetime only.
pub struct NullSink;

impl PersistenceSink for NullSink {
    fn persist(&self, snapshot: &LedgerSnapshot) -> KioskResult<()> {
        debug!(
            "ledger state changed ({} accounts); persistence disabled",
            snapshot.balances.len()
        );
        Ok(())
    }
}

/// Sink that writes both state files atomically under the kiosk data
/// directory
pub struct JsonFileSink {
    paths: KioskPaths,
}

impl JsonFileSink {
    /// Create a sink writing under the given paths
    pub fn new(paths: KioskPaths) -> Self {
        Self { paths }
    }
}

impl PersistenceSink for JsonFileSink {
    fn persist(&self, snapshot: &LedgerSnapshot) -> KioskResult<()> {
        write_json_atomic(self.paths.balances_file(), &snapshot.balances)?;
        write_json_atomic(self.paths.history_file(), &snapshot.history)?;
        debug!("ledger state written to {}", self.paths.state_dir().display());
        Ok(())
    }
}
