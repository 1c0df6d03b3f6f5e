//! Storage initialization
//!
//! Handles first-run setup: directories and an empty ledger file.

use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::Ledger;

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Never overwrites an existing ledger.
pub fn initialize_storage(paths: &TrackerPaths) -> Result<(), TrackerError> {
    paths.ensure_directories()?;

    if needs_initialization(paths) {
        write_json_atomic(paths.ledger_file(), &Ledger::new())?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &TrackerPaths) -> bool {
    !paths.ledger_file().exists()
}
