//! Storage layer for the expense tracker
//!
//! The ledger is persisted as one JSON document that is read in full at
//! startup and rewritten in full after every mutation. `LedgerStorage` is the
//! seam between the store and whatever holds that document.

pub mod file_io;
pub mod init;

pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::TrackerResult;
use crate::models::Ledger;

/// Backend that durably holds the ledger document
pub trait LedgerStorage {
    /// Read the full ledger; an absent document yields an empty ledger
    fn load(&self) -> TrackerResult<Ledger>;

    /// Overwrite the durable copy with the given ledger
    fn save(&self, ledger: &Ledger) -> TrackerResult<()>;
}

impl<S: LedgerStorage + ?Sized> LedgerStorage for &S {
    fn load(&self) -> TrackerResult<Ledger> {
        (**self).load()
    }

    fn save(&self, ledger: &Ledger) -> TrackerResult<()> {
        (**self).save(ledger)
    }
}

/// Ledger stored as a pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStorage for JsonFileStorage {
    fn load(&self) -> TrackerResult<Ledger> {
        let ledger: Ledger = read_json(&self.path)?.unwrap_or_default();
        debug!(
            path = %self.path.display(),
            expenses = ledger.expenses.len(),
            "loaded ledger"
        );
        Ok(ledger)
    }

    fn save(&self, ledger: &Ledger) -> TrackerResult<()> {
        write_json_atomic(&self.path, ledger)
    }
}

/// Ledger kept in memory only
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    ledger: RefCell<Option<Ledger>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing ledger, as if it had been saved earlier
    pub fn with_ledger(ledger: Ledger) -> Self {
        Self {
            ledger: RefCell::new(Some(ledger)),
        }
    }

    /// The last saved ledger, if any save happened
    pub fn saved(&self) -> Option<Ledger> {
        self.ledger.borrow().clone()
    }
}

impl LedgerStorage for InMemoryStorage {
    fn load(&self) -> TrackerResult<Ledger> {
        Ok(self.ledger.borrow().clone().unwrap_or_default())
    }

    fn save(&self, ledger: &Ledger) -> TrackerResult<()> {
        *self.ledger.borrow_mut() = Some(ledger.clone());
        Ok(())
    }
}
