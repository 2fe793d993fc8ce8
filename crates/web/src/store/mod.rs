//! Contact persistence.
//!
//! The store is a single JSON file holding an ordered array of contacts, the
//! process-wide analog of a browser local-store entry. The whole list is read
//! once when the store opens and rewritten wholesale on every append. There
//! is no cross-process concurrency control: two processes appending to the
//! same file can silently overwrite each other, last write wins.
//!
//! Routes receive the store as `Arc<dyn ContactStore>` so tests can swap in
//! [`MemoryStore`].

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use thiserror::Error;

use crate::models::Contact;

/// Errors that can occur in the contact store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The stored payload is not a valid contact list.
    #[error("Data corruption: {0}")]
    DataCorruption(#[from] serde_json::Error),
}

/// Ordered, append-only collection of contacts.
pub trait ContactStore: Send + Sync {
    /// Return all stored contacts in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn list(&self) -> Result<Vec<Contact>, StoreError>;

    /// Append one contact to the end of the list.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn append(&self, contact: Contact) -> Result<(), StoreError>;
}

/// Contact store backed by a single JSON file.
pub struct JsonFileStore {
    path: PathBuf,
    contacts: RwLock<Vec<Contact>>,
}

impl JsonFileStore {
    /// Open the store at `path`, reading any existing contact list.
    ///
    /// A missing file is an empty list; the file is created on the first
    /// append.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or does not
    /// hold a valid contact list.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let contacts = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(StoreError::Io(e)),
        };

        Ok(Self {
            path,
            contacts: RwLock::new(contacts),
        })
    }
}

impl ContactStore for JsonFileStore {
    fn list(&self) -> Result<Vec<Contact>, StoreError> {
        Ok(self
            .contacts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn append(&self, contact: Contact) -> Result<(), StoreError> {
        let mut contacts = self
            .contacts
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        contacts.push(contact);
        let payload = serde_json::to_string_pretty(&*contacts)?;
        fs::write(&self.path, payload)?;

        Ok(())
    }
}

/// In-memory contact store used by unit tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryStore {
    contacts: RwLock<Vec<Contact>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactStore for MemoryStore {
    fn list(&self) -> Result<Vec<Contact>, StoreError> {
        Ok(self
            .contacts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn append(&self, contact: Contact) -> Result<(), StoreError> {
        self.contacts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(contact);
        Ok(())
    }
}
