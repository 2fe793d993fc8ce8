//! Contact listing command.
//!
//! # Usage
//!
//! ```bash
//! contato list
//! ```
//!
//! # Environment Variables
//!
//! - `CONTATO_DATA_FILE` - Path of the contact store file

use contato_web::config::{AppConfig, ConfigError};
use contato_web::store::{ContactStore, JsonFileStore, StoreError};
use thiserror::Error;

/// Errors that can occur while listing contacts.
#[derive(Debug, Error)]
pub enum ListError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Contact store could not be read.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Print every stored contact.
pub fn run() -> Result<(), ListError> {
    let config = AppConfig::from_env()?;
    let store = JsonFileStore::open(&config.data_file)?;
    let contacts = store.list()?;

    if contacts.is_empty() {
        tracing::info!("No contacts registered");
        return Ok(());
    }

    tracing::info!("{} contact(s) registered:", contacts.len());
    for contact in contacts {
        tracing::info!("");
        tracing::info!("  {} <{}>", contact.name, contact.email_or_phone);
        tracing::info!(
            "  CEP {} - {}, {}",
            contact.cep,
            contact.street,
            contact.number
        );
        if let Some(complement) = &contact.complement {
            tracing::info!("  {}", complement);
        }
        tracing::info!(
            "  {}, {} - {}",
            contact.neighborhood,
            contact.city,
            contact.uf
        );
    }

    Ok(())
}
