//! Contact registration command.
//!
//! # Usage
//!
//! ```bash
//! # Register a contact, resolving address fields from the postal code
//! contato add -n "Ana Souza" -e ana@example.com -c 01310-100 --number 1578
//!
//! # Register a contact with every address field spelled out
//! contato add -n "Ana Souza" -e ana@example.com -c 01310-100 \
//!     --street "Avenida Paulista" --number 1578 --neighborhood "Bela Vista" \
//!     --city "São Paulo" --uf SP
//! ```
//!
//! # Environment Variables
//!
//! - `CONTATO_DATA_FILE` - Path of the contact store file
//! - `VIACEP_BASE_URL` - Base URL of the ViaCEP-compatible resolver

use clap::Args;
use contato_core::Cep;
use contato_web::config::{AppConfig, ConfigError};
use contato_web::models::{ContactDraft, ValidationErrors};
use contato_web::services::viacep::{CepResolution, ResolvedAddress, ViaCepClient, ViaCepError};
use contato_web::store::{ContactStore, JsonFileStore, StoreError};
use thiserror::Error;

/// Arguments of the `add` command.
#[derive(Args)]
pub struct AddArgs {
    /// Contact name
    #[arg(short, long)]
    name: String,

    /// Email address or 10-11 digit phone number
    #[arg(short, long)]
    email_or_phone: String,

    /// Postal code, punctuation allowed
    #[arg(short, long)]
    cep: String,

    /// House or building number
    #[arg(long)]
    number: String,

    /// Extra address details (apartment, unit)
    #[arg(long)]
    complement: Option<String>,

    /// Street name, resolved from the postal code when omitted
    #[arg(long)]
    street: Option<String>,

    /// Neighborhood, resolved from the postal code when omitted
    #[arg(long)]
    neighborhood: Option<String>,

    /// City, resolved from the postal code when omitted
    #[arg(long)]
    city: Option<String>,

    /// Two-letter state code, resolved from the postal code when omitted
    #[arg(long)]
    uf: Option<String>,
}

/// Errors that can occur while registering a contact.
#[derive(Debug, Error)]
pub enum AddError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Resolver client error.
    #[error("ViaCEP error: {0}")]
    ViaCep(#[from] ViaCepError),

    /// Submitted fields failed validation.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Contact store could not be read or written.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Register a contact, autofilling address fields from the postal code.
pub async fn run(args: AddArgs) -> Result<(), AddError> {
    let config = AppConfig::from_env()?;

    let needs_resolution = args.street.is_none()
        || args.neighborhood.is_none()
        || args.city.is_none()
        || args.uf.is_none();

    let resolved = if needs_resolution {
        resolve_address(&config, &args.cep).await?
    } else {
        None
    };
    let defaults = resolved.unwrap_or_default();

    let draft = ContactDraft {
        name: args.name,
        email_or_phone: args.email_or_phone,
        cep: args.cep,
        street: args.street.unwrap_or(defaults.street),
        number: args.number,
        complement: args.complement.unwrap_or_default(),
        neighborhood: args.neighborhood.unwrap_or(defaults.neighborhood),
        city: args.city.unwrap_or(defaults.city),
        uf: args.uf.unwrap_or(defaults.uf),
    };

    let contact = draft.validate().map_err(AddError::Validation)?;
    let id = contact.id;

    let store = JsonFileStore::open(&config.data_file)?;
    store.append(contact)?;

    tracing::info!("Contact registered: {}", id);

    Ok(())
}

/// Resolve address defaults from the postal code, degrading to empty fields
/// when the code is malformed or unknown.
async fn resolve_address(
    config: &AppConfig,
    raw: &str,
) -> Result<Option<ResolvedAddress>, AddError> {
    let Ok(cep) = Cep::parse(raw) else {
        return Ok(None);
    };

    let viacep = ViaCepClient::new(config.viacep_base_url.clone())?;
    match viacep.resolve(&cep).await {
        Ok(CepResolution::Found(address)) => Ok(Some(address)),
        Ok(CepResolution::NotFound) => {
            tracing::warn!("Postal code {} not found, address fields left empty", cep);
            Ok(None)
        }
        Err(e) => {
            tracing::warn!("Could not resolve postal code: {e}");
            Ok(None)
        }
    }
}
