//! Postal code lookup command.
//!
//! # Usage
//!
//! ```bash
//! # Resolve a postal code and geocode the address
//! contato lookup 01310-100
//! ```
//!
//! # Environment Variables
//!
//! - `VIACEP_BASE_URL` - Base URL of the ViaCEP-compatible resolver
//! - `NOMINATIM_BASE_URL` - Base URL of the Nominatim-compatible geocoder

use contato_core::{Cep, CepError};
use contato_web::config::{AppConfig, ConfigError};
use contato_web::services::nominatim::{Geocoding, NominatimClient, NominatimError};
use contato_web::services::viacep::{CepResolution, ViaCepClient, ViaCepError};
use thiserror::Error;

/// Errors that can occur during a lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Input does not normalize to a valid postal code.
    #[error("Invalid postal code: {0}")]
    InvalidCep(#[from] CepError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Postal code resolution failed.
    #[error("ViaCEP error: {0}")]
    ViaCep(#[from] ViaCepError),

    /// Geocoder client error.
    #[error("Nominatim error: {0}")]
    Nominatim(#[from] NominatimError),

    /// Postal code is well-formed but not assigned.
    #[error("No address found for postal code: {0}")]
    NotFound(String),
}

/// Resolve a postal code and geocode the resulting address.
pub async fn run(raw: &str) -> Result<(), LookupError> {
    let cep = Cep::parse(raw)?;
    let config = AppConfig::from_env()?;

    tracing::info!("Looking up postal code {}...", cep);

    let viacep = ViaCepClient::new(config.viacep_base_url)?;
    let address = match viacep.resolve(&cep).await? {
        CepResolution::Found(address) => address,
        CepResolution::NotFound => return Err(LookupError::NotFound(cep.to_string())),
    };

    tracing::info!("Address: {}", address.display_line());

    let nominatim = NominatimClient::new(config.nominatim_base_url)?;
    match nominatim.geocode(&address).await {
        Ok(Geocoding::Found(position)) => tracing::info!("Position: {}", position),
        Ok(Geocoding::NoMatch) => tracing::warn!("No map position found for this address"),
        Err(e) => tracing::warn!("Geocoding failed: {e}"),
    }

    Ok(())
}
