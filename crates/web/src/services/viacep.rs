//! ViaCEP postal code resolution client.
//!
//! ViaCEP answers `GET {base}/{cep}/json/` with the address fields for a
//! postal code. Unknown codes still come back `200 OK` with `"erro": true`
//! in the body, so "not found" is modeled as a [`CepResolution`] outcome
//! rather than an error.

use std::time::Duration;

use contato_core::Cep;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur when talking to ViaCEP.
#[derive(Debug, Error)]
pub enum ViaCepError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// Failed to parse the API response.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Address fields resolved for a postal code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAddress {
    /// Street name.
    pub street: String,
    /// Neighborhood name.
    pub neighborhood: String,
    /// City name.
    pub city: String,
    /// Two-letter state code.
    pub uf: String,
}

impl ResolvedAddress {
    /// Single-line rendering used for map labels and geocoding queries.
    #[must_use]
    pub fn display_line(&self) -> String {
        format!(
            "{}, {}, {} - {}",
            self.street, self.neighborhood, self.city, self.uf
        )
    }
}

/// Outcome of resolving a postal code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CepResolution {
    /// The postal code maps to an address.
    Found(ResolvedAddress),
    /// The postal code is well-formed but not assigned.
    NotFound,
}

/// Wire format of a ViaCEP response body.
///
/// Every field is optional on the wire; ViaCEP omits or blanks fields it has
/// no data for.
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
    #[serde(default)]
    erro: bool,
}

impl CepResolution {
    fn from_wire(payload: ViaCepResponse) -> Self {
        if payload.erro {
            return Self::NotFound;
        }

        Self::Found(ResolvedAddress {
            street: payload.logradouro,
            neighborhood: payload.bairro,
            city: payload.localidade,
            uf: payload.uf,
        })
    }
}

/// Client for a ViaCEP-compatible resolution endpoint.
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ViaCepClient {
    /// Create a new client against `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, ViaCepError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Resolve a postal code to its address fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a
    /// non-success status, or the body cannot be parsed.
    pub async fn resolve(&self, cep: &Cep) -> Result<CepResolution, ViaCepError> {
        let url = format!(
            "{}/{}/json/",
            self.base_url.as_str().trim_end_matches('/'),
            cep
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ViaCepError::Api { status, message });
        }

        let payload: ViaCepResponse = response
            .json()
            .await
            .map_err(|e| ViaCepError::Parse(e.to_string()))?;

        Ok(CepResolution::from_wire(payload))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_line_format() {
        let address = ResolvedAddress {
            street: "Avenida Conselheiro Nébias".to_string(),
            neighborhood: "Boqueirão".to_string(),
            city: "Santos".to_string(),
            uf: "SP".to_string(),
        };

        assert_eq!(
            address.display_line(),
            "Avenida Conselheiro Nébias, Boqueirão, Santos - SP"
        );
    }

    #[test]
    fn test_found_response_maps_fields() {
        let payload: ViaCepResponse = serde_json::from_str(
            r#"{
                "cep": "11040-221",
                "logradouro": "Avenida Conselheiro Nébias",
                "bairro": "Boqueirão",
                "localidade": "Santos",
                "uf": "SP"
            }"#,
        )
        .unwrap();

        let resolution = CepResolution::from_wire(payload);
        assert_eq!(
            resolution,
            CepResolution::Found(ResolvedAddress {
                street: "Avenida Conselheiro Nébias".to_string(),
                neighborhood: "Boqueirão".to_string(),
                city: "Santos".to_string(),
                uf: "SP".to_string(),
            })
        );
    }

    #[test]
    fn test_erro_flag_means_not_found() {
        let payload: ViaCepResponse = serde_json::from_str(r#"{"erro": true}"#).unwrap();
        assert_eq!(CepResolution::from_wire(payload), CepResolution::NotFound);
    }

    #[test]
    fn test_absent_fields_default_empty() {
        let payload: ViaCepResponse = serde_json::from_str(r#"{"localidade": "Santos"}"#).unwrap();

        let CepResolution::Found(address) = CepResolution::from_wire(payload) else {
            panic!("expected a found resolution");
        };
        assert_eq!(address.street, "");
        assert_eq!(address.city, "Santos");
    }
}
