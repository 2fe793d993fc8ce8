//! Nominatim geocoding client.
//!
//! Turns a resolved street address into map coordinates via a
//! Nominatim-compatible `/search` endpoint. The public OpenStreetMap
//! instance requires an identifying `User-Agent`, so the client always
//! sends one.

use std::time::Duration;

use contato_core::Coordinate;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use super::viacep::ResolvedAddress;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const COUNTRY: &str = "Brazil";
const USER_AGENT: &str = concat!("contato/", env!("CARGO_PKG_VERSION"));

/// Errors that can occur when talking to Nominatim.
#[derive(Debug, Error)]
pub enum NominatimError {
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

/// Outcome of geocoding an address.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geocoding {
    /// The best candidate position for the address.
    Found(Coordinate),
    /// The geocoder returned no candidates.
    NoMatch,
}

/// Wire format of one Nominatim search candidate.
///
/// Nominatim serializes coordinates as strings.
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

impl Place {
    fn coordinate(&self) -> Result<Coordinate, NominatimError> {
        let latitude = self
            .lat
            .parse()
            .map_err(|_| NominatimError::Parse(format!("invalid latitude: {}", self.lat)))?;
        let longitude = self
            .lon
            .parse()
            .map_err(|_| NominatimError::Parse(format!("invalid longitude: {}", self.lon)))?;

        Ok(Coordinate::new(latitude, longitude))
    }
}

/// Client for a Nominatim-compatible geocoding endpoint.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: reqwest::Client,
    base_url: Url,
}

impl NominatimClient {
    /// Create a new client against `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, NominatimError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Geocode a resolved address, taking the first candidate.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a
    /// non-success status, or the body cannot be parsed.
    pub async fn geocode(&self, address: &ResolvedAddress) -> Result<Geocoding, NominatimError> {
        let url = format!("{}/search", self.base_url.as_str().trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .query(&[
                ("street", address.street.as_str()),
                ("city", address.city.as_str()),
                ("state", address.uf.as_str()),
                ("country", COUNTRY),
                ("format", "json"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(NominatimError::Api { status, message });
        }

        let places: Vec<Place> = response
            .json()
            .await
            .map_err(|e| NominatimError::Parse(e.to_string()))?;

        match places.first() {
            Some(place) => Ok(Geocoding::Found(place.coordinate()?)),
            None => Ok(Geocoding::NoMatch),
        }
    }
}
