//! Postal code lookup pipeline.
//!
//! A lookup normalizes the raw input, resolves it through ViaCEP, geocodes
//! the resolved address through Nominatim, and moves the shared map view.
//! Geocoding is best-effort: the address still applies to the map when the
//! geocoder fails or finds nothing, only the position stays put.
//!
//! Lookups can overlap. Each one takes a token from [`MapState::begin`] and
//! the map only accepts the view from the holder of the latest token, so a
//! slow early lookup cannot overwrite the result of a later one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use contato_core::{Cep, Coordinate};
use serde::Serialize;
use tracing::instrument;

use super::nominatim::{Geocoding, NominatimClient};
use super::viacep::{CepResolution, ResolvedAddress, ViaCepClient, ViaCepError};

/// Map position shown before any lookup succeeds (São Paulo).
pub const FALLBACK_POSITION: Coordinate = Coordinate::new(-23.5505, -46.6333);

/// Zoom level of the initial map view.
pub const DEFAULT_ZOOM: u8 = 15;

/// Zoom level applied when a lookup pinpoints an address.
pub const FOCUS_ZOOM: u8 = 17;

/// What the map is currently showing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    /// Center of the map.
    pub position: Coordinate,
    /// Zoom level.
    pub zoom: u8,
    /// Address line of the last applied lookup, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            position: FALLBACK_POSITION,
            zoom: DEFAULT_ZOOM,
            address: None,
        }
    }
}

/// Claim ticket for one lookup's right to move the map.
#[derive(Debug, Clone, Copy)]
pub struct LookupToken(u64);

/// Shared map view guarded by a generation counter.
///
/// Every lookup calls [`begin`](Self::begin) before any network work, which
/// makes all earlier tokens stale. A stale token's view is discarded at
/// [`try_apply`](Self::try_apply) time.
#[derive(Debug, Default)]
pub struct MapState {
    issued: AtomicU64,
    view: RwLock<MapView>,
}

impl MapState {
    /// Create a map showing the fallback position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a lookup, invalidating every token issued before.
    pub fn begin(&self) -> LookupToken {
        LookupToken(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Apply `view` if `token` is still the latest issued.
    ///
    /// Returns whether the view was applied.
    pub fn try_apply(&self, token: LookupToken, view: MapView) -> bool {
        let mut current = self.view.write().unwrap_or_else(PoisonError::into_inner);

        if token.0 != self.issued.load(Ordering::SeqCst) {
            return false;
        }

        *current = view;
        true
    }

    /// Snapshot the current view.
    #[must_use]
    pub fn current(&self) -> MapView {
        self.view
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Pinpointed position for a resolved address.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Located {
    /// Geocoded position.
    pub position: Coordinate,
    /// Zoom level the map moves to.
    pub zoom: u8,
}

/// Outcome of a postal code lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CepSearch {
    /// The input does not normalize to an 8-digit postal code.
    InvalidCep,
    /// The postal code is well-formed but not assigned.
    CepNotFound,
    /// The postal code resolved to an address.
    Resolved {
        /// Resolved address fields.
        address: ResolvedAddress,
        /// Single-line rendering of the address.
        address_line: String,
        /// Geocoded position, absent when the geocoder failed or found
        /// nothing.
        #[serde(skip_serializing_if = "Option::is_none")]
        location: Option<Located>,
    },
}

/// Run one lookup end to end and move the map if the result is still fresh.
///
/// Malformed input and unknown postal codes are outcomes, not errors, and
/// neither touches the map beyond invalidating older in-flight lookups.
///
/// # Errors
///
/// Returns an error if the postal code resolver cannot be reached or answers
/// with a failure status.
#[instrument(skip(viacep, nominatim, map))]
pub async fn search(
    viacep: &ViaCepClient,
    nominatim: &NominatimClient,
    map: &MapState,
    raw: &str,
) -> Result<CepSearch, ViaCepError> {
    let cep = match Cep::parse(raw) {
        Ok(cep) => cep,
        Err(e) => {
            tracing::debug!(input = raw, error = %e, "Rejected malformed postal code");
            return Ok(CepSearch::InvalidCep);
        }
    };

    let token = map.begin();

    let address = match viacep.resolve(&cep).await? {
        CepResolution::Found(address) => address,
        CepResolution::NotFound => {
            tracing::warn!(cep = %cep, "Postal code not found");
            return Ok(CepSearch::CepNotFound);
        }
    };

    let address_line = address.display_line();

    let mut view = map.current();
    view.address = Some(address_line.clone());

    let location = match nominatim.geocode(&address).await {
        Ok(Geocoding::Found(position)) => {
            view.position = position;
            view.zoom = FOCUS_ZOOM;
            Some(Located {
                position,
                zoom: FOCUS_ZOOM,
            })
        }
        Ok(Geocoding::NoMatch) => {
            tracing::warn!(cep = %cep, "No geocoder match for resolved address");
            None
        }
        Err(e) => {
            tracing::error!(cep = %cep, error = %e, "Geocoding failed");
            None
        }
    };

    if !map.try_apply(token, view) {
        tracing::debug!(cep = %cep, "Discarded stale lookup result");
    }

    Ok(CepSearch::Resolved {
        address,
        address_line,
        location,
    })
}
