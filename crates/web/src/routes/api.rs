//! JSON API.

use axum::{Json, extract::{Path, State}};
use contato_core::Cep;
use serde::Serialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::Contact;
use crate::services::lookup::{self, CepSearch, MapView};
use crate::services::viacep::{CepResolution, ResolvedAddress};
use crate::state::AppState;

/// List all stored contacts.
#[instrument(skip(state))]
pub async fn list_contacts(State(state): State<AppState>) -> Result<Json<Vec<Contact>>> {
    Ok(Json(state.store().list()?))
}

/// Resolve a postal code to address fields without touching the map.
#[instrument(skip(state))]
pub async fn resolve_cep(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<ResolvedAddress>> {
    let cep = Cep::parse(&raw).map_err(|e| AppError::BadRequest(e.to_string()))?;

    match state.viacep().resolve(&cep).await? {
        CepResolution::Found(address) => Ok(Json(address)),
        CepResolution::NotFound => Err(AppError::NotFound(format!(
            "no address for postal code {cep}"
        ))),
    }
}

/// Response body of [`lookup_cep`].
#[derive(Debug, Serialize)]
pub struct LookupResponse {
    /// Lookup outcome.
    pub outcome: CepSearch,
    /// Map view after the lookup.
    pub map: MapView,
}

/// Run the full lookup pipeline and report the outcome and resulting map.
#[instrument(skip(state))]
pub async fn lookup_cep(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<LookupResponse>> {
    let outcome = lookup::search(state.viacep(), state.nominatim(), state.map(), &raw).await?;

    Ok(Json(LookupResponse {
        outcome,
        map: state.map().current(),
    }))
}
