//! Registration page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::{Query, State}, http::StatusCode};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::models::{Contact, ContactDraft, ValidationErrors};
use crate::services::lookup::{self, CepSearch, MapView};
use crate::state::AppState;

/// Query parameters accepted by the registration page.
#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    /// Postal code to look up before rendering.
    cep: Option<String>,
    /// Set by the redirect after a successful registration.
    registered: Option<String>,
}

/// Registration page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Current map view.
    pub map: MapView,
    /// Banner message, if any.
    pub notice: Option<String>,
    /// Form values to render, submitted values on re-render.
    pub form: ContactDraft,
    /// Field errors from a rejected submission.
    pub errors: ValidationErrors,
    /// Stored contacts, in insertion order.
    pub contacts: Vec<Contact>,
}

/// 404 page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate;

/// Render the registration page.
///
/// A `?cep=` parameter runs a postal code lookup before rendering, so the
/// page shows the moved map. Malformed input and resolver outcomes map to
/// banner notices; only a resolver failure is reported as an error notice.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Result<IndexTemplate> {
    let mut notice = query
        .registered
        .is_some()
        .then(|| "Contact registered successfully.".to_string());

    if let Some(raw) = &query.cep {
        match lookup::search(state.viacep(), state.nominatim(), state.map(), raw).await {
            Ok(CepSearch::CepNotFound) => {
                notice = Some("Postal code not found.".to_string());
            }
            Ok(CepSearch::InvalidCep | CepSearch::Resolved { .. }) => {}
            Err(e) => {
                tracing::error!(error = %e, "Postal code lookup failed");
                notice = Some("Address lookup failed. Try again.".to_string());
            }
        }
    }

    let contacts = state.store().list()?;

    Ok(IndexTemplate {
        map: state.map().current(),
        notice,
        form: ContactDraft::default(),
        errors: ValidationErrors::default(),
        contacts,
    })
}

/// Fallback handler for unknown paths.
pub async fn not_found() -> (StatusCode, NotFoundTemplate) {
    (StatusCode::NOT_FOUND, NotFoundTemplate)
}
