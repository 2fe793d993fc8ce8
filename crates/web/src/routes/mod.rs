//! HTTP route handlers.
//!
//! - `GET /` renders the registration page, running a lookup when `?cep=`
//!   is present
//! - `POST /contacts` validates and stores a submitted contact
//! - `GET /api/contacts` lists stored contacts as JSON
//! - `GET /api/cep/{cep}` resolves a postal code to address fields
//! - `GET /api/lookup/{cep}` runs the full lookup pipeline
//! - unknown paths fall through to a 404 page

use axum::{Router, routing::{get, post}};

use crate::state::AppState;

pub mod api;
pub mod contacts;
pub mod home;

/// JSON API routes, nested under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/contacts", get(api::list_contacts))
        .route("/cep/{cep}", get(api::resolve_cep))
        .route("/lookup/{cep}", get(api::lookup_cep))
}

/// All application routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/contacts", post(contacts::create))
        .nest("/api", api_routes())
        .fallback(home::not_found)
}
