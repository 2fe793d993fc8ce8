//! Shared application state.

use std::sync::Arc;

use thiserror::Error;

use crate::config::AppConfig;
use crate::services::lookup::MapState;
use crate::services::nominatim::{NominatimClient, NominatimError};
use crate::services::viacep::{ViaCepClient, ViaCepError};
use crate::store::ContactStore;

/// Errors that can occur while building the application state.
#[derive(Debug, Error)]
pub enum StateError {
    /// ViaCEP client construction failed.
    #[error("ViaCEP client error: {0}")]
    ViaCep(#[from] ViaCepError),

    /// Nominatim client construction failed.
    #[error("Nominatim client error: {0}")]
    Nominatim(#[from] NominatimError),
}

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    store: Arc<dyn ContactStore>,
    viacep: ViaCepClient,
    nominatim: NominatimClient,
    map: MapState,
}

impl AppState {
    /// Build the state from configuration and a contact store.
    ///
    /// # Errors
    ///
    /// Returns an error if either HTTP client cannot be constructed.
    pub fn new(config: AppConfig, store: Arc<dyn ContactStore>) -> Result<Self, StateError> {
        let viacep = ViaCepClient::new(config.viacep_base_url.clone())?;
        let nominatim = NominatimClient::new(config.nominatim_base_url.clone())?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                viacep,
                nominatim,
                map: MapState::new(),
            }),
        })
    }

    /// Get the application configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get the contact store.
    #[must_use]
    pub fn store(&self) -> &dyn ContactStore {
        self.inner.store.as_ref()
    }

    /// Get the ViaCEP client.
    #[must_use]
    pub fn viacep(&self) -> &ViaCepClient {
        &self.inner.viacep
    }

    /// Get the Nominatim client.
    #[must_use]
    pub fn nominatim(&self) -> &NominatimClient {
        &self.inner.nominatim
    }

    /// Get the shared map view state.
    #[must_use]
    pub fn map(&self) -> &MapState {
        &self.inner.map
    }
}
