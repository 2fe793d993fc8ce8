//! Contact registration form handling.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use crate::error::Result;
use crate::models::{ContactDraft, ValidationErrors};
use crate::routes::home::IndexTemplate;
use crate::state::AppState;

/// Handle a registration form submission.
///
/// An invalid draft re-renders the page with field errors and the submitted
/// values retained. A store failure keeps the submitted values behind a
/// generic notice. Success redirects to `/?registered=1`.
#[instrument(skip(state, form), fields(cep = %form.cep))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ContactDraft>,
) -> Result<Response> {
    let contact = match form.validate() {
        Ok(contact) => contact,
        Err(errors) => {
            tracing::info!(errors = %errors, "Rejected invalid contact draft");
            let template = IndexTemplate {
                map: state.map().current(),
                notice: None,
                form,
                errors,
                contacts: state.store().list()?,
            };
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, template).into_response());
        }
    };

    let id = contact.id;
    match state.store().append(contact) {
        Ok(()) => {
            tracing::info!(id = %id, "Contact registered");
            Ok(Redirect::to("/?registered=1").into_response())
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to persist contact");
            let template = IndexTemplate {
                map: state.map().current(),
                notice: Some("Could not save the contact. Try again.".to_string()),
                form,
                errors: ValidationErrors::default(),
                contacts: state.store().list()?,
            };
            Ok((StatusCode::INTERNAL_SERVER_ERROR, template).into_response())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr};
    use std::path::PathBuf;
    use std::sync::Arc;

    use url::Url;

    use super::*;
    use crate::config::AppConfig;
    use crate::models::Contact;
    use crate::store::{ContactStore, MemoryStore, StoreError};

    fn test_state_with(store: Arc<dyn ContactStore>) -> AppState {
        let config = AppConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            data_file: PathBuf::from("unused.json"),
            viacep_base_url: Url::parse("http://127.0.0.1:9").unwrap(),
            nominatim_base_url: Url::parse("http://127.0.0.1:9").unwrap(),
        };
        AppState::new(config, store).unwrap()
    }

    fn test_state() -> (AppState, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (test_state_with(Arc::clone(&store) as _), store)
    }

    fn valid_draft() -> ContactDraft {
        ContactDraft {
            name: "Ana Souza".to_string(),
            email_or_phone: "ana@example.com".to_string(),
            cep: "01310-100".to_string(),
            street: "Avenida Paulista".to_string(),
            number: "1578".to_string(),
            complement: String::new(),
            neighborhood: "Bela Vista".to_string(),
            city: "São Paulo".to_string(),
            uf: "SP".to_string(),
        }
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_create_redirects_on_success() {
        let (state, store) = test_state();

        let response = create(State(state), Form(valid_draft())).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get("location").unwrap(),
            "/?registered=1"
        );

        let contacts = store.list().unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name, "Ana Souza");
        assert_eq!(contacts[0].cep.as_str(), "01310100");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_draft() {
        let (state, store) = test_state();
        let draft = ContactDraft {
            name: "Jo".to_string(),
            ..valid_draft()
        };

        let response = create(State(state), Form(draft)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(store.list().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_retains_values_on_validation_failure() {
        let (state, _store) = test_state();
        let draft = ContactDraft {
            cep: "123".to_string(),
            ..valid_draft()
        };

        let response = create(State(state), Form(draft)).await.unwrap();
        let body = body_text(response).await;

        assert!(body.contains("Ana Souza"));
        assert!(body.contains("Avenida Paulista"));
        assert!(body.contains("postal code must have exactly 8 digits"));
    }

    #[tokio::test]
    async fn test_create_allows_duplicate_submissions() {
        let (state, store) = test_state();

        create(State(state.clone()), Form(valid_draft()))
            .await
            .unwrap();
        create(State(state), Form(valid_draft())).await.unwrap();

        let contacts = store.list().unwrap();
        assert_eq!(contacts.len(), 2);
        assert_ne!(contacts[0].id, contacts[1].id);
    }

    struct FailingStore;

    impl ContactStore for FailingStore {
        fn list(&self) -> std::result::Result<Vec<Contact>, StoreError> {
            Ok(Vec::new())
        }

        fn append(&self, _contact: Contact) -> std::result::Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk full")))
        }
    }

    #[tokio::test]
    async fn test_create_keeps_form_when_store_fails() {
        let state = test_state_with(Arc::new(FailingStore));

        let response = create(State(state), Form(valid_draft())).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_text(response).await;
        assert!(body.contains("Could not save the contact. Try again."));
        assert!(body.contains("Ana Souza"));
    }
}
