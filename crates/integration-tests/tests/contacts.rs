//! Integration tests for contact registration.
//!
//! These tests require:
//! - The web server running (cargo run -p contato-web)
//!
//! Run with: cargo test -p contato-integration-tests -- --ignored
//!
//! Registered contacts persist in the server's store file, so tests use
//! unique names to stay distinguishable across runs.

use contato_core::Cep;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use uuid::Uuid;

/// Base URL for the web server (configurable via environment).
fn base_url() -> String {
    std::env::var("CONTATO_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Unique contact name so repeated runs don't collide.
fn unique_name() -> String {
    format!("Integration Test {}", Uuid::new_v4())
}

fn valid_form(name: &str) -> Vec<(&'static str, String)> {
    vec![
        ("name", name.to_string()),
        ("email_or_phone", "ana@example.com".to_string()),
        ("cep", "01310-100".to_string()),
        ("street", "Avenida Paulista".to_string()),
        ("number", "1578".to_string()),
        ("neighborhood", "Bela Vista".to_string()),
        ("city", "São Paulo".to_string()),
        ("uf", "SP".to_string()),
    ]
}

#[tokio::test]
#[ignore = "Requires running contato-web server"]
async fn test_register_contact_redirects() {
    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client");
    let name = unique_name();

    let resp = client
        .post(format!("{}/contacts", base_url()))
        .form(&valid_form(&name))
        .send()
        .await
        .expect("Failed to submit form");

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get("location").and_then(|v| v.to_str().ok()),
        Some("/?registered=1")
    );
}

#[tokio::test]
#[ignore = "Requires running contato-web server"]
async fn test_registered_contact_appears_in_api() {
    let client = Client::new();
    let name = unique_name();

    let resp = client
        .post(format!("{}/contacts", base_url()))
        .form(&valid_form(&name))
        .send()
        .await
        .expect("Failed to submit form");
    assert_eq!(resp.status(), StatusCode::OK);

    let contacts: Vec<Value> = client
        .get(format!("{}/api/contacts", base_url()))
        .send()
        .await
        .expect("Failed to list contacts")
        .json()
        .await
        .expect("Failed to parse response");

    let stored = contacts
        .iter()
        .find(|c| c["name"] == name.as_str())
        .expect("registered contact missing from list");
    let normalized = Cep::parse("01310-100").expect("valid postal code");
    assert_eq!(stored["cep"], normalized.as_str());
    assert_eq!(stored["uf"], "SP");
    assert!(stored["id"].as_str().is_some());
}

#[tokio::test]
#[ignore = "Requires running contato-web server"]
async fn test_invalid_submission_rerenders_form() {
    let client = Client::new();

    let resp = client
        .post(format!("{}/contacts", base_url()))
        .form(&[
            ("name", "Jo"),
            ("email_or_phone", "not-a-contact"),
            ("cep", "123"),
        ])
        .send()
        .await
        .expect("Failed to submit form");

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("postal code must have exactly 8 digits"));
    assert!(body.contains("Enter a valid email or a 10-11 digit phone number"));
}
