//! Integration tests for the server-rendered registration page.
//!
//! These tests require:
//! - The web server running (cargo run -p contato-web)
//! - Network access to the configured resolver and geocoder
//!
//! Run with: cargo test -p contato-integration-tests -- --ignored

use reqwest::StatusCode;

/// Base URL for the web server (configurable via environment).
fn base_url() -> String {
    std::env::var("CONTATO_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

#[tokio::test]
#[ignore = "Requires running contato-web server"]
async fn test_home_page_renders() {
    let resp = reqwest::get(format!("{}/", base_url()))
        .await
        .expect("Failed to reach server");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Register a contact"));
    assert!(body.contains("Contacts"));
}

#[tokio::test]
#[ignore = "Requires running contato-web server and resolver access"]
async fn test_home_page_lookup_moves_map() {
    let resp = reqwest::get(format!("{}/?cep=01310-100", base_url()))
        .await
        .expect("Failed to reach server");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Avenida Paulista, Bela Vista, São Paulo - SP"));
}

#[tokio::test]
#[ignore = "Requires running contato-web server and resolver access"]
async fn test_home_page_notices_unknown_cep() {
    let resp = reqwest::get(format!("{}/?cep=99999999", base_url()))
        .await
        .expect("Failed to reach server");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Postal code not found."));
}

#[tokio::test]
#[ignore = "Requires running contato-web server"]
async fn test_unknown_path_returns_404() {
    let resp = reqwest::get(format!("{}/no-such-page", base_url()))
        .await
        .expect("Failed to reach server");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Page not found"));
}
