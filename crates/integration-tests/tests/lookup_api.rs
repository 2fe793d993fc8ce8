//! Integration tests for the postal code lookup API.
//!
//! These tests require:
//! - The web server running (cargo run -p contato-web)
//! - Network access to the configured resolver and geocoder
//!
//! Run with: cargo test -p contato-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::Value;

/// Base URL for the web server (configurable via environment).
fn base_url() -> String {
    std::env::var("CONTATO_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

// ============================================================================
// Resolution Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running contato-web server and resolver access"]
async fn test_resolve_known_cep() {
    let resp = reqwest::get(format!("{}/api/cep/01310-100", base_url()))
        .await
        .expect("Failed to reach server");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["street"], "Avenida Paulista");
    assert_eq!(body["city"], "São Paulo");
    assert_eq!(body["uf"], "SP");
}

#[tokio::test]
#[ignore = "Requires running contato-web server"]
async fn test_resolve_rejects_malformed_cep() {
    let resp = reqwest::get(format!("{}/api/cep/123", base_url()))
        .await
        .expect("Failed to reach server");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running contato-web server and resolver access"]
async fn test_resolve_unknown_cep_is_not_found() {
    let resp = reqwest::get(format!("{}/api/cep/99999999", base_url()))
        .await
        .expect("Failed to reach server");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Pipeline Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running contato-web server and resolver access"]
async fn test_lookup_resolved_outcome() {
    let resp = reqwest::get(format!("{}/api/lookup/01310-100", base_url()))
        .await
        .expect("Failed to reach server");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["outcome"]["status"], "resolved");
    assert_eq!(body["outcome"]["address"]["uf"], "SP");
    let address_line = body["outcome"]["address_line"]
        .as_str()
        .expect("address_line missing");
    assert!(address_line.contains("Avenida Paulista"));
    assert_eq!(body["map"]["address"], address_line);
}

#[tokio::test]
#[ignore = "Requires running contato-web server"]
async fn test_lookup_invalid_input_outcome() {
    let resp = reqwest::get(format!("{}/api/lookup/12", base_url()))
        .await
        .expect("Failed to reach server");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["outcome"]["status"], "invalid_cep");
    assert!(body["map"]["zoom"].is_number());
}

#[tokio::test]
#[ignore = "Requires running contato-web server and resolver access"]
async fn test_lookup_unknown_cep_outcome() {
    let resp = reqwest::get(format!("{}/api/lookup/99999999", base_url()))
        .await
        .expect("Failed to reach server");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["outcome"]["status"], "cep_not_found");
}
