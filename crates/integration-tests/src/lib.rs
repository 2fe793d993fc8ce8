//! Integration tests for Contato.
//!
//! The tests in `tests/` drive a running `contato-web` server over HTTP and
//! are ignored by default.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the server
//! cargo run -p contato-web
//!
//! # Run the ignored integration tests against it
//! cargo test -p contato-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `health` - Liveness endpoint
//! - `pages` - Server-rendered registration page
//! - `lookup_api` - Postal code resolution and lookup API
//! - `contacts` - Form submission and the contacts API
//!
//! # Environment Variables
//!
//! - `CONTATO_BASE_URL` - Base URL of the running server
//!   (default `http://localhost:3000`)
//!
//! The lookup tests also need network access to whatever resolver and
//! geocoder the server is configured against.
