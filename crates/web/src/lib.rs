//! Contato web service library.
//!
//! This crate provides the contact service as a library, allowing it to be
//! reused by the CLI and exercised directly in tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
