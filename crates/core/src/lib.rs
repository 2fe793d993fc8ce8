//! Contato Core - Shared types library.
//!
//! This crate provides common types used across all Contato components:
//! - `web` - Contact registration service (form, lookup pipeline, map view)
//! - `cli` - Command-line tools for lookups and store management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no file access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for postal codes, state codes, contact
//!   channels, IDs, and coordinates

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
