//! Domain models for the contact service.

pub mod contact;

pub use contact::{Contact, ContactDraft, ValidationErrors};
