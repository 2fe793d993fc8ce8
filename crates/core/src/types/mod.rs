//! Core types for Contato.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cep;
pub mod channel;
pub mod coordinate;
pub mod id;
pub mod uf;

pub use cep::{Cep, CepError};
pub use channel::{ChannelError, ContactChannel};
pub use coordinate::Coordinate;
pub use id::ContactId;
pub use uf::{Uf, UfError};
