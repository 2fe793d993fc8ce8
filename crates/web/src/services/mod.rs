//! External service clients and the lookup pipeline.
//!
//! - [`viacep`]: postal code to address resolution
//! - [`nominatim`]: address to coordinates geocoding
//! - [`lookup`]: the pipeline chaining both and moving the shared map

pub mod lookup;
pub mod nominatim;
pub mod viacep;

pub use nominatim::NominatimClient;
pub use viacep::ViaCepClient;
