//! Brazilian state code (UF) type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Uf`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum UfError {
    /// The input is not exactly 2 characters long.
    #[error("state code must have exactly 2 characters, found {found}")]
    WrongLength {
        /// Number of characters found.
        found: usize,
    },
}

/// A Brazilian federative-unit (state) abbreviation.
///
/// Only the length is validated: a `Uf` is any 2-character string. The set of
/// real abbreviations is not enforced, matching the registration form's rule.
///
/// ## Examples
///
/// ```
/// use contato_core::Uf;
///
/// assert!(Uf::parse("SP").is_ok());
/// assert!(Uf::parse("rj").is_ok()); // case is not checked
///
/// assert!(Uf::parse("S").is_err());
/// assert!(Uf::parse("SAO").is_err());
/// assert!(Uf::parse("").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Uf(String);

impl Uf {
    /// Number of characters in a state code.
    pub const LENGTH: usize = 2;

    /// Parse a `Uf` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 2 characters long.
    pub fn parse(s: &str) -> Result<Self, UfError> {
        let found = s.chars().count();

        if found != Self::LENGTH {
            return Err(UfError::WrongLength { found });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the state code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Uf` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Uf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Uf {
    type Err = UfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Uf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
