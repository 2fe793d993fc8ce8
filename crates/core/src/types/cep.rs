//! Brazilian postal code (CEP) type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Cep`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum CepError {
    /// The input contains no digits at all.
    #[error("postal code cannot be empty")]
    Empty,
    /// The input does not normalize to exactly 8 digits.
    #[error("postal code must have exactly 8 digits, found {found}")]
    WrongLength {
        /// Number of digits found after normalization.
        found: usize,
    },
}

/// A Brazilian postal code (CEP).
///
/// A CEP is exactly 8 decimal digits. User input is normalized before
/// validation: every non-digit character is stripped and anything past the
/// eighth digit is dropped, so `"01310-100"` and `"01310100"` parse to the
/// same value.
///
/// ## Constraints
///
/// - Exactly 8 ASCII digits after normalization
/// - Stored without separators
///
/// ## Examples
///
/// ```
/// use contato_core::Cep;
///
/// // Separators are stripped before validation
/// assert!(Cep::parse("01310-100").is_ok());
/// assert!(Cep::parse("01310100").is_ok());
///
/// // Invalid inputs
/// assert!(Cep::parse("0131010").is_err()); // 7 digits
/// assert!(Cep::parse("").is_err());        // empty
/// assert!(Cep::parse("abc").is_err());     // no digits
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Cep(String);

impl Cep {
    /// Number of digits in a CEP.
    pub const LENGTH: usize = 8;

    /// Normalize raw postal-code input.
    ///
    /// Strips every non-digit character and truncates the result to at most
    /// [`Cep::LENGTH`] digits. Pure and idempotent; never fails.
    ///
    /// ```
    /// use contato_core::Cep;
    ///
    /// assert_eq!(Cep::normalize("01310-100"), "01310100");
    /// assert_eq!(Cep::normalize("  11  040 221"), "11040221");
    /// assert_eq!(Cep::normalize("123456789"), "12345678");
    /// assert_eq!(Cep::normalize("letters"), "");
    /// ```
    #[must_use]
    pub fn normalize(input: &str) -> String {
        input
            .chars()
            .filter(char::is_ascii_digit)
            .take(Self::LENGTH)
            .collect()
    }

    /// Parse a `Cep` from a string, normalizing it first.
    ///
    /// # Errors
    ///
    /// Returns an error if the normalized input:
    /// - Contains no digits
    /// - Has fewer than 8 digits
    pub fn parse(s: &str) -> Result<Self, CepError> {
        let digits = Self::normalize(s);

        if digits.is_empty() {
            return Err(CepError::Empty);
        }

        if digits.len() != Self::LENGTH {
            return Err(CepError::WrongLength {
                found: digits.len(),
            });
        }

        Ok(Self(digits))
    }

    /// Returns the postal code as a string slice of 8 digits.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Cep` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Cep {
    type Err = CepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Cep {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
