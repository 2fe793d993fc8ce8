//! Contact channel type: an email address or a phone number.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ContactChannel`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum ChannelError {
    /// The input string is empty.
    #[error("contact channel cannot be empty")]
    Empty,
    /// The input contains an @ but is not a structurally valid email.
    #[error("not a valid email address")]
    InvalidEmail,
    /// The input has no @ and is not a 10 or 11 digit phone number.
    #[error("phone number must be 10 or 11 digits")]
    InvalidPhone,
}

/// A way to reach a contact: either an email address or a phone number.
///
/// The two arms are discriminated on the presence of `@`. An input with an
/// `@` must have a non-empty local part and a domain containing a dot; an
/// input without one must be exactly 10 or 11 ASCII digits (landline or
/// mobile with area code, no separators).
///
/// ## Examples
///
/// ```
/// use contato_core::ContactChannel;
///
/// assert!(ContactChannel::parse("ana@example.com").unwrap().is_email());
/// assert!(ContactChannel::parse("11987654321").unwrap().is_phone());
///
/// assert!(ContactChannel::parse("ana@nodot").is_err());
/// assert!(ContactChannel::parse("123").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum ContactChannel {
    /// An email address.
    Email(String),
    /// A phone number of 10 or 11 digits.
    Phone(String),
}

impl ContactChannel {
    /// Parse a `ContactChannel` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, is an email without a valid
    /// local part or dotted domain, or is a phone number that is not 10 or
    /// 11 digits.
    pub fn parse(s: &str) -> Result<Self, ChannelError> {
        if s.is_empty() {
            return Err(ChannelError::Empty);
        }

        if s.contains('@') {
            if is_valid_email(s) {
                return Ok(Self::Email(s.to_owned()));
            }
            return Err(ChannelError::InvalidEmail);
        }

        if is_valid_phone(s) {
            return Ok(Self::Phone(s.to_owned()));
        }

        Err(ChannelError::InvalidPhone)
    }

    /// Returns the channel as the string it was parsed from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Email(s) | Self::Phone(s) => s,
        }
    }

    /// Consumes the channel and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        match self {
            Self::Email(s) | Self::Phone(s) => s,
        }
    }

    /// Returns `true` if the channel is an email address.
    #[must_use]
    pub const fn is_email(&self) -> bool {
        matches!(self, Self::Email(_))
    }

    /// Returns `true` if the channel is a phone number.
    #[must_use]
    pub const fn is_phone(&self) -> bool {
        matches!(self, Self::Phone(_))
    }
}

/// Basic structural email validation: non-empty local part and a domain
/// containing at least one dot.
fn is_valid_email(s: &str) -> bool {
    let mut parts = s.splitn(2, '@');
    match (parts.next(), parts.next()) {
        (Some(local), Some(domain)) => {
            !local.is_empty() && !domain.is_empty() && domain.contains('.')
        }
        _ => false,
    }
}

/// Phone numbers are 10 or 11 ASCII digits with no separators.
fn is_valid_phone(s: &str) -> bool {
    (s.len() == 10 || s.len() == 11) && s.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for ContactChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ContactChannel {
    type Err = ChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ContactChannel {
    type Error = ChannelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ContactChannel> for String {
    fn from(channel: ContactChannel) -> Self {
        channel.into_inner()
    }
}
