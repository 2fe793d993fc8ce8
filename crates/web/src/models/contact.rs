//! Contact record and registration-form validation.

use core::fmt;

use contato_core::{Cep, ContactChannel, ContactId, Uf};
use serde::{Deserialize, Serialize};

/// Minimum length of a contact name, in characters.
const MIN_NAME_LENGTH: usize = 3;

/// A registered contact.
///
/// Records are immutable once appended to the store; there is no update or
/// delete lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email_or_phone: ContactChannel,
    pub cep: Cep,
    pub street: String,
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub uf: Uf,
}

/// Raw registration-form fields, prior to validation.
///
/// Every field deserializes to an empty string when absent so a partial form
/// submission still produces a draft that validation can report on.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email_or_phone: String,
    #[serde(default)]
    pub cep: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub complement: String,
    #[serde(default)]
    pub neighborhood: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub uf: String,
}

/// Field-scoped validation messages for the registration form.
///
/// `None` means the field passed. Messages are rendered next to their fields,
/// so each one stands alone without naming the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: Option<String>,
    pub email_or_phone: Option<String>,
    pub cep: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub uf: Option<String>,
}

impl ValidationErrors {
    /// Returns `true` when every field passed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email_or_phone.is_none()
            && self.cep.is_none()
            && self.street.is_none()
            && self.number.is_none()
            && self.neighborhood.is_none()
            && self.city.is_none()
            && self.uf.is_none()
    }

    /// Iterate the populated field messages in form order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        [
            ("name", self.name.as_deref()),
            ("email_or_phone", self.email_or_phone.as_deref()),
            ("cep", self.cep.as_deref()),
            ("street", self.street.as_deref()),
            ("number", self.number.as_deref()),
            ("neighborhood", self.neighborhood.as_deref()),
            ("city", self.city.as_deref()),
            ("uf", self.uf.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, message)| message.map(|m| (field, m)))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.entries() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl ContactDraft {
    /// Validate the draft and build a contact with a fresh id.
    ///
    /// All fields are checked in one pass so every invalid field carries its
    /// message in the result, not just the first failure.
    ///
    /// # Errors
    ///
    /// Returns the field-scoped messages when any field is invalid.
    pub fn validate(&self) -> Result<Contact, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.name.chars().count() < MIN_NAME_LENGTH {
            errors.name = Some(format!(
                "Name must have at least {MIN_NAME_LENGTH} characters"
            ));
        }

        let email_or_phone = match ContactChannel::parse(&self.email_or_phone) {
            Ok(channel) => Some(channel),
            Err(_) => {
                errors.email_or_phone =
                    Some("Enter a valid email or a 10-11 digit phone number".to_string());
                None
            }
        };

        let cep = match Cep::parse(&self.cep) {
            Ok(cep) => Some(cep),
            Err(e) => {
                errors.cep = Some(e.to_string());
                None
            }
        };

        if self.street.is_empty() {
            errors.street = Some("Street is required".to_string());
        }
        if self.number.is_empty() {
            errors.number = Some("Number is required".to_string());
        }
        if self.neighborhood.is_empty() {
            errors.neighborhood = Some("Neighborhood is required".to_string());
        }
        if self.city.is_empty() {
            errors.city = Some("City is required".to_string());
        }

        let uf = match Uf::parse(&self.uf) {
            Ok(uf) => Some(uf),
            Err(e) => {
                errors.uf = Some(e.to_string());
                None
            }
        };

        match (email_or_phone, cep, uf) {
            (Some(email_or_phone), Some(cep), Some(uf)) if errors.is_empty() => Ok(Contact {
                id: ContactId::new(),
                name: self.name.clone(),
                email_or_phone,
                cep,
                street: self.street.clone(),
                number: self.number.clone(),
                complement: (!self.complement.is_empty()).then(|| self.complement.clone()),
                neighborhood: self.neighborhood.clone(),
                city: self.city.clone(),
                uf,
            }),
            _ => Err(errors),
        }
    }
}
