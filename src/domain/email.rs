//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

/// Loose `local@domain.tld` shape. Anchored at the start only, so anything
/// may follow the first match.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("email pattern is valid"));

/// A type-safe wrapper for email addresses.
///
/// Validation is deliberately loose: one or more non-`@` characters, an `@`,
/// then a domain containing a dot. It is not RFC 5322.
///
/// # Example
///
/// ```
/// use contact_manager::domain::EmailAddress;
///
/// let email = EmailAddress::new("user@example.com").unwrap();
/// assert_eq!(email.as_str(), "user@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Wrap a string that already passed [`validate_contact`](super::validate_contact).
    pub(crate) fn from_checked(email: String) -> Self {
        debug_assert!(Self::is_valid(&email));
        Self(email)
    }

    /// Check an email string against the loose pattern.
    pub fn is_valid(email: &str) -> bool {
        EMAIL_PATTERN.is_match(email)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
