//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[\d\s\-()]{6,15}$").expect("phone pattern is valid"));

/// A type-safe wrapper for phone numbers.
///
/// An optional leading `+` followed by 6 to 15 digits, spaces, hyphens or
/// parentheses.
///
/// # Example
///
/// ```
/// use contact_manager::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+1 (555) 1234").unwrap();
/// assert_eq!(phone.as_str(), "+1 (555) 1234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Wrap a string that already passed [`validate_contact`](super::validate_contact).
    pub(crate) fn from_checked(phone: String) -> Self {
        debug_assert!(Self::is_valid(&phone));
        Self(phone)
    }

    /// Check a phone string against the pattern.
    pub fn is_valid(phone: &str) -> bool {
        PHONE_PATTERN.is_match(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
