//! ContactId value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A type-safe wrapper for contact row ids.
///
/// SQLite assigns ids starting at 1, so only positive values are accepted.
///
/// # Example
///
/// ```
/// use contact_manager::domain::ContactId;
///
/// let id: ContactId = "42".parse().unwrap();
/// assert_eq!(id.get(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(i64);

impl ContactId {
    /// Create a new ContactId, validating that it is positive.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidId` for zero or negative values.
    pub fn new(id: i64) -> Result<Self, ValidationError> {
        if id <= 0 {
            return Err(ValidationError::InvalidId(id.to_string()));
        }
        Ok(Self(id))
    }

    /// Get the raw row id.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for ContactId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidId(s.to_string()))?;
        Self::new(id)
    }
}

// Serde support - serialize as integer
impl Serialize for ContactId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from integer with validation
impl<'de> Deserialize<'de> for ContactId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = i64::deserialize(deserializer)?;
        ContactId::new(id).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
