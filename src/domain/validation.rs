//! Field validation for submitted contacts.

use super::email::EmailAddress;
use super::phone::PhoneNumber;
use std::fmt;

/// A contact form field that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl Field {
    /// Form field name, as submitted by the browser.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }

    /// Capitalized label used in user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field error messages, kept in the order the checks ran.
///
/// An empty value means the input is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(Field, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field, replacing any earlier one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        let message = message.into();
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = message,
            None => self.entries.push((field, message)),
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// User-facing lines of the form `Name: Name is required.`
    pub fn messages(&self) -> Vec<String> {
        self.iter()
            .map(|(field, msg)| format!("{}: {}", field.label(), msg))
            .collect()
    }
}

/// Validate the three contact fields.
///
/// - name must be non-blank
/// - email must be non-blank and match the loose `x@y.z` shape
/// - phone, when non-empty, must match the phone pattern
///
/// Returns an empty [`FieldErrors`] when everything passes.
pub fn validate_contact(name: &str, email: &str, phone: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required.");
    }

    if email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required.");
    } else if !EmailAddress::is_valid(email) {
        errors.insert(Field::Email, "Invalid email format.");
    }

    if !phone.is_empty() && !PhoneNumber::is_valid(phone) {
        errors.insert(Field::Phone, "Invalid phone number format.");
    }

    errors
}
