//! Contact model representing a person in the address book.

use crate::domain::{validate_contact, ContactId, EmailAddress, FieldErrors, PhoneNumber};
use serde::{Deserialize, Serialize};

/// A contact as stored in the `contacts` table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Contact {
    /// Row id assigned by SQLite
    pub id: ContactId,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Phone number, if one was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Raw contact fields as submitted by an HTML form.
///
/// Fields the browser leaves out decode as empty strings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Copy of the form with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
        }
    }
}

impl From<&Contact> for ContactForm {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone().unwrap_or_default(),
        }
    }
}

/// Validated contact fields, ready to insert or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: EmailAddress,
    pub phone: Option<PhoneNumber>,
}

impl NewContact {
    /// Trim and validate a form submission.
    ///
    /// # Errors
    ///
    /// Returns the per-field errors when any check fails. Nothing is built
    /// unless every field passes.
    pub fn from_form(form: &ContactForm) -> Result<Self, FieldErrors> {
        let form = form.trimmed();
        let errors = validate_contact(&form.name, &form.email, &form.phone);
        if !errors.is_empty() {
            return Err(errors);
        }

        let phone = if form.phone.is_empty() {
            None
        } else {
            Some(PhoneNumber::from_checked(form.phone))
        };

        Ok(Self {
            name: form.name,
            email: EmailAddress::from_checked(form.email),
            phone,
        })
    }

    pub fn phone_str(&self) -> Option<&str> {
        self.phone.as_ref().map(PhoneNumber::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Field;

    #[test]
    fn test_form_trimmed() {
        let form = ContactForm::new("  Ann Lee ", " ann@example.com\n", " 555-1234 ");
        let trimmed = form.trimmed();
        assert_eq!(trimmed.name, "Ann Lee");
        assert_eq!(trimmed.email, "ann@example.com");
        assert_eq!(trimmed.phone, "555-1234");
    }

    #[test]
    fn test_new_contact_from_valid_form() {
        let form = ContactForm::new(" Ann Lee ", "ann@example.com", " 555-1234");
        let contact = NewContact::from_form(&form).unwrap();
        assert_eq!(contact.name, "Ann Lee");
        assert_eq!(contact.email.as_str(), "ann@example.com");
        assert_eq!(contact.phone_str(), Some("555-1234"));
    }

    #[test]
    fn test_new_contact_empty_phone_is_none() {
        let form = ContactForm::new("Ann", "ann@example.com", "   ");
        let contact = NewContact::from_form(&form).unwrap();
        assert_eq!(contact.phone, None);
    }

    #[test]
    fn test_new_contact_value_objects_match_constructors() {
        let form = ContactForm::new("Ann", " a@b.c@d ", "+1 (555) 1234");
        let contact = NewContact::from_form(&form).unwrap();
        assert_eq!(contact.email, EmailAddress::new("a@b.c@d").unwrap());
        assert_eq!(contact.phone, Some(PhoneNumber::new("+1 (555) 1234").unwrap()));
    }

    #[test]
    fn test_new_contact_from_invalid_form() {
        let form = ContactForm::new("", "ann", "bad");
        let errors = NewContact::from_form(&form).unwrap_err();
        assert!(errors.contains(Field::Name));
        assert!(errors.contains(Field::Email));
        assert!(errors.contains(Field::Phone));
    }

    #[test]
    fn test_form_from_contact() {
        let contact = Contact {
            id: ContactId::new(1).unwrap(),
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            phone: None,
        };
        let form = ContactForm::from(&contact);
        assert_eq!(form, ContactForm::new("Ann", "ann@example.com", ""));
    }

    #[test]
    fn test_contact_serialization_skips_missing_phone() {
        let contact = Contact {
            id: ContactId::new(3).unwrap(),
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            phone: None,
        };
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["id"], 3);
        assert!(json.get("phone").is_none());
    }
}
