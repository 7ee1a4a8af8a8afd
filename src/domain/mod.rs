//! Domain value objects and field validation.
//!
//! This module contains type-safe wrappers for contact ids, email addresses
//! and phone numbers, plus the form validator that reports per-field errors
//! for a submitted contact.

pub mod contact_id;
pub mod email;
pub mod errors;
pub mod phone;
pub mod validation;

pub use contact_id::ContactId;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
pub use validation::{validate_contact, Field, FieldErrors};
