//! Application service layer.
//!
//! Services hold the business rules: validation, not-found handling and the
//! feedback shown to the user. HTTP handlers only translate their outcomes
//! into pages and redirects.

mod contact_service;

pub use contact_service::{
    ContactService, ContactServiceImpl, SubmitOutcome, CONTACT_NOT_FOUND,
};
