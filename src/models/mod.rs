//! Data models for contacts and user feedback.
//!
//! This module contains the stored contact record, the raw form submission,
//! the validated input written to the store and flash messages.

pub mod contact;
pub mod flash;

pub use contact::{Contact, ContactForm, NewContact};
pub use flash::{Flash, FlashKind};
