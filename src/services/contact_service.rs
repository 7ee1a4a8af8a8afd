//! Contact service layer.
//!
//! Business logic for listing, creating, editing and deleting contacts.

use crate::domain::{ContactId, FieldErrors};
use crate::error::StoreResult;
use crate::models::{Contact, ContactForm, Flash, NewContact};
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Message shown when an edit or delete targets a missing contact.
pub const CONTACT_NOT_FOUND: &str = "Contact not found.";

/// Result of submitting a create or edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The contact was written. Redirect to the list with this flash.
    Saved(Flash),

    /// Validation failed and nothing was written. Show the form again.
    Rejected(FieldErrors),

    /// The target contact does not exist.
    NotFound(Flash),
}

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// All contacts ordered by name.
    async fn list_contacts(&self) -> StoreResult<Vec<Contact>>;

    /// Fetch a contact for the edit form.
    async fn get_contact(&self, id: ContactId) -> StoreResult<Option<Contact>>;

    /// Validate and insert a new contact.
    async fn create_contact(&self, form: &ContactForm) -> StoreResult<SubmitOutcome>;

    /// Validate and overwrite an existing contact.
    ///
    /// A missing contact is reported before validation runs.
    async fn update_contact(&self, id: ContactId, form: &ContactForm)
        -> StoreResult<SubmitOutcome>;

    /// Delete a contact, returning the flash to show afterwards.
    async fn delete_contact(&self, id: ContactId) -> StoreResult<Flash>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    repository: Arc<dyn ContactRepository>,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }

    fn not_found() -> Flash {
        Flash::error(CONTACT_NOT_FOUND)
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn list_contacts(&self) -> StoreResult<Vec<Contact>> {
        self.repository.list().await
    }

    async fn get_contact(&self, id: ContactId) -> StoreResult<Option<Contact>> {
        self.repository.get(id).await
    }

    async fn create_contact(&self, form: &ContactForm) -> StoreResult<SubmitOutcome> {
        let contact = match NewContact::from_form(form) {
            Ok(contact) => contact,
            Err(errors) => {
                debug!(errors = errors.len(), "create rejected by validation");
                return Ok(SubmitOutcome::Rejected(errors));
            }
        };

        let id = self.repository.create(&contact).await?;
        info!(contact_id = %id, "contact created");

        Ok(SubmitOutcome::Saved(Flash::success(format!(
            "Contact \"{}\" added successfully!",
            contact.name
        ))))
    }

    async fn update_contact(
        &self,
        id: ContactId,
        form: &ContactForm,
    ) -> StoreResult<SubmitOutcome> {
        if self.repository.get(id).await?.is_none() {
            return Ok(SubmitOutcome::NotFound(Self::not_found()));
        }

        let contact = match NewContact::from_form(form) {
            Ok(contact) => contact,
            Err(errors) => {
                debug!(contact_id = %id, errors = errors.len(), "update rejected by validation");
                return Ok(SubmitOutcome::Rejected(errors));
            }
        };

        // Row may have been deleted since the lookup
        if !self.repository.update(id, &contact).await? {
            return Ok(SubmitOutcome::NotFound(Self::not_found()));
        }
        info!(contact_id = %id, "contact updated");

        Ok(SubmitOutcome::Saved(Flash::success(format!(
            "Contact \"{}\" updated successfully!",
            contact.name
        ))))
    }

    async fn delete_contact(&self, id: ContactId) -> StoreResult<Flash> {
        let Some(contact) = self.repository.get(id).await? else {
            return Ok(Self::not_found());
        };

        if !self.repository.delete(id).await? {
            return Ok(Self::not_found());
        }
        info!(contact_id = %id, "contact deleted");

        Ok(Flash::success(format!(
            "Contact \"{}\" deleted successfully!",
            contact.name
        )))
    }
}
