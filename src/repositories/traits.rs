use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::{Contact, NewContact};
use async_trait::async_trait;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage so services can be exercised
/// against SQLite or an in-memory mock.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Retrieve a single contact by ID. `None` when it does not exist.
    async fn get(&self, id: ContactId) -> StoreResult<Option<Contact>>;

    /// Retrieve all contacts ordered by name.
    async fn list(&self) -> StoreResult<Vec<Contact>>;

    /// Create a new contact and return its id.
    async fn create(&self, contact: &NewContact) -> StoreResult<ContactId>;

    /// Update an existing contact. Returns `false` if nothing matched.
    async fn update(&self, id: ContactId, contact: &NewContact) -> StoreResult<bool>;

    /// Delete a contact. Returns `false` if nothing matched.
    async fn delete(&self, id: ContactId) -> StoreResult<bool>;
}
