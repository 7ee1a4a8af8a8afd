use crate::domain::ContactId;
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, NewContact};
use crate::repositories::traits::ContactRepository;
use crate::store::ContactStore;
use async_trait::async_trait;
use std::sync::Arc;

/// Contact repository backed by a SQLite file.
///
/// `rusqlite` is blocking, so every call runs on tokio's blocking pool via
/// `spawn_blocking` and opens its own connection there.
#[derive(Clone)]
pub struct SqliteContactRepository {
    store: Arc<ContactStore>,
}

impl SqliteContactRepository {
    /// Create a new repository over the given store.
    pub fn new(store: ContactStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Run a blocking store operation off the async runtime.
    async fn run<T, F>(&self, op: F) -> StoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&ContactStore) -> StoreResult<T> + Send + 'static,
    {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || op(&store))
            .await
            .map_err(|e| StoreError::TaskJoin(e.to_string()))?
    }
}

#[async_trait]
impl ContactRepository for SqliteContactRepository {
    async fn get(&self, id: ContactId) -> StoreResult<Option<Contact>> {
        self.run(move |store| store.get(id)).await
    }

    async fn list(&self) -> StoreResult<Vec<Contact>> {
        self.run(|store| store.list_by_name()).await
    }

    async fn create(&self, contact: &NewContact) -> StoreResult<ContactId> {
        let contact = contact.clone();
        self.run(move |store| store.insert(&contact)).await
    }

    async fn update(&self, id: ContactId, contact: &NewContact) -> StoreResult<bool> {
        let contact = contact.clone();
        self.run(move |store| store.update(id, &contact)).await
    }

    async fn delete(&self, id: ContactId) -> StoreResult<bool> {
        self.run(move |store| store.delete(id)).await
    }
}
