use async_trait::async_trait;
use contact_manager::domain::ContactId;
use contact_manager::error::{StoreError, StoreResult};
use contact_manager::models::{Contact, NewContact};
use contact_manager::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// easily configured with test data and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<HashMap<ContactId, Contact>>>,
    next_id: Arc<Mutex<i64>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    failing: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(Mutex::new(1)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Add a contact directly, bypassing validation. Returns its id.
    pub fn add_contact(&self, name: &str, email: &str, phone: Option<&str>) -> ContactId {
        let id = self.allocate_id();
        let contact = Contact {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.map(str::to_string),
        };
        self.contacts.lock().unwrap().insert(id, contact);
        id
    }

    /// Snapshot of a stored contact.
    pub fn stored(&self, id: ContactId) -> Option<Contact> {
        self.contacts.lock().unwrap().get(&id).cloned()
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    /// Make every subsequent call fail with a storage error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn allocate_id(&self) -> ContactId {
        let mut next = self.next_id.lock().unwrap();
        let id = ContactId::new(*next).unwrap();
        *next += 1;
        id
    }

    fn track_call(&self, method: &str) -> StoreResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::TaskJoin("mock failure".to_string()));
        }
        Ok(())
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn get(&self, id: ContactId) -> StoreResult<Option<Contact>> {
        self.track_call("get")?;
        Ok(self.stored(id))
    }

    async fn list(&self) -> StoreResult<Vec<Contact>> {
        self.track_call("list")?;

        let contacts = self.contacts.lock().unwrap();
        let mut result: Vec<Contact> = contacts.values().cloned().collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }

    async fn create(&self, contact: &NewContact) -> StoreResult<ContactId> {
        self.track_call("create")?;
        Ok(self.add_contact(
            &contact.name,
            contact.email.as_str(),
            contact.phone_str(),
        ))
    }

    async fn update(&self, id: ContactId, contact: &NewContact) -> StoreResult<bool> {
        self.track_call("update")?;

        let mut contacts = self.contacts.lock().unwrap();
        match contacts.get_mut(&id) {
            Some(existing) => {
                existing.name = contact.name.clone();
                existing.email = contact.email.as_str().to_string();
                existing.phone = contact.phone_str().map(str::to_string);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ContactId) -> StoreResult<bool> {
        self.track_call("delete")?;
        Ok(self.contacts.lock().unwrap().remove(&id).is_some())
    }
}
