//! Contact Manager - a small web application for keeping an address book.
//!
//! Contacts (name, email, optional phone) live in a single SQLite table and
//! are managed through server-rendered HTML forms with field validation and
//! one-shot flash messages.
//!
//! # Architecture
//!
//! - **domain**: Value objects and field validation
//! - **models**: Contact records, form input and flash messages
//! - **store**: Schema setup and synchronous SQLite access
//! - **repositories**: Async storage abstraction over the store
//! - **services**: Business rules for the CRUD operations
//! - **server**: axum router, handlers and HTML views
//! - **config**: Configuration from environment variables
//! - **error**: Error types

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;
pub mod store;

pub use config::Config;
pub use domain::{validate_contact, ContactId, EmailAddress, Field, FieldErrors, PhoneNumber};
pub use error::{ConfigError, StoreError};
pub use models::{Contact, ContactForm, Flash, FlashKind, NewContact};
pub use repositories::{ContactRepository, SqliteContactRepository};
pub use server::{build_router, AppState};
pub use services::{ContactService, ContactServiceImpl, SubmitOutcome};
pub use store::ContactStore;

use axum_extra::extract::cookie::Key;
use std::sync::Arc;

/// Initialize the schema at `config.database_path` and build the router.
///
/// The flash cookie key is generated per process, so a flash still in flight
/// across a restart is dropped.
pub fn build_app(config: &Config) -> Result<axum::Router, StoreError> {
    let store = ContactStore::new(config.database_path.clone());
    store.init()?;

    let repository = Arc::new(SqliteContactRepository::new(store)) as Arc<dyn ContactRepository>;
    let service = Arc::new(ContactServiceImpl::new(repository)) as Arc<dyn ContactService>;
    Ok(build_router(AppState::new(service, Key::generate())))
}
