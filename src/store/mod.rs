//! SQLite storage for contacts.
//!
//! [`ContactStore`] is synchronous and opens a fresh connection for every
//! operation. Async callers reach it through
//! [`SqliteContactRepository`](crate::repositories::SqliteContactRepository),
//! which runs each call on the blocking thread pool.

mod contact_store;
pub mod schema;

pub use contact_store::ContactStore;
pub use schema::init_schema;
