use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::{Contact, NewContact};
use crate::store::schema::init_schema;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Synchronous access to the `contacts` table.
///
/// Holds only the database path. Each method opens its own connection and
/// drops it before returning, so no handle outlives a single operation.
#[derive(Debug, Clone)]
pub struct ContactStore {
    path: PathBuf,
}

impl ContactStore {
    /// Create a store for the database file at `path`.
    ///
    /// The file is not touched until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a connection to the database file.
    pub fn connect(&self) -> StoreResult<Connection> {
        let conn = Connection::open(&self.path)?;
        Ok(conn)
    }

    /// Create the `contacts` table if needed.
    pub fn init(&self) -> StoreResult<()> {
        let conn = self.connect()?;
        init_schema(&conn)?;
        debug!(path = %self.path.display(), "contacts schema ready");
        Ok(())
    }

    /// All contacts, ordered by name.
    pub fn list_by_name(&self) -> StoreResult<Vec<Contact>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT id, name, email, phone FROM contacts ORDER BY name")?;
        let contacts = stmt
            .query_map([], contact_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(contacts)
    }

    /// Look up one contact.
    pub fn get(&self, id: ContactId) -> StoreResult<Option<Contact>> {
        let conn = self.connect()?;
        let contact = conn
            .query_row(
                "SELECT id, name, email, phone FROM contacts WHERE id = ?1",
                params![id.get()],
                contact_from_row,
            )
            .optional()?;
        Ok(contact)
    }

    /// Insert a contact and return its new id.
    pub fn insert(&self, contact: &NewContact) -> StoreResult<ContactId> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO contacts (name, email, phone) VALUES (?1, ?2, ?3)",
            params![contact.name, contact.email.as_str(), contact.phone_str()],
        )?;
        let id = id_from_sql(conn.last_insert_rowid())?;
        Ok(id)
    }

    /// Overwrite the fields of an existing contact.
    ///
    /// Returns `false` when no row has that id.
    pub fn update(&self, id: ContactId, contact: &NewContact) -> StoreResult<bool> {
        let conn = self.connect()?;
        let changed = conn.execute(
            "UPDATE contacts SET name = ?1, email = ?2, phone = ?3 WHERE id = ?4",
            params![
                contact.name,
                contact.email.as_str(),
                contact.phone_str(),
                id.get()
            ],
        )?;
        Ok(changed > 0)
    }

    /// Delete a contact.
    ///
    /// Returns `false` when no row has that id.
    pub fn delete(&self, id: ContactId) -> StoreResult<bool> {
        let conn = self.connect()?;
        let changed = conn.execute("DELETE FROM contacts WHERE id = ?1", params![id.get()])?;
        Ok(changed > 0)
    }
}

fn id_from_sql(raw: i64) -> rusqlite::Result<ContactId> {
    ContactId::new(raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Integer, Box::new(e)))
}

fn contact_from_row(row: &Row<'_>) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: id_from_sql(row.get("id")?)?,
        name: row.get("name")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
    })
}
