//! Table definitions.

use crate::error::StoreResult;
use rusqlite::Connection;

/// DDL for the single `contacts` table.
pub const CONTACTS_TABLE_SQL: &str = "
CREATE TABLE IF NOT EXISTS contacts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT
);
";

/// Create the `contacts` table if it does not exist yet.
///
/// Safe to run on every startup.
pub fn init_schema(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(CONTACTS_TABLE_SQL)?;
    Ok(())
}
