// SQLite storage for per-document predictions
use crate::types::Result;
use rusqlite::{params, Connection, Transaction};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// One row of the `documents` table. Paths are not unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRow {
    pub path: String,
    pub label: String,
    pub meta: String,
}

pub struct DocumentStore {
    conn: Connection,
}

impl DocumentStore {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::create_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::create_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Create-if-absent; an existing table is never dropped or altered.
    fn create_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS documents (path TEXT, label TEXT, meta TEXT);",
        )?;
        Ok(())
    }

    /// Start a batch of inserts that becomes visible only on `commit`.
    pub fn writer(&mut self) -> Result<StoreWriter<'_>> {
        Ok(StoreWriter {
            tx: self.conn.transaction()?,
            written: 0,
        })
    }

    pub fn list_rows(&self) -> Result<Vec<StoredRow>> {
        let mut stmt = self
            .conn
            .prepare("SELECT path, label, meta FROM documents ORDER BY rowid")?;

        let rows = stmt.query_map([], |row| {
            Ok(StoredRow {
                path: row.get(0)?,
                label: row.get(1)?,
                meta: row.get(2)?,
            })
        })?;

        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub fn count(&self) -> Result<usize> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM documents", [], |row| row.get(0))?;
        Ok(n as usize)
    }

    /// Rows per label, alphabetical by label.
    pub fn label_counts(&self) -> Result<Vec<(String, usize)>> {
        let mut stmt = self.conn.prepare(
            "SELECT label, COUNT(*) FROM documents GROUP BY label ORDER BY label",
        )?;

        let counts = stmt.query_map([], |row| {
            let n: i64 = row.get(1)?;
            Ok((row.get::<_, String>(0)?, n as usize))
        })?;

        Ok(counts.collect::<std::result::Result<Vec<_>, _>>()?)
    }
}

/// Pending inserts; dropping without `commit` rolls everything back.
pub struct StoreWriter<'a> {
    tx: Transaction<'a>,
    written: usize,
}

impl StoreWriter<'_> {
    pub fn append(&mut self, row: &StoredRow) -> Result<()> {
        self.tx.execute(
            "INSERT INTO documents (path, label, meta) VALUES (?1, ?2, ?3)",
            params![row.path, row.label, row.meta],
        )?;
        self.written += 1;
        debug!(path = %row.path, label = %row.label, "row appended");
        Ok(())
    }

    pub fn commit(self) -> Result<usize> {
        self.tx.commit()?;
        Ok(self.written)
    }
}
