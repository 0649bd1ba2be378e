// src/store.rs
use std::path::Path;

use rusqlite::{Connection, ErrorCode, OpenFlags, params};

use crate::config::consts::TABLE;
use crate::error::{Result, ScrapeError};
use crate::roster::Character;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS characters(\
    characterId TEXT PRIMARY KEY, \
    name TEXT, \
    slugUrl TEXT, \
    role TEXT, \
    difficulty TEXT, \
    inclusion TEXT, \
    description TEXT, \
    releaseDate TEXT, \
    imageBase64 TEXT)";

const INSERT: &str = "INSERT INTO characters \
    (characterId, name, slugUrl, role, difficulty, inclusion, description, releaseDate, imageBase64) \
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";

const SELECT_ALL: &str = "SELECT characterId, name, slugUrl, role, difficulty, inclusion, \
    description, releaseDate, imageBase64 FROM characters ORDER BY rowid";

/// SQLite-backed character table. The connection closes when this drops.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) the database file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        Ok(Self { conn })
    }

    /// Open a database file that must already exist. Never creates one.
    pub fn open_existing(path: impl AsRef<Path>) -> Result<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path.as_ref(), flags)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self { conn: Connection::open_in_memory()? })
    }

    pub fn ensure_schema(&self) -> Result<()> {
        self.conn.execute(CREATE_TABLE, [])?;
        Ok(())
    }

    /// Insert every character, in order, as one transaction.
    /// A duplicate id fails with `Constraint`; nothing from the batch is kept.
    pub fn write_all(&mut self, characters: &[Character]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(INSERT)?;
            for c in characters {
                stmt.execute(params![
                    c.id,
                    c.name,
                    c.slug,
                    c.role,
                    c.difficulty,
                    c.inclusion,
                    c.description,
                    c.release_date,
                    c.image_data,
                ])
                .map_err(|e| insert_error(e, &c.id))?;
            }
        }
        // Dropping `tx` on any early return above rolls back
        tx.commit()?;
        logf!("Store: wrote {} rows to {TABLE}", characters.len());
        Ok(characters.len())
    }

    /// Every stored row in insertion order.
    pub fn load_all(&self) -> Result<Vec<Character>> {
        let mut stmt = self.conn.prepare(SELECT_ALL)?;
        let rows = stmt.query_map([], |row| {
            Ok(Character {
                id: row.get(0)?,
                name: text(row, 1)?,
                slug: text(row, 2)?,
                role: text(row, 3)?,
                difficulty: text(row, 4)?,
                inclusion: text(row, 5)?,
                description: text(row, 6)?,
                release_date: text(row, 7)?,
                image_data: text(row, 8)?,
            })
        })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    pub fn count(&self) -> Result<usize> {
        let n: i64 = self.conn.query_row("SELECT COUNT(*) FROM characters", [], |r| r.get(0))?;
        Ok(n as usize)
    }
}

/// Columns other than the key are nullable in the schema; read NULL as "".
fn text(row: &rusqlite::Row<'_>, ix: usize) -> rusqlite::Result<String> {
    Ok(row.get::<_, Option<String>>(ix)?.unwrap_or_default())
}

fn insert_error(e: rusqlite::Error, id: &str) -> ScrapeError {
    match e.sqlite_error_code() {
        Some(ErrorCode::ConstraintViolation) => {
            loge!("Store: duplicate characterId {id}");
            ScrapeError::Constraint { id: s!(id) }
        }
        _ => ScrapeError::Storage(e),
    }
}
