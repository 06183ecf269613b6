use super::ItemStore;
use crate::error::{FridgeError, Result};
use crate::model::{Item, DATE_FORMAT};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use tracing::debug;

const CREATE_TABLE_SQL: &str = "
    CREATE TABLE IF NOT EXISTS fridge (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        quantity NUMBER NOT NULL,
        expiration_date DATETIME,
        last_changed DATETIME DEFAULT CURRENT_TIMESTAMP
    );";

const CREATE_TRIGGER_SQL: &str = "
    CREATE TRIGGER IF NOT EXISTS update_last_changed
    AFTER UPDATE ON fridge
    FOR EACH ROW
    BEGIN
        UPDATE fridge SET last_changed = CURRENT_TIMESTAMP WHERE id = OLD.id;
    END;";

const SELECT_COLUMNS: &str = "SELECT id, name, quantity, expiration_date, last_changed FROM fridge";

/// SQLite's `CURRENT_TIMESTAMP` text layout.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database file and make sure the schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening fridge database");
        Self::init_with_connection(Connection::open(path)?)
    }

    /// Fresh, private database. Used by tests.
    pub fn open_in_memory() -> Result<Self> {
        Self::init_with_connection(Connection::open_in_memory()?)
    }

    fn init_with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(CREATE_TABLE_SQL)?;
        conn.execute_batch(CREATE_TRIGGER_SQL)?;
        Ok(Self { conn })
    }

    fn item_from_row(row: &Row<'_>) -> rusqlite::Result<Item> {
        let expiration: String = row.get(3)?;
        let last_changed: String = row.get(4)?;
        Ok(Item {
            id: row.get(0)?,
            name: row.get(1)?,
            quantity: row.get(2)?,
            expiration_date: parse_column(3, &expiration, parse_stored_date)?,
            last_changed: parse_column(4, &last_changed, parse_stored_timestamp)?,
        })
    }
}

fn parse_column<T>(
    idx: usize,
    raw: &str,
    parse: fn(&str) -> std::result::Result<T, chrono::ParseError>,
) -> rusqlite::Result<T> {
    parse(raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Dates are written as `YYYY-MM-DD`, but rows written by other tools may carry a time.
fn parse_stored_date(raw: &str) -> std::result::Result<NaiveDate, chrono::ParseError> {
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT)
}

fn parse_stored_timestamp(raw: &str) -> std::result::Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.fZ"))
}

impl ItemStore for SqliteStore {
    fn add(&mut self, name: &str, quantity: f64, expiration_date: NaiveDate) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO fridge (name, quantity, expiration_date) VALUES (?1, ?2, ?3)",
            params![
                name,
                quantity,
                expiration_date.format(DATE_FORMAT).to_string()
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn list_all(&self) -> Result<Vec<Item>> {
        let mut stmt = self.conn.prepare(SELECT_COLUMNS)?;
        let items = stmt
            .query_map([], Self::item_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }

    fn get_by_id(&self, id: i64) -> Result<Item> {
        let sql = format!("{SELECT_COLUMNS} WHERE id = ?1");
        self.conn
            .query_row(&sql, params![id], Self::item_from_row)
            .optional()?
            .ok_or(FridgeError::NotFound(id))
    }

    fn remove(&mut self, id: i64) -> Result<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM fridge WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }
}
