use crate::error::{CliError, Result};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, OptionalExtension, params};
use std::path::Path;

pub const RECENTS_KEY: &str = "history.recentlyOpenedPathsList";

/// Read-only view of the editor's `state.vscdb` key-value store.
pub struct StateDb {
    conn: Connection,
}

impl StateDb {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "connecting to global state database");
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(CliError::DatabaseError)?;
        Ok(StateDb { conn })
    }

    /// Raw value stored under `key`, if any
    pub fn get_value(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM ItemTable WHERE key = ?1")?;
        let value = stmt
            .query_row(params![key], |row| {
                // values are usually TEXT, older stores wrote BLOBs
                Ok(match row.get_ref(0)? {
                    ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
                        Some(String::from_utf8_lossy(bytes).into_owned())
                    }
                    ValueRef::Integer(i) => Some(i.to_string()),
                    ValueRef::Real(f) => Some(f.to_string()),
                    ValueRef::Null => None,
                })
            })
            .optional()?;
        Ok(value.flatten())
    }

    /// The `entries` array of the recently opened list
    pub fn recent_entries(&self) -> Result<Vec<serde_json::Value>> {
        let raw = self
            .get_value(RECENTS_KEY)?
            .ok_or_else(|| CliError::RecentsNotFound(RECENTS_KEY.to_string()))?;
        let mut list: serde_json::Value = serde_json::from_str(&raw)?;
        match list.get_mut("entries").map(serde_json::Value::take) {
            Some(serde_json::Value::Array(entries)) => {
                tracing::debug!(count = entries.len(), "found entries in global state database");
                Ok(entries)
            }
            _ => Err(CliError::RecentsNotFound(format!("{RECENTS_KEY}.entries"))),
        }
    }
}
