//! The database connection used by the cleanup lesson.
//!
//! Connecting never creates a file. With the placeholder path there is
//! nothing to open, so the lesson sees an error and log-terminates.

use rusqlite::{Connection, OpenFlags};
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::Result;

pub const PLACEHOLDER_DB_PATH: &str = "/var/lib/ramp-up/users.db";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DbSettings {
    pub path: PathBuf,
    pub read_only: bool,
}

impl Default for DbSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(PLACEHOLDER_DB_PATH),
            read_only: false,
        }
    }
}

impl DbSettings {
    fn open_flags(&self) -> OpenFlags {
        let access = if self.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE
        };
        access | OpenFlags::SQLITE_OPEN_NO_MUTEX
    }
}

/// Opens an existing database file.
pub fn connect(settings: &DbSettings) -> Result<Connection> {
    tracing::debug!(path = %settings.path.display(), "connecting");
    let conn = Connection::open_with_flags(&settings.path, settings.open_flags())?;
    // Opening is lazy; touch the schema so a bad file fails here.
    conn.query_row("SELECT count(*) FROM sqlite_master", [], |row| {
        row.get::<_, i64>(0)
    })?;
    Ok(conn)
}

/// Closes explicitly so a failed close is reported instead of swallowed by `Drop`.
pub fn close(conn: Connection) -> Result<()> {
    conn.close().map_err(|(_, err)| err.into())
}
