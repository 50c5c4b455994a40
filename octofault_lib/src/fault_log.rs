//! SQLite storage for API faults.
//!
//! Each fault is stored as the serde JSON of its [`ApiException`] and
//! reconstructed on read, so only the status code and decoded error survive.
//! `status_code` and `message` are duplicated into columns for ad-hoc queries.

use std::path::Path;

use chrono::{DateTime, Utc};
use octofault_api::ApiException;
use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub enum FaultLogError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("date parse error: {0}")]
    Date(#[from] chrono::ParseError),
}

/// A fault read back from the log.
#[derive(Serialize, Debug)]
pub struct FaultRecord {
    pub id: i64,
    pub recorded_at: DateTime<Utc>,
    /// Where the fault came from (request path, file name, "stdin").
    pub source: String,
    pub exception: ApiException,
}

pub struct FaultLog {
    conn: Connection,
}

impl FaultLog {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FaultLogError> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )?;
        Ok(Self { conn })
    }

    /// Open an in-memory log (for testing).
    pub fn open_in_memory() -> Result<Self, FaultLogError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    pub fn init(&self) -> Result<(), FaultLogError> {
        let schema = include_str!("../../schema/fault_log.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Stores a fault and returns its row id.
    pub fn record(&self, exception: &ApiException, source: &str) -> Result<i64, FaultLogError> {
        let payload = serde_json::to_string(exception)?;
        self.conn.execute(
            "INSERT INTO faults (recorded_at, source, status_code, message, payload)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                Utc::now().to_rfc3339(),
                source,
                exception.status_code(),
                exception.api_error().message,
                payload,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!("Recorded fault {} from {}", id, source);
        Ok(id)
    }

    pub fn get(&self, id: i64) -> Result<Option<FaultRecord>, FaultLogError> {
        let row = self
            .conn
            .query_row(
                "SELECT id, recorded_at, source, payload FROM faults WHERE id = ?1",
                params![id],
                read_row,
            )
            .optional()?;
        row.map(decode_row).transpose()
    }

    /// Most recent faults first. Rows whose payload no longer decodes are skipped.
    pub fn recent(&self, limit: usize) -> Result<Vec<FaultRecord>, FaultLogError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, recorded_at, source, payload FROM faults ORDER BY id DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit as i64], read_row)?;

        let mut records = Vec::new();
        for row in rows {
            let row = row?;
            let id = row.id;
            match decode_row(row) {
                Ok(record) => records.push(record),
                Err(e) => tracing::warn!("Skipping undecodable fault {}: {}", id, e),
            }
        }
        Ok(records)
    }

    pub fn count(&self) -> Result<i64, FaultLogError> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM faults", [], |row| row.get(0))?;
        Ok(count)
    }
}

struct RawRow {
    id: i64,
    recorded_at: String,
    source: String,
    payload: String,
}

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawRow> {
    Ok(RawRow {
        id: row.get(0)?,
        recorded_at: row.get(1)?,
        source: row.get(2)?,
        payload: row.get(3)?,
    })
}

fn decode_row(row: RawRow) -> Result<FaultRecord, FaultLogError> {
    Ok(FaultRecord {
        id: row.id,
        recorded_at: DateTime::parse_from_rfc3339(&row.recorded_at)?.with_timezone(&Utc),
        source: row.source,
        exception: serde_json::from_str(&row.payload)?,
    })
}
