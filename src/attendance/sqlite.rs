//! SQLite-backed attendance store.
//! Used by: state, attendance::service.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, Row};

use crate::attendance::record::Attendance;
use crate::attendance::repository::AttendanceRepository;
use crate::error::Result;

pub const IN_MEMORY: &str = ":memory:";

// Timestamps are stored as microseconds since the epoch so that ordering is
// numeric rather than lexical.
const SCHEMA_SQL: &str = "
    CREATE TABLE IF NOT EXISTS attendances (
        id TEXT PRIMARY KEY,
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_attendances_created_at
        ON attendances (created_at DESC);";

const LIST_BY_RECENCY_SQL: &str =
    "SELECT id, created_at, updated_at FROM attendances ORDER BY created_at DESC, rowid DESC";

pub struct SqliteAttendanceStore {
    conn: Mutex<Connection>,
}

impl SqliteAttendanceStore {
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA_SQL)?;
        tracing::debug!(path, "attendance store ready");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::open(IN_MEMORY)
    }

    pub fn insert(&self, attendance: &Attendance) -> Result<()> {
        let conn = self.conn.lock()?;
        conn.execute(
            "INSERT INTO attendances (id, created_at, updated_at) VALUES (?1, ?2, ?3)",
            (
                attendance.id(),
                attendance.created_at().timestamp_micros(),
                attendance.updated_at().timestamp_micros(),
            ),
        )?;
        Ok(())
    }

    /// Round-trips a trivial query to confirm the connection is usable.
    pub fn ping(&self) -> Result<()> {
        let conn = self.conn.lock()?;
        conn.query_row("SELECT 1", [], |_| Ok(()))?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn execute_raw(&self, sql: &str) -> Result<()> {
        self.conn.lock()?.execute_batch(sql)?;
        Ok(())
    }

    /// Panics while holding the connection lock, leaving it poisoned.
    #[cfg(test)]
    pub(crate) fn poison_lock(&self) {
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = self.conn.lock();
            panic!("connection lock poisoned on purpose");
        }));
    }
}

impl AttendanceRepository for SqliteAttendanceStore {
    fn list_by_recency(&self) -> Result<Vec<Attendance>> {
        let conn = self.conn.lock()?;
        let mut stmt = conn.prepare_cached(LIST_BY_RECENCY_SQL)?;
        let rows = stmt
            .query_map([], attendance_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

fn attendance_from_row(row: &Row<'_>) -> rusqlite::Result<Attendance> {
    Ok(Attendance::from_parts(
        row.get(0)?,
        micros_to_datetime(1, row.get(1)?)?,
        micros_to_datetime(2, row.get(2)?)?,
    ))
}

fn micros_to_datetime(idx: usize, micros: i64) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::from_timestamp_micros(micros)
        .ok_or(rusqlite::Error::IntegralValueOutOfRange(idx, micros))
}
