//! A single attendance event.
//! Used by: attendance::sqlite, attendance::service, handlers::attendances.

use chrono::{DateTime, SubsecRound, Utc};
use serde::Serialize;

/// Timestamps are held at microsecond precision, the precision the store
/// keeps, so a stored record always reads back equal to itself.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct Attendance {
    id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Attendance {
    pub fn new() -> Self {
        Self::with_created_at(Utc::now())
    }

    pub fn with_created_at(at: DateTime<Utc>) -> Self {
        Self::from_parts(uuid::Uuid::new_v4().to_string(), at, at)
    }

    pub(crate) fn from_parts(
        id: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            created_at: created_at.trunc_subsecs(6),
            updated_at: updated_at.trunc_subsecs(6),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Set once when the record is created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Default for Attendance {
    fn default() -> Self {
        Self::new()
    }
}
