//! Data-access contract for attendance reads.
//! Used by: attendance::service, attendance::sqlite.

use std::sync::Arc;

use crate::attendance::record::Attendance;
use crate::error::Result;

/// Read access to the attendance store.
///
/// Implementations return every stored record ordered by `created_at`,
/// newest first, or fail as a whole with `Error::StorageUnavailable`.
/// A partial result is never returned.
pub trait AttendanceRepository {
    fn list_by_recency(&self) -> Result<Vec<Attendance>>;
}

impl<R: AttendanceRepository + ?Sized> AttendanceRepository for Arc<R> {
    fn list_by_recency(&self) -> Result<Vec<Attendance>> {
        (**self).list_by_recency()
    }
}
