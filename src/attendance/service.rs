//! Recency-ordered attendance listing.
//! Used by: state, handlers::attendances.

use std::time::Instant;

use crate::attendance::record::Attendance;
use crate::attendance::repository::AttendanceRepository;
use crate::error::Result;

/// Read-only query service over an attendance repository.
pub struct AttendanceQueryService<R: AttendanceRepository> {
    repo: R,
}

impl<R: AttendanceRepository> AttendanceQueryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns every attendance record, most recently created first.
    ///
    /// Storage failures are returned as-is; there is no retry and no
    /// partial result.
    pub fn list_all_ordered_by_recency(&self) -> Result<Vec<Attendance>> {
        let started = Instant::now();
        match self.repo.list_by_recency() {
            Ok(records) => {
                tracing::info!(
                    count = records.len(),
                    elapsed_us = started.elapsed().as_micros() as u64,
                    "attendances listed"
                );
                Ok(records)
            }
            Err(e) => {
                tracing::error!(error = %e, "attendance listing failed");
                Err(e)
            }
        }
    }
}
