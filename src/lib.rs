//! Attendance records served most recently created first.
//! Used by: binary entrypoint, integration tests.

pub mod attendance;
pub mod config;
pub mod console;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;
pub mod telemetry;

pub use attendance::record::Attendance;
pub use attendance::repository::AttendanceRepository;
pub use attendance::service::AttendanceQueryService;
pub use attendance::sqlite::SqliteAttendanceStore;
pub use error::{Error, Result};
