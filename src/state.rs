//! Shared application state.

use std::sync::Arc;

use crate::attendance::service::AttendanceQueryService;
use crate::attendance::sqlite::SqliteAttendanceStore;
use crate::config::Config;
use crate::error::Result;
use crate::telemetry::Metrics;

pub struct AppStateInner {
    pub attendances: AttendanceQueryService<Arc<SqliteAttendanceStore>>,
    /// Same handle the query service reads through; used for health probes.
    pub store: Arc<SqliteAttendanceStore>,
    pub metrics: Metrics,
}

pub type AppState = Arc<AppStateInner>;

fn from_store(store: SqliteAttendanceStore) -> AppState {
    let store = Arc::new(store);
    Arc::new(AppStateInner {
        attendances: AttendanceQueryService::new(Arc::clone(&store)),
        store,
        metrics: Metrics::new(),
    })
}

pub fn build_state(config: &Config) -> Result<AppState> {
    tracing::info!(db = %config.db_path, "opening attendance store");
    Ok(from_store(SqliteAttendanceStore::open(&config.db_path)?))
}

pub fn build_test_state() -> Result<AppState> {
    Ok(from_store(SqliteAttendanceStore::open_in_memory()?))
}
