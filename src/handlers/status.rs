//! Liveness and counters.
//! Used by: server.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::state::AppState;
use crate::telemetry::MetricsSnapshot;

/// 200 while the attendance store answers queries, 503 otherwise.
pub async fn health(State(state): State<AppState>) -> StatusCode {
    match state.store.ping() {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "health check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

pub async fn metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;

    #[tokio::test]
    async fn healthy_store_returns_200() -> Result<()> {
        let state = crate::state::build_test_state()?;
        assert_eq!(health(State(state)).await, StatusCode::OK);
        Ok(())
    }

    #[tokio::test]
    async fn poisoned_store_returns_503() -> Result<()> {
        let state = crate::state::build_test_state()?;
        state.store.poison_lock();
        assert_eq!(health(State(state)).await, StatusCode::SERVICE_UNAVAILABLE);
        Ok(())
    }

    #[tokio::test]
    async fn metrics_reflect_listings() -> Result<()> {
        let state = crate::state::build_test_state()?;
        state.metrics.record_listing(4);
        let Json(snapshot) = metrics(State(state)).await;
        assert_eq!(snapshot.listings_served, 1);
        assert_eq!(snapshot.records_returned, 4);
        Ok(())
    }
}
