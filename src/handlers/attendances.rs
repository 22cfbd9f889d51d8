//! Attendance listing endpoint.
//! Used by: server.

use axum::extract::State;
use axum::Json;

use crate::attendance::record::Attendance;
use crate::error::Result;
use crate::state::AppState;

pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Attendance>>> {
    match state.attendances.list_all_ordered_by_recency() {
        Ok(records) => {
            state.metrics.record_listing(records.len());
            Ok(Json(records))
        }
        Err(e) => {
            state.metrics.record_storage_failure();
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn lists_newest_first() -> Result<()> {
        let state = crate::state::build_test_state()?;
        let now = Utc::now();
        let older = Attendance::with_created_at(now - Duration::hours(1));
        let newer = Attendance::with_created_at(now);
        state.store.insert(&older)?;
        state.store.insert(&newer)?;

        let Json(records) = index(State(state.clone())).await?;
        assert_eq!(records, vec![newer, older]);
        assert_eq!(state.metrics.snapshot().listings_served, 1);
        assert_eq!(state.metrics.snapshot().records_returned, 2);
        Ok(())
    }

    #[tokio::test]
    async fn empty_store_is_ok_with_empty_array() -> Result<()> {
        let state = crate::state::build_test_state()?;
        let response = index(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        Ok(())
    }

    #[tokio::test]
    async fn storage_failure_maps_to_503() -> Result<()> {
        let state = crate::state::build_test_state()?;
        state.store.execute_raw("DROP TABLE attendances")?;

        let response = index(State(state.clone())).await.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(state.metrics.snapshot().storage_failures, 1);
        assert_eq!(state.metrics.snapshot().listings_served, 0);
        Ok(())
    }
}
