//! Unified error types for the attendance service.
//! Used by: store, service, handlers.

use std::sync::PoisonError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The persistence layer could not be reached or the query failed there.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<rusqlite::Error> for Error {
    fn from(e: rusqlite::Error) -> Self {
        Error::StorageUnavailable(e.to_string())
    }
}

impl<T> From<PoisonError<T>> for Error {
    fn from(e: PoisonError<T>) -> Self {
        Error::StorageUnavailable(format!("connection lock poisoned: {e}"))
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        (status, self.to_string()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_unavailable_returns_503() {
        let response = Error::StorageUnavailable("down".into()).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn sqlite_errors_become_storage_unavailable() {
        let err: Error = rusqlite::Error::InvalidQuery.into();
        assert!(matches!(err, Error::StorageUnavailable(_)));
    }

    #[test]
    fn poisoned_lock_becomes_storage_unavailable() {
        let lock = std::sync::Mutex::new(());
        let _ = std::panic::catch_unwind(|| {
            let _guard = lock.lock();
            panic!("poison");
        });
        let err: Error = lock.lock().map(|_| ()).map_err(Error::from).unwrap_err();
        assert!(err.to_string().starts_with("storage unavailable: connection lock poisoned"));
    }

    #[test]
    fn error_messages_are_descriptive() {
        assert_eq!(
            Error::StorageUnavailable("disk I/O error".into()).to_string(),
            "storage unavailable: disk I/O error"
        );
    }
}
