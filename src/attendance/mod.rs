//! Attendance records: model, storage, and the recency query.
//! Used by: state, handlers.

pub mod record;
pub mod repository;
pub mod service;
pub mod sqlite;
