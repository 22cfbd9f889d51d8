//! HTTP handler modules.
//! Used by: server.

pub mod attendances;
pub mod status;
