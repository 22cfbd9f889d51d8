//! Startup configuration from environment variables.
//! Used by: main, state.

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_DB_PATH: &str = "attendances.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: String,
    /// SQLite file path, or `:memory:` for an ephemeral store.
    pub db_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            db_path: lookup("ATTENDANCE_DB").unwrap_or_else(|| DEFAULT_DB_PATH.into()),
        }
    }
}
