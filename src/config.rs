//! Environment-driven settings. Every knob has a default, so a bare
//! `cargo run` serves a local file-backed database.

use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    /// SQLite URL, e.g. `sqlite://bookstore.db` or `sqlite::memory:`.
    pub database_url: String,
    pub bind_addr: String,
}

impl Settings {
    /// Reads `DATABASE_URL` and `BIND_ADDR`, falling back to local defaults.
    /// `.env` loading is the binary's job (`dotenvy::dotenv` before this).
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://bookstore.db".into());
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".into());

        tracing::debug!(%database_url, %bind_addr, "settings loaded");
        Settings {
            database_url,
            bind_addr,
        }
    }
}
