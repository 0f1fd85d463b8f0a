//! Out-of-band batch jobs: bulk import and dummy-data seeding.
//!
//! Both run as standalone binaries, independent of the request path, and
//! escalate any failure to a rolled-back transaction plus a non-zero
//! process exit. Nothing is retried; a failed run is rerun wholesale.

pub mod loader;
pub mod log;
pub mod seed;

use thiserror::Error;

use crate::auth::password::PasswordHashError;
use crate::db::DatabaseError;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("source error: {0}")]
    Source(String),

    #[error(transparent)]
    Password(#[from] PasswordHashError),
}
