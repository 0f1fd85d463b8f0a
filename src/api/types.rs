use std::sync::Arc;

use rusqlite::Connection;

use crate::config::AppConfig;
use crate::db::sqlite::open_database;
use crate::db::DatabaseError;

/// Shared context for all API routes and middleware.
///
/// Each request opens its own connection and closes it before returning;
/// there is no cross-request shared mutable state.
#[derive(Clone)]
pub struct ApiContext {
    pub config: Arc<AppConfig>,
}

impl ApiContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn open_db(&self) -> Result<Connection, DatabaseError> {
        open_database(&self.config.database_path)
    }
}

/// Authenticated staff context, injected into request extensions by the
/// auth middleware after token validation.
#[derive(Debug, Clone)]
pub struct StaffContext {
    pub user_id: String,
    pub staff_level: String,
}
