use rusqlite::Connection;
use thiserror::Error;

use crate::db::{repository, DatabaseError};
use crate::models::StaffUser;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("directory query failed: {0}")]
    Query(#[from] DatabaseError),
}

/// Lookup seam over the staff user directory.
///
/// The bundled implementation reads the mirrored staff_directory table;
/// a deployment with a live upstream directory supplies its own impl
/// behind the same trait.
pub trait UserDirectory {
    fn find_user(&self, id: &str) -> Result<Option<StaffUser>, DirectoryError>;
}

impl UserDirectory for Connection {
    fn find_user(&self, id: &str) -> Result<Option<StaffUser>, DirectoryError> {
        Ok(repository::find_staff_user(self, id)?)
    }
}
