//! Staff login: directory lookup, password verification, level allow-list,
//! token issuance.
//!
//! Failure messages are deliberately coarse — an unknown user ID and a
//! wrong password produce the same text, so the endpoint never confirms
//! which field was wrong. Only the allow-list rejection is distinct.

pub mod directory;
pub mod password;
pub mod token;

use thiserror::Error;

use crate::config::AuthConfig;
use directory::UserDirectory;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LoginError {
    #[error("User ID and password are required.")]
    MissingCredentials,

    #[error("User ID or password is incorrect.")]
    InvalidCredentials,

    #[error("You are not authorized to access this system.")]
    NotAuthorized,

    /// Infrastructure failure; detail is already logged at the site.
    #[error("An error occurred while processing the login.")]
    Processing,
}

#[derive(Debug, Clone)]
pub struct LoginSuccess {
    pub token: String,
    pub user_id: String,
    pub staff_level: String,
}

/// Authenticate a submitted id/password pair against the directory.
///
/// Blank input is rejected before any lookup. Nothing is persisted on
/// success; the token carries all session state.
pub fn authenticate(
    directory: &dyn UserDirectory,
    config: &AuthConfig,
    id: &str,
    password: &str,
) -> Result<LoginSuccess, LoginError> {
    if id.trim().is_empty() || password.trim().is_empty() {
        return Err(LoginError::MissingCredentials);
    }

    let user = match directory.find_user(id) {
        Ok(user) => user,
        Err(e) => {
            tracing::error!("staff directory lookup failed: {e}");
            return Err(LoginError::Processing);
        }
    };

    let Some(user) = user else {
        return Err(LoginError::InvalidCredentials);
    };

    if !password::verify_password(password, &user.password_hash) {
        return Err(LoginError::InvalidCredentials);
    }

    if !config
        .allowed_staff_levels
        .iter()
        .any(|level| level == &user.staff_level)
    {
        return Err(LoginError::NotAuthorized);
    }

    match token::mint_token(config, &user.id, &user.staff_level) {
        Ok(token) => Ok(LoginSuccess {
            token,
            user_id: user.id,
            staff_level: user.staff_level,
        }),
        Err(e) => {
            tracing::error!("token minting failed: {e}");
            Err(LoginError::Processing)
        }
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::directory::{DirectoryError, UserDirectory};
    use super::*;
    use crate::db::repository::upsert_staff_user;
    use crate::db::sqlite::open_memory_database;
    use crate::db::DatabaseError;
    use crate::models::StaffUser;

    fn seeded_directory() -> Connection {
        let conn = open_memory_database().unwrap();
        upsert_staff_user(
            &conn,
            &StaffUser {
                id: "n1001".into(),
                password_hash: password::hash_password("ward-pass").unwrap(),
                staff_level: "1".into(),
            },
        )
        .unwrap();
        upsert_staff_user(
            &conn,
            &StaffUser {
                id: "clerk9".into(),
                password_hash: password::hash_password("clerk-pass").unwrap(),
                staff_level: "9".into(),
            },
        )
        .unwrap();
        conn
    }

    struct BrokenDirectory;

    impl UserDirectory for BrokenDirectory {
        fn find_user(&self, _id: &str) -> Result<Option<StaffUser>, DirectoryError> {
            Err(DirectoryError::Query(DatabaseError::MigrationFailed {
                version: 0,
                reason: "simulated outage".into(),
            }))
        }
    }

    /// Directory that must never be reached.
    struct UnreachableDirectory;

    impl UserDirectory for UnreachableDirectory {
        fn find_user(&self, _id: &str) -> Result<Option<StaffUser>, DirectoryError> {
            panic!("blank credentials must be rejected before any lookup");
        }
    }

    #[test]
    fn valid_credentials_yield_a_token_with_id_and_level() {
        let conn = seeded_directory();
        let config = AuthConfig::default();

        let success = authenticate(&conn, &config, "n1001", "ward-pass").unwrap();
        assert_eq!(success.user_id, "n1001");
        assert_eq!(success.staff_level, "1");

        let claims = token::decode_token(&config, &success.token).unwrap();
        assert_eq!(claims.sub, "n1001");
        assert_eq!(claims.staff_level, "1");
    }

    #[test]
    fn wrong_password_and_unknown_id_share_one_message() {
        let conn = seeded_directory();
        let config = AuthConfig::default();

        let wrong_password =
            authenticate(&conn, &config, "n1001", "bad-pass").unwrap_err();
        let unknown_id =
            authenticate(&conn, &config, "no-such-user", "ward-pass").unwrap_err();

        assert_eq!(wrong_password, LoginError::InvalidCredentials);
        assert_eq!(wrong_password.to_string(), unknown_id.to_string());
    }

    #[test]
    fn disallowed_level_gets_a_distinct_message() {
        let conn = seeded_directory();
        let config = AuthConfig::default();

        let err = authenticate(&conn, &config, "clerk9", "clerk-pass").unwrap_err();
        assert_eq!(err, LoginError::NotAuthorized);
        assert_ne!(
            err.to_string(),
            LoginError::InvalidCredentials.to_string()
        );
    }

    #[test]
    fn blank_input_never_touches_the_directory() {
        let config = AuthConfig::default();
        for (id, password) in [("", "pass"), ("user", ""), ("  ", "pass")] {
            let err = authenticate(&UnreachableDirectory, &config, id, password).unwrap_err();
            assert_eq!(err, LoginError::MissingCredentials);
        }
    }

    #[test]
    fn directory_outage_is_a_generic_processing_failure() {
        let config = AuthConfig::default();
        let err = authenticate(&BrokenDirectory, &config, "n1001", "ward-pass").unwrap_err();
        assert_eq!(err, LoginError::Processing);
    }
}
