//! Salted PBKDF2-SHA256 password hashing (PHC string format).
//!
//! The directory mirror stores only PHC hashes; login verifies the
//! submitted password against the stored string.

use pbkdf2::password_hash::rand_core::OsRng;
use pbkdf2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use pbkdf2::{Params, Pbkdf2};
use thiserror::Error;

pub const PBKDF2_ITERATIONS: u32 = 600_000;
const OUTPUT_LENGTH: usize = 32;

#[derive(Error, Debug)]
#[error("password hashing failed: {0}")]
pub struct PasswordHashError(String);

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, PasswordHashError> {
    let salt = SaltString::generate(&mut OsRng);
    hash_with_salt(password, &salt)
}

/// Hash a password with a caller-supplied base64 salt. Used by the seed
/// tool, which must produce identical output across runs.
pub fn hash_password_with_salt(
    password: &str,
    salt_b64: &str,
) -> Result<String, PasswordHashError> {
    let salt = SaltString::from_b64(salt_b64).map_err(|e| PasswordHashError(e.to_string()))?;
    hash_with_salt(password, &salt)
}

fn hash_with_salt(password: &str, salt: &SaltString) -> Result<String, PasswordHashError> {
    Pbkdf2
        .hash_password_customized(
            password.as_bytes(),
            None,
            None,
            Params {
                rounds: PBKDF2_ITERATIONS,
                output_length: OUTPUT_LENGTH,
            },
            salt,
        )
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordHashError(e.to_string()))
}

/// Verify a password against a stored PHC string. An unparseable stored
/// hash counts as a mismatch (and is logged) rather than an error.
pub fn verify_password(password: &str, stored: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(parsed) => Pbkdf2.verify_password(password.as_bytes(), &parsed).is_ok(),
        Err(e) => {
            tracing::warn!("unparseable password hash in staff directory: {e}");
            false
        }
    }
}
