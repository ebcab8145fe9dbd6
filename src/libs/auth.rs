//! Password hashing for account registration and login.
//!
//! Passwords are never stored raw. Registration keeps only a salted
//! Argon2id digest in PHC string form, so two accounts with the same
//! password still get different rows and a leaked table does not yield
//! reusable credentials.

use crate::libs::errors::{PlannerError, Result};
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hashes a password with a freshly generated salt.
///
/// Returns the digest as a PHC string (`$argon2id$v=19$...`), which embeds
/// the salt and parameters needed for later verification.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PlannerError::PasswordHash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Checks a password against a stored PHC string.
///
/// Returns `Ok(false)` on a mismatch; an error only means the stored
/// string itself could not be interpreted.
pub fn verify_password(password: &str, stored: &str) -> Result<bool> {
    let parsed = PasswordHash::new(stored).map_err(|e| PlannerError::PasswordHash(e.to_string()))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PlannerError::PasswordHash(e.to_string())),
    }
}
