//! Password hashing primitives.
//!
//! bcrypt is treated as a black box: hash on write, verify on login. Both calls
//! are CPU-bound; async callers should run them on the blocking pool.

use crate::error::AppError;

/// Cost factor for bcrypt hashing.
pub const BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;

/// Hashes a raw password with a fresh salt.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash_password_with_cost(password, BCRYPT_COST)
}

pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, AppError> {
    bcrypt::hash(password, cost).map_err(|e| AppError::internal(format!("Hashing failed: {e}")))
}

/// Checks a raw password against a stored hash.
///
/// A malformed stored hash is reported as a mismatch.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    match bcrypt::verify(password, password_hash) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash could not be verified");
            false
        }
    }
}
