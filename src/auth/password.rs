use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use std::sync::OnceLock;

use crate::errors::AppError;

/// Stand-in hash verified against when no account matched, so unknown and
/// known emails cost the same argon2 work.
fn dummy_hash() -> Option<&'static str> {
    static DUMMY: OnceLock<Option<String>> = OnceLock::new();
    DUMMY
        .get_or_init(|| hash_password("no-such-account").ok())
        .as_deref()
}

/// Argon2id hash in PHC string form.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Hash(e.to_string()))
}

/// Reject anything that is not a PHC string before it is stored.
pub fn check_hash_format(hash: &str) -> Result<(), AppError> {
    PasswordHash::new(hash)
        .map(|_| ())
        .map_err(|e| AppError::Hash(e.to_string()))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash).map_err(|e| AppError::Hash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Login check: a malformed stored hash is logged and counts as a mismatch.
pub fn matches(password: &str, hash: &str) -> bool {
    verify_password(password, hash).unwrap_or_else(|e| {
        log::error!("Stored password hash is unusable: {e}");
        false
    })
}

/// Login check against an optional stored hash. With no hash the dummy is
/// verified anyway and the result is always false.
pub fn matches_account(password: &str, stored: Option<&str>) -> bool {
    match stored {
        Some(hash) => matches(password, hash),
        None => {
            if let Some(hash) = dummy_hash() {
                let _ = verify_password(password, hash);
            }
            false
        }
    }
}
