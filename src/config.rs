use std::env;

use actix_web::cookie::Key;

use crate::auth::{password, validate};
use crate::errors::AppError;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 8;
const MIN_SESSION_KEY_LEN: usize = 64;

/// Admin credential, always held as an argon2 hash.
#[derive(Clone)]
pub struct AdminCredential {
    password_hash: String,
}

impl AdminCredential {
    pub fn from_hash(password_hash: String) -> Result<Self, AppError> {
        password::check_hash_format(&password_hash)
            .map_err(|e| AppError::Config(format!("ADMIN_PASSWORD_HASH is not a valid hash: {e}")))?;
        Ok(Self { password_hash })
    }

    pub fn from_plaintext(password: &str) -> Result<Self, AppError> {
        if let Some(msg) = validate::validate_password(password) {
            return Err(AppError::Config(format!("ADMIN_PASSWORD rejected: {msg}")));
        }
        let password_hash = password::hash_password(password)?;
        Ok(Self { password_hash })
    }

    pub fn verify(&self, candidate: &str) -> bool {
        password::matches(candidate, &self.password_hash)
    }
}

impl std::fmt::Debug for AdminCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AdminCredential(..)")
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: String,
    pub admin: AdminCredential,
    pub session_key: Option<Vec<u8>>,
}

impl Config {
    /// Load from the process environment. Fails when the admin password or
    /// database URL is missing.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = non_empty("DATABASE_URL")
            .ok_or_else(|| AppError::Config("DATABASE_URL must be set".to_string()))?;

        let admin = match (non_empty("ADMIN_PASSWORD_HASH"), non_empty("ADMIN_PASSWORD")) {
            (Some(hash), _) => AdminCredential::from_hash(hash)?,
            (None, Some(plain)) => AdminCredential::from_plaintext(&plain)?,
            (None, None) => {
                return Err(AppError::Config(
                    "ADMIN_PASSWORD_HASH or ADMIN_PASSWORD must be set; the admin view will not be served without one"
                        .to_string(),
                ));
            }
        };

        let max_connections = match non_empty("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.parse::<u32>().map_err(|e| {
                AppError::Config(format!("DATABASE_MAX_CONNECTIONS is not a number: {e}"))
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_addr = non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let session_key = match non_empty("SESSION_KEY") {
            Some(val) if val.len() >= MIN_SESSION_KEY_LEN => Some(val.into_bytes()),
            Some(val) => {
                log::warn!(
                    "SESSION_KEY too short ({} bytes, need {MIN_SESSION_KEY_LEN}+), generating random key",
                    val.len()
                );
                None
            }
            None => {
                log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
                None
            }
        };

        Ok(Self {
            database_url,
            max_connections,
            bind_addr,
            admin,
            session_key,
        })
    }

    pub fn cookie_key(&self) -> Key {
        match &self.session_key {
            Some(bytes) => Key::from(bytes.as_slice()),
            None => Key::generate(),
        }
    }
}
