//! # Argon2id password hashes
//!
//! The credentials resource stores whatever string the client posts in the
//! `password` field, and hands it back to every client on `GET`. New accounts
//! therefore post a hash, never the plaintext:
//!
//! - [`hash_password`] salts with [`OsRng`] and returns the PHC string
//!   (`$argon2id$v=19$m=19456,t=2,p=1$...`) that goes on the wire.
//!
//! - [`verify_password`] checks a candidate against a stored PHC hash. A stored
//!   value that is not a PHC string predates hashing and must equal the
//!   candidate exactly.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("failed to hash password: {0}")]
    Hash(argon2::password_hash::Error),
}

/// Hash a password using Argon2id. Returns a PHC-format string.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(PasswordError::Hash)?;
    Ok(hash.to_string())
}

/// Check `candidate` against a stored password, hashed or plaintext.
pub fn verify_password(candidate: &str, stored: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(parsed) => Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => candidate == stored,
    }
}
