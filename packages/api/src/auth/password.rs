//! # Password hashing and verification: Argon2id
//!
//! - [`hash_password`]: generates a random salt via [`OsRng`], hashes the plaintext
//!   password with the default Argon2id parameters, and returns the result as a
//!   PHC-format string (e.g. `$argon2id$v=19$m=19456,t=2,p=1$...`). This string is
//!   stored in the `password_hash` column of the `users` table.
//!
//! - [`verify_password`]: parses a PHC-format hash and checks whether the provided
//!   plaintext matches. Returns `Ok(true)` on success, `Ok(false)` on mismatch, or
//!   `Err` if the stored hash is malformed.
//!
//! - [`verify_missing_user`]: runs the same verification against a fixed hash,
//!   so a login for an unknown username takes as long as a wrong password.

use std::sync::OnceLock;

use argon2::{
    password_hash::{self, rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a password using Argon2id. Returns a PHC-format string.
pub fn hash_password(password: &str) -> password_hash::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a password against a PHC-format hash string.
pub fn verify_password(password: &str, hash: &str) -> password_hash::Result<bool> {
    let parsed_hash = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

/// Burn one password verification for a username that does not exist.
pub fn verify_missing_user(password: &str) {
    let hash = DUMMY_HASH.get_or_init(|| hash_password("no such user").ok());
    if let Some(hash) = hash {
        let _ = verify_password(password, hash);
    }
}
