use hmac::{Hmac, Mac};
use sha1::Sha1;
use uuid::Uuid;

use crate::error::{AppError, Result};

type HmacSha1 = Hmac<Sha1>;

/// Hash a password using bcrypt
pub fn hash_password(password: &str) -> Result<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

/// Verify a password against its hash
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

/// Generate a fresh API token key.
///
/// HMAC-SHA1 keyed with the bytes of a random v4 UUID over an empty message,
/// rendered as 40 lowercase hex characters. Uniqueness rests on the UUID;
/// nothing checks existing rows.
pub fn generate_token_key() -> Result<String> {
    let unique = Uuid::new_v4();
    let mac = HmacSha1::new_from_slice(unique.as_bytes())
        .map_err(|e| AppError::Internal(format!("Failed to initialize HMAC: {}", e)))?;
    Ok(hex::encode(mac.finalize().into_bytes()))
}
