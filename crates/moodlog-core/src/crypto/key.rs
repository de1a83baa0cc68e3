//! Key derivation using PBKDF2-HMAC-SHA256.
//!
//! The work factor is part of the on-disk format: envelope version 1 does not
//! record it, so every version 1 file is derived with exactly these parameters.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::ZeroizeOnDrop;

use crate::error::{MoodlogError, Result};

/// PBKDF2 iteration count for envelope version 1.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Length of the per-save salt in bytes.
pub const SALT_LENGTH: usize = 16;

/// Length of derived key in bytes (32 bytes = 256 bits for AES-256).
pub const KEY_LENGTH: usize = 32;

/// A cryptographic key derived from a passphrase.
///
/// Key material is zeroized from memory when dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate encryption operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive an encryption key from a passphrase and salt.
///
/// Pure function of its inputs: the same passphrase and salt always produce
/// the same key, and a different salt produces a different key.
///
/// # Errors
///
/// Returns `MoodlogError::InvalidInput` for an empty passphrase or a salt
/// that is not exactly [`SALT_LENGTH`] bytes.
///
/// # Examples
///
/// ```
/// use moodlog_core::crypto::derive_key;
///
/// let salt = [7u8; 16];
/// let key = derive_key("my-passphrase", &salt).unwrap();
/// assert_eq!(key.as_bytes().len(), 32);
/// ```
pub fn derive_key(passphrase: &str, salt: &[u8]) -> Result<DerivedKey> {
    if passphrase.is_empty() {
        return Err(MoodlogError::InvalidInput(
            "Passphrase cannot be empty".to_string(),
        ));
    }

    if salt.len() != SALT_LENGTH {
        return Err(MoodlogError::InvalidInput(format!(
            "Salt must be {} bytes (got {})",
            SALT_LENGTH,
            salt.len()
        )));
    }

    let mut key = [0u8; KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key);
    Ok(DerivedKey { key })
}

/// Draw a fresh random salt.
pub fn random_salt() -> Result<[u8; SALT_LENGTH]> {
    let mut salt = [0u8; SALT_LENGTH];
    super::fill_random(&mut salt)?;
    Ok(salt)
}
