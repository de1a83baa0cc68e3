//! AES-256-GCM sealing and opening.
//!
//! The ciphertext carries its 16-byte authentication tag as a suffix, the same
//! layout WebCrypto produces, so the nonce travels separately in the envelope.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};

use super::key::DerivedKey;
use crate::error::{MoodlogError, Result};

/// Fixed nonce length for AES-256-GCM (96 bits).
pub const NONCE_LENGTH: usize = 12;

/// Draw a fresh random nonce. Never reuse one under the same key.
pub fn random_nonce() -> Result<[u8; NONCE_LENGTH]> {
    let mut nonce = [0u8; NONCE_LENGTH];
    super::fill_random(&mut nonce)?;
    Ok(nonce)
}

/// Encrypt and authenticate `plaintext`, returning ciphertext with the tag appended.
pub fn seal(key: &DerivedKey, nonce: &[u8; NONCE_LENGTH], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|_| MoodlogError::Crypto("Invalid key length".to_string()))?;
    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|_| MoodlogError::Crypto("Encryption failed".to_string()))
}

/// Verify and decrypt `ciphertext` (tag suffix included).
///
/// # Errors
///
/// Returns `MoodlogError::IncorrectPassphraseOrCorruptFile` when the tag does not
/// verify, whichever of key, nonce, or ciphertext is wrong.
pub fn open(key: &DerivedKey, nonce: &[u8; NONCE_LENGTH], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|_| MoodlogError::Crypto("Invalid key length".to_string()))?;
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| MoodlogError::IncorrectPassphraseOrCorruptFile)
}
