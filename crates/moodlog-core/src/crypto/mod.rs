//! Cryptographic operations for Moodlog.
//!
//! This module provides key derivation and authenticated encryption using
//! well-audited RustCrypto implementations:
//! - **PBKDF2-HMAC-SHA256**: salted, deliberately slow key derivation
//! - **AES-256-GCM**: authenticated encryption of the whole entry collection
//!
//! ## Security Model
//!
//! - One passphrase protects the whole journal
//! - A fresh random salt and nonce are drawn for every save
//! - Derived keys are zeroized from memory on drop
//! - The passphrase is never written to disk, logged, or put in an error
//!
//! ## Threat Model
//!
//! We defend against:
//! - Theft of the journal file
//! - Offline brute-force attacks on the passphrase
//! - Tampering with the file (detected by the GCM tag)
//!
//! We do NOT defend against:
//! - Compromised OS / keylogger
//! - Access to an unlocked session / memory

pub mod cipher;
pub mod key;
pub mod passphrase;

pub use cipher::{open, random_nonce, seal, NONCE_LENGTH};
pub use key::{derive_key, random_salt, DerivedKey, KEY_LENGTH, PBKDF2_ITERATIONS, SALT_LENGTH};
pub use passphrase::validate_new_passphrase;

use crate::error::{MoodlogError, Result};

/// Fill a buffer from the operating system CSPRNG.
pub(crate) fn fill_random(buf: &mut [u8]) -> Result<()> {
    getrandom::getrandom(buf)
        .map_err(|e| MoodlogError::Crypto(format!("OS random source unavailable: {}", e)))
}
