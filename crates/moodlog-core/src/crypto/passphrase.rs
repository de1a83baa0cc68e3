//! Passphrase policy for new passphrases.
//!
//! Only applied when a passphrase is chosen (journal creation, rotation).
//! Unlocking an existing journal accepts whatever passphrase it was sealed with.

use crate::error::{MoodlogError, Result};

/// Minimum passphrase length in characters.
pub const MIN_PASSPHRASE_LENGTH: usize = 8;

/// Validate a newly chosen passphrase.
///
/// # Requirements
///
/// - Not empty or only whitespace
/// - At least 8 characters long
///
/// # Examples
///
/// ```
/// use moodlog_core::crypto::validate_new_passphrase;
///
/// assert!(validate_new_passphrase("my-secure-passphrase-123").is_ok());
/// assert!(validate_new_passphrase("short").is_err());
/// ```
pub fn validate_new_passphrase(passphrase: &str) -> Result<()> {
    if passphrase.trim().is_empty() {
        return Err(MoodlogError::Validation(
            "Passphrase cannot be empty".to_string(),
        ));
    }

    let length = passphrase.chars().count();
    if length < MIN_PASSPHRASE_LENGTH {
        return Err(MoodlogError::Validation(format!(
            "New passphrase must be at least {} characters (got {})",
            MIN_PASSPHRASE_LENGTH, length
        )));
    }

    Ok(())
}
