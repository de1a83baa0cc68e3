//! Error types for Moodlog core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these to
//! user-friendly messages and exit codes. No variant ever carries passphrase
//! or key material.

use thiserror::Error;

/// Result type alias for Moodlog operations.
pub type Result<T> = std::result::Result<T, MoodlogError>;

/// Core error type for Moodlog operations.
#[derive(Debug, Error)]
pub enum MoodlogError {
    /// No journal file is connected, or no passphrase is set
    #[error("Journal is not ready: connect a file and unlock it first")]
    NotReady,

    /// Bytes look like journal data but cannot be decoded
    #[error("Decode failed: {0}")]
    DecodeFailed(String),

    /// Authenticated decryption failed.
    ///
    /// Deliberately does not say whether the passphrase or the file is at fault.
    #[error("Incorrect passphrase or corrupt file")]
    IncorrectPassphraseOrCorruptFile,

    /// Writing the re-encrypted journal failed
    #[error("Persist failed: {0}")]
    PersistFailed(String),

    /// Entry fields rejected before any encryption or I/O
    #[error("Validation error: {0}")]
    Validation(String),

    /// The current passphrase given for a rotation does not match the session
    #[error("Current passphrase is incorrect")]
    WrongCurrentPassphrase,

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Cryptographic primitive failure
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Reading the backing file failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl MoodlogError {
    /// Whether this error means the passphrase was rejected.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            MoodlogError::IncorrectPassphraseOrCorruptFile | MoodlogError::WrongCurrentPassphrase
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_failures_are_classified() {
        assert!(MoodlogError::IncorrectPassphraseOrCorruptFile.is_auth_failure());
        assert!(MoodlogError::WrongCurrentPassphrase.is_auth_failure());
        assert!(!MoodlogError::NotReady.is_auth_failure());
    }

    #[test]
    fn test_decrypt_failure_message_is_undifferentiated() {
        let message = MoodlogError::IncorrectPassphraseOrCorruptFile.to_string();
        assert!(message.contains("passphrase"));
        assert!(message.contains("corrupt"));
    }
}
