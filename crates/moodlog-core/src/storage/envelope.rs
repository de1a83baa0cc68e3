//! Envelope codec: entry collection <-> file bytes.
//!
//! Decoding is an explicit, ordered classification of the raw bytes rather
//! than a chain of fallbacks: blank, legacy array, sealed envelope, or
//! unrecognized.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::crypto::{self, DerivedKey, NONCE_LENGTH, SALT_LENGTH};
use crate::error::{MoodlogError, Result};
use crate::journal::Entry;

/// The only envelope version written.
pub const ENVELOPE_VERSION: u32 = 1;

fn default_version() -> u32 {
    ENVELOPE_VERSION
}

/// The encrypted on-disk container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Format tag
    #[serde(default = "default_version")]
    pub version: u32,

    /// Base64 PBKDF2 salt (16 bytes)
    pub salt: String,

    /// Base64 AES-GCM nonce (12 bytes)
    pub iv: String,

    /// Base64 ciphertext with the 16-byte tag appended
    pub ciphertext: String,
}

/// Which on-disk format a file was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoredFormat {
    /// Blank or unrecognized file; treated as a new journal
    Empty,
    /// Bare plaintext entry array
    Legacy,
    /// Encrypted envelope
    Sealed,
}

/// Raw file contents, classified.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Blank file (first-time use)
    Empty,
    /// Legacy plaintext entry array
    Legacy(Vec<Entry>),
    /// Encrypted envelope awaiting a passphrase
    Sealed(Envelope),
    /// Not JSON, or JSON of some other shape
    Unrecognized,
}

impl Payload {
    /// Classify raw file bytes.
    ///
    /// # Errors
    ///
    /// Returns `MoodlogError::DecodeFailed` when the bytes are recognizably
    /// journal data (an array, or an object with `ciphertext`) but malformed.
    /// Shapes that are not journal data at all classify as `Unrecognized`.
    pub fn classify(raw: &[u8]) -> Result<Self> {
        if raw.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(Payload::Empty);
        }

        let value: Value = match serde_json::from_slice(raw) {
            Ok(value) => value,
            Err(_) => return Ok(Payload::Unrecognized),
        };

        if value.is_array() {
            let entries: Vec<Entry> = serde_json::from_value(value).map_err(|e| {
                MoodlogError::DecodeFailed(format!("Legacy entry array is malformed: {}", e))
            })?;
            return Ok(Payload::Legacy(entries));
        }

        let sealed = value
            .as_object()
            .is_some_and(|map| has_ciphertext(map.get("ciphertext")));
        if sealed {
            let envelope: Envelope = serde_json::from_value(value)
                .map_err(|e| MoodlogError::DecodeFailed(format!("Envelope is malformed: {}", e)))?;
            return Ok(Payload::Sealed(envelope));
        }

        Ok(Payload::Unrecognized)
    }

    /// The format this payload represents.
    pub fn format(&self) -> StoredFormat {
        match self {
            Payload::Empty | Payload::Unrecognized => StoredFormat::Empty,
            Payload::Legacy(_) => StoredFormat::Legacy,
            Payload::Sealed(_) => StoredFormat::Sealed,
        }
    }
}

/// A falsy `ciphertext` (absent, null, empty string, zero, false) marks no journal data.
fn has_ciphertext(value: Option<&Value>) -> bool {
    match value {
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::Null) | None => false,
        Some(_) => true,
    }
}

/// Encrypt `entries` under `key` with the given salt and nonce.
///
/// `salt` is recorded so the key can be re-derived; it must be the salt `key`
/// was derived with.
pub fn encode(
    entries: &[Entry],
    key: &DerivedKey,
    salt: &[u8; SALT_LENGTH],
    nonce: &[u8; NONCE_LENGTH],
) -> Result<Envelope> {
    let plaintext = serde_json::to_vec(entries)?;
    let ciphertext = crypto::seal(key, nonce, &plaintext)?;
    Ok(Envelope {
        version: ENVELOPE_VERSION,
        salt: STANDARD.encode(salt),
        iv: STANDARD.encode(nonce),
        ciphertext: STANDARD.encode(ciphertext),
    })
}

/// Encrypt `entries` under `passphrase` with a freshly drawn salt and nonce.
pub fn seal(entries: &[Entry], passphrase: &str) -> Result<Envelope> {
    let salt = crypto::random_salt()?;
    let nonce = crypto::random_nonce()?;
    let key = crypto::derive_key(passphrase, &salt)?;
    encode(entries, &key, &salt, &nonce)
}

impl Envelope {
    /// Decrypt the envelope with `passphrase`. Exactly one attempt is made.
    ///
    /// # Errors
    ///
    /// - `MoodlogError::DecodeFailed` for an unsupported version, bad base64,
    ///   wrong field lengths, or plaintext that is not an entry array
    /// - `MoodlogError::IncorrectPassphraseOrCorruptFile` when authentication fails
    pub fn open(&self, passphrase: &str) -> Result<Vec<Entry>> {
        if self.version != ENVELOPE_VERSION {
            return Err(MoodlogError::DecodeFailed(format!(
                "Unsupported envelope version {}",
                self.version
            )));
        }

        let salt: [u8; SALT_LENGTH] = decode_field("salt", &self.salt)?;
        let nonce: [u8; NONCE_LENGTH] = decode_field("iv", &self.iv)?;
        let ciphertext = STANDARD
            .decode(&self.ciphertext)
            .map_err(|e| MoodlogError::DecodeFailed(format!("ciphertext is not base64: {}", e)))?;

        let key = crypto::derive_key(passphrase, &salt)?;
        let plaintext = crypto::open(&key, &nonce, &ciphertext)?;

        serde_json::from_slice(&plaintext).map_err(|e| {
            MoodlogError::DecodeFailed(format!("Decrypted data is not an entry array: {}", e))
        })
    }

    /// Serialize for writing: pretty JSON with two-space indentation.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}

fn decode_field<const N: usize>(name: &str, value: &str) -> Result<[u8; N]> {
    let bytes = STANDARD
        .decode(value)
        .map_err(|e| MoodlogError::DecodeFailed(format!("{} is not base64: {}", name, e)))?;
    bytes.try_into().map_err(|bytes: Vec<u8>| {
        MoodlogError::DecodeFailed(format!(
            "{} must be {} bytes (got {})",
            name,
            N,
            bytes.len()
        ))
    })
}

/// Decode raw file bytes into an entry collection.
///
/// Legacy and blank files need no passphrase. A sealed envelope needs one and
/// fails with `MoodlogError::NotReady` without it. Unrecognized contents are
/// tolerated as an empty collection.
pub fn decode(raw: &[u8], passphrase: Option<&SecretString>) -> Result<(Vec<Entry>, StoredFormat)> {
    let payload = Payload::classify(raw)?;
    let format = payload.format();
    let entries = match payload {
        Payload::Empty => Vec::new(),
        Payload::Unrecognized => {
            tracing::warn!(bytes = raw.len(), "unrecognized journal contents, starting empty");
            Vec::new()
        }
        Payload::Legacy(entries) => entries,
        Payload::Sealed(envelope) => {
            let passphrase = passphrase.ok_or(MoodlogError::NotReady)?;
            envelope.open(passphrase.expose_secret())?
        }
    };
    tracing::debug!(?format, entries = entries.len(), "decoded journal");
    Ok((entries, format))
}
