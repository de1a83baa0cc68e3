//! Storage layer for Moodlog.
//!
//! The whole entry collection lives in one file. On disk it is an envelope:
//!
//! ```text
//! { "version": 1, "salt": "<base64 16B>", "iv": "<base64 12B>", "ciphertext": "<base64>" }
//! ```
//!
//! where `ciphertext` is AES-256-GCM over the compact JSON entry array, keyed by
//! PBKDF2 of the passphrase and `salt`. A bare JSON array of entries is the
//! legacy plaintext format; it still opens, and the next save upgrades it.
//!
//! ## Security
//!
//! The store is responsible for:
//! - Encryption at rest on every write (no plaintext saves)
//! - A fresh salt and nonce per save
//! - Whole-file overwrites through the backing medium

pub mod envelope;
pub mod medium;
mod rotation;
pub mod store;

pub use envelope::{Envelope, Payload, StoredFormat, ENVELOPE_VERSION};
pub use medium::{JournalFile, LocalFile, MemoryFile};
pub use store::JournalStore;
