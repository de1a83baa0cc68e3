//! # Moodlog Core
//!
//! Core library for Moodlog - a passphrase-protected, single-file mood journal.
//!
//! This crate provides the encrypted store, its on-disk envelope format, and the
//! read-only views computed over the entry collection, independent of the CLI.
//!
//! ## Architecture
//!
//! - **crypto**: PBKDF2 key derivation, AES-256-GCM sealing, passphrase policy
//! - **storage**: envelope codec, backing-file media, the encrypted store
//! - **journal**: entry model and derived views (date index, streaks, search)
//!
//! Reads flow file bytes -> envelope -> plaintext JSON -> entries -> views.
//! Writes flow mutation -> entries -> plaintext JSON -> envelope -> file bytes,
//! and every mutation is persisted before the call returns.

pub mod crypto;
pub mod error;
pub mod fs;
pub mod journal;
pub mod storage;

pub use error::{MoodlogError, Result};
pub use journal::{Entry, EntryId, EntryPatch, NewEntry};
pub use storage::{JournalFile, JournalStore, LocalFile, MemoryFile};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
