//! Backing-file media.
//!
//! The store never touches the filesystem directly; it reads and overwrites
//! whole files through a [`JournalFile`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// A handle to the single file that holds the journal.
pub trait JournalFile: Send {
    /// Human-readable name for status output and logs.
    fn describe(&self) -> String;

    /// Read the full file contents. A file that does not exist yet reads as empty.
    fn read(&self) -> io::Result<Vec<u8>>;

    /// Replace the full file contents.
    fn write(&mut self, bytes: &[u8]) -> io::Result<()>;
}

/// A journal file on the local filesystem.
///
/// Writes are atomic: a synced temp file is renamed over the target, so a
/// failed write leaves the previous contents in place.
#[derive(Debug, Clone)]
pub struct LocalFile {
    path: PathBuf,
}

impl LocalFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl JournalFile for LocalFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> io::Result<Vec<u8>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err),
        }
    }

    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        crate::fs::write_atomic(&self.path, bytes)
    }
}

/// An in-memory journal file.
///
/// Clones share the same buffer, so a caller can keep one handle to inspect
/// what the store wrote through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFile {
    name: String,
    contents: Arc<Mutex<Vec<u8>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_contents(name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        let file = Self::new(name);
        file.replace(contents);
        file
    }

    /// Snapshot of the current contents.
    pub fn contents(&self) -> Vec<u8> {
        match self.contents.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Overwrite the contents directly, bypassing any write failure switch.
    pub fn replace(&self, contents: impl Into<Vec<u8>>) {
        let contents = contents.into();
        match self.contents.lock() {
            Ok(mut guard) => *guard = contents,
            Err(poisoned) => *poisoned.into_inner() = contents,
        }
    }

    /// Make subsequent writes fail with an I/O error (for exercising persist failures).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl JournalFile for MemoryFile {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn read(&self) -> io::Result<Vec<u8>> {
        Ok(self.contents())
    }

    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "write refused",
            ));
        }
        self.replace(bytes);
        Ok(())
    }
}
