//! Key/value persistence abstraction
//!
//! The host decides where scores actually live (browser LocalStorage, a file,
//! nothing at all); the core only speaks this trait. Every operation is
//! best-effort: a failed read looks like a missing key and a failed write is
//! logged and dropped. Score loss is low-stakes, so there are no retries.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// A string-keyed store for small blobs of serialized state.
pub trait KeyValueStore {
    /// Read a value; `None` for missing keys or any read failure.
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value; failures are swallowed by the implementation.
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and the headless demo.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// One file per key inside a directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.dir.join(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        let result =
            fs::create_dir_all(&self.dir).and_then(|_| fs::write(self.dir.join(key), value));
        if let Err(err) = result {
            log::warn!("write of '{key}' skipped: {err}");
        }
    }
}
