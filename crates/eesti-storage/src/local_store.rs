//! Key/value local store
//!
//! The durable interface is two fixed keys holding JSON strings, exactly
//! like the browser local storage the original application wrote to. The
//! file backend keeps one file per key under an application directory;
//! the in-memory backend backs tests.

use crate::error::Result;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Key holding the serialized document list
pub const DOCUMENTS_KEY: &str = "eesti-app-documents";

/// Key holding the serialized user profile
pub const PROFILE_KEY: &str = "eesti-app-user-profile";

/// Local storage interface
pub trait LocalStore: Send + Sync {
    /// Read the value under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`
    fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`
    fn remove(&self, key: &str) -> Result<()>;
}

/// File-backed local store, one JSON file per key
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at an explicit directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a store under the platform application data directory
    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("ee", "eesti-app", "eesti-wallet")
            .ok_or_else(|| crate::Error::Storage("no home directory".to_string()))?;
        Ok(Self::new(dirs.data_dir()))
    }

    /// Store root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl LocalStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// In-memory local store for tests
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}
