use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{Error, Result};

use super::provider::StorageProvider;

/// In-memory storage provider.
///
/// Holds files in a shared map, so a clone handed to a manager can still be
/// inspected afterwards. Every directory is considered to exist.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    files: Arc<RwLock<BTreeMap<PathBuf, String>>>,
    writes: Arc<RwLock<usize>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file without counting it as a write.
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files.write().insert(path.into(), contents.into());
        self
    }

    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files.read().get(path).cloned()
    }

    /// Number of successful writes since creation
    pub fn write_count(&self) -> usize {
        *self.writes.read()
    }
}

impl StorageProvider for MemoryStorage {
    fn name(&self) -> &str {
        "memory"
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.read().contains_key(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.exists(path)
    }

    fn create_dir_all(&self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.contents(path).ok_or_else(|| {
            Error::io(
                io::Error::from(io::ErrorKind::NotFound),
                "read_to_string",
                path.to_path_buf(),
            )
        })
    }

    fn write_string(&self, path: &Path, contents: &str) -> Result<()> {
        self.files
            .write()
            .insert(path.to_path_buf(), contents.to_string());
        *self.writes.write() += 1;
        Ok(())
    }
}
