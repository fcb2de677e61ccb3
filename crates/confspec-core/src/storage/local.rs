use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::storage::error::StorageSystemError;
use crate::storage::provider::StorageProvider;

/// Local filesystem storage provider.
///
/// Paths are used as given; the manager resolves them to absolute paths
/// before any I/O. Writes go to a temporary file in the target directory
/// which then replaces the target, so readers never see a partial file.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl StorageProvider for LocalStorage {
    fn name(&self) -> &str {
        "local"
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|e| Error::io(e, "create_dir_all", path.to_path_buf()))
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| Error::io(e, "read_to_string", path.to_path_buf()))
    }

    fn write_string(&self, path: &Path, contents: &str) -> Result<()> {
        // Ensure parent directory exists
        let parent = path.parent().ok_or_else(|| {
            Error::StorageSystem(StorageSystemError::PathResolutionFailed {
                path: path.to_path_buf(),
                reason: "cannot write to a path without a parent directory".to_string(),
            })
        })?;
        if !parent.is_dir() {
            self.create_dir_all(parent)?;
        }

        // Create a named temporary file in the same directory as the target file
        let mut temp_file = NamedTempFile::new_in(parent)
            .map_err(|e| Error::io(e, "create_temp_file", parent.to_path_buf()))?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| Error::io(e, "write_to_temp_file", temp_file.path().to_path_buf()))?;

        // Persist the temporary file, atomically replacing the target file
        temp_file
            .persist(path)
            .map_err(|e| Error::io(e.error, "persist_temp_file", path.to_path_buf()))?;

        Ok(())
    }
}
