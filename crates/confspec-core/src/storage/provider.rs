use std::fmt::Debug;
use std::path::Path;

use crate::error::Result;

/// Trait for storage backends the manager reads and writes its file stack
/// through
pub trait StorageProvider: Send + Sync + Debug {
    /// Get the name of this provider
    fn name(&self) -> &str;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Create a directory and all its parent directories
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Read a file to a string
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Write a string to a file, replacing its contents. Parent
    /// directories are created as needed.
    fn write_string(&self, path: &Path, contents: &str) -> Result<()>;
}
