use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::storage::error::StorageSystemError;

/// Expand a leading `~` to the user's home directory and make the path
/// absolute against the current working directory.
///
/// The result is normalized lexically; symlinks are not resolved and the
/// path does not need to exist.
pub fn expand_path<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let expanded = match path.strip_prefix("~") {
        Ok(rest) => {
            let home = dirs::home_dir().ok_or_else(|| {
                Error::StorageSystem(StorageSystemError::PathResolutionFailed {
                    path: path.to_path_buf(),
                    reason: "home directory is unknown".to_string(),
                })
            })?;
            home.join(rest)
        }
        Err(_) => path.to_path_buf(),
    };

    let absolute = std::path::absolute(&expanded)
        .map_err(|e| Error::io(e, "absolutize", expanded.clone()))?;
    Ok(normalize_path(&absolute))
}

/// Lexically remove `.` and `..` components from a path.
///
/// `..` at the root is dropped, mirroring how the OS treats `/..`.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                match result.components().next_back() {
                    Some(Component::Normal(_)) => {
                        result.pop();
                    }
                    Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                    _ => result.push(".."),
                }
            }
            other => result.push(other.as_os_str()),
        }
    }
    result
}
