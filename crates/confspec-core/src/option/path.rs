use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::option::OptionKind;
use crate::option::error::OptionError;
use crate::utils::expand_path;
use crate::value::Value;

/// Check applied to a resolved path before it is accepted
#[derive(Clone)]
pub enum PathChecker {
    Exists,
    IsFile,
    IsDir,
    Unchecked,
    Custom(Arc<dyn Fn(&Path) -> bool + Send + Sync>),
}

impl PathChecker {
    pub fn custom<F>(check: F) -> Self
    where
        F: Fn(&Path) -> bool + Send + Sync + 'static,
    {
        PathChecker::Custom(Arc::new(check))
    }

    fn check(&self, path: &Path) -> Result<(), &'static str> {
        let (ok, reason) = match self {
            PathChecker::Exists => (path.exists(), "path does not exist"),
            PathChecker::IsFile => (path.is_file(), "not an existing file"),
            PathChecker::IsDir => (path.is_dir(), "not an existing directory"),
            PathChecker::Unchecked => (true, ""),
            PathChecker::Custom(check) => (check(path), "rejected by path checker"),
        };
        if ok { Ok(()) } else { Err(reason) }
    }
}

impl fmt::Debug for PathChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathChecker::Exists => f.write_str("Exists"),
            PathChecker::IsFile => f.write_str("IsFile"),
            PathChecker::IsDir => f.write_str("IsDir"),
            PathChecker::Unchecked => f.write_str("Unchecked"),
            PathChecker::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Filesystem path option. Values are stored as absolute paths with `~`
/// expanded.
#[derive(Debug, Clone)]
pub struct PathOption {
    name: &'static str,
    checker: PathChecker,
}

impl PathOption {
    /// Any existing path
    pub fn path() -> Self {
        Self {
            name: "path",
            checker: PathChecker::Exists,
        }
    }

    pub fn file() -> Self {
        Self {
            name: "file",
            checker: PathChecker::IsFile,
        }
    }

    pub fn dir() -> Self {
        Self {
            name: "directory",
            checker: PathChecker::IsDir,
        }
    }

    /// Path that does not need to exist
    pub fn unchecked() -> Self {
        Self {
            name: "path",
            checker: PathChecker::Unchecked,
        }
    }

    pub fn with_checker(mut self, checker: PathChecker) -> Self {
        self.checker = checker;
        self
    }

    pub fn checker(&self) -> &PathChecker {
        &self.checker
    }

    fn resolve(&self, path: &Path) -> Result<Value, OptionError> {
        let absolute = expand_path(path)
            .map_err(|e| OptionError::parse(self.name, path.display(), e.to_string()))?;
        self.checker
            .check(&absolute)
            .map_err(|reason| OptionError::parse(self.name, absolute.display(), reason))?;
        Ok(Value::Path(absolute))
    }
}

impl OptionKind for PathOption {
    fn type_name(&self) -> &'static str {
        self.name
    }

    fn parse(&self, raw: &Value) -> Result<Value, OptionError> {
        match raw {
            Value::Path(path) => self.resolve(path),
            Value::Str(text) => self.resolve(&PathBuf::from(text.trim())),
            other => Err(OptionError::parse(self.name, other, "not a path")),
        }
    }

    fn represent(&self, value: &Value) -> Result<Value, OptionError> {
        match value {
            Value::Path(path) => Ok(Value::Str(path.to_string_lossy().into_owned())),
            other => Err(OptionError::parse(self.name, other, "not a path")),
        }
    }
}
