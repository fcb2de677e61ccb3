//! # Confspec Errors
//!
//! Defines the crate-wide [`Error`] type.
//!
//! Each subsystem owns a typed error enum ([`OptionError`],
//! [`FormatError`], [`StorageSystemError`]); this module wraps them and adds
//! the manager-level faults. Construction faults (`DuplicateKey`,
//! `EmptySpec`, `UnknownFormat`, `InvalidKey`) are always returned to the
//! caller; operation faults may instead be contained by a manager running
//! in safe mode.
use std::error::Error as StdError;
use std::path::PathBuf;
use std::result::Result as StdResult;

use crate::format::error::FormatError;
use crate::option::error::OptionError;
use crate::storage::error::StorageSystemError;
use thiserror::Error as ThisError;

/// Error type for configuration management
#[derive(Debug, ThisError)]
pub enum Error {
    /// Option definition, parse, validation or consistency failure
    #[error("Option error: {0}")]
    Option(#[from] OptionError),

    /// Serialized document does not have the shape a provider expects
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// Specific, typed storage system error
    #[error("Storage system error: {0}")]
    StorageSystem(#[from] StorageSystemError),

    /// Two options in a specification share a key.
    #[error("Duplicate option key '{key}' in specification")]
    DuplicateKey { key: String },

    /// A manager was built without any options.
    #[error("Specification is empty, at least one option is required")]
    EmptySpec,

    /// The requested format has no registered provider.
    #[error("Unknown format '{name}', supported formats: {}", supported.join(", "))]
    UnknownFormat { name: String, supported: Vec<String> },

    /// The key is not part of the specification.
    #[error("Unknown option key '{0}'")]
    UnknownKey(String),

    /// A change listener reported a failure.
    #[error("Listener for '{key}' failed: {source}")]
    Listener {
        key: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// A stored value could not be converted to the requested Rust type.
    #[error("Value of '{key}' is a {found}, cannot be read as {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;

// Helper to create Io errors with context, wraps StorageSystemError::Io
impl Error {
    pub fn io(source: std::io::Error, operation: impl Into<String>, path: PathBuf) -> Self {
        Error::StorageSystem(StorageSystemError::io(source, operation, path))
    }

    /// True when the error comes from parsing or validating a value.
    pub fn is_value_error(&self) -> bool {
        matches!(
            self,
            Error::Option(OptionError::Parse { .. })
                | Error::Option(OptionError::Validation { .. })
        )
    }
}
