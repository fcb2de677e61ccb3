//! # Option Errors
//!
//! Failures raised by option definitions and by the parse / validate /
//! represent contract every option kind obeys.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionError {
    /// Key or category is empty, not an identifier, or a reserved word.
    #[error("Invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    /// The raw input could not be interpreted by the option kind.
    #[error("Cannot parse <{input}> as {kind}: {reason}")]
    Parse {
        kind: &'static str,
        input: String,
        reason: String,
    },

    /// The parsed value was rejected by the option's validator.
    #[error("[{key}] cannot accept <{value}>. Could not be validated.")]
    Validation { key: String, value: String },

    /// A mapped value no longer matches its lookup table.
    #[error("Value mismatch for label <{label}>: {reason}")]
    Consistency { label: String, reason: String },
}

impl OptionError {
    pub fn parse(kind: &'static str, input: impl ToString, reason: impl Into<String>) -> Self {
        OptionError::Parse {
            kind,
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub fn invalid_key(key: impl Into<String>, reason: impl Into<String>) -> Self {
        OptionError::InvalidKey {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
