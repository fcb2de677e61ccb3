//! # Format Provider Errors
//!
//! Errors raised while decoding or encoding a serialized configuration.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    /// The document violates the shape the provider expects.
    #[error("Structural error in {format} document: {message}")]
    Structural { format: &'static str, message: String },

    #[error("Deserialization from '{format}' failed: {source}")]
    Decode {
        format: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("Serialization to '{format}' failed: {source}")]
    Encode {
        format: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl FormatError {
    pub fn structural(format: &'static str, message: impl Into<String>) -> Self {
        FormatError::Structural {
            format,
            message: message.into(),
        }
    }
}
