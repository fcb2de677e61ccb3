//! # confspec-core
//!
//! Typed configuration specifications backed by a stack of files.
//!
//! A specification is a list of [`ConfigOption`]s, each with a key, a
//! category, an [`OptionKind`] that parses and represents its values and an
//! optional [`Validator`]. A [`Manager`] owns a specification, keeps it in
//! sync with its files through a [`FormatProvider`], and notifies
//! [`Listener`]s of committed changes.
pub mod constants;
pub mod error;
pub mod format;
pub mod manager;
pub mod option;
pub mod report;
pub mod storage;
pub mod utils;
pub mod value;

// Re-export key public types for easier use by the binary
pub use error::{Error, Result};
pub use format::{FormatProvider, supported_formats};
pub use manager::{Listener, ListenerResult, Manager, ManagerBuilder, listener};
pub use option::validation;
pub use option::{
    BooleanOption, ClassEntry, Cleaner, ColorOption, ConfigOption, FloatOption, IntegerOption,
    ListOption, MapOption, MapTable, NumberFormat, OptionError, OptionKind, PathChecker,
    PathOption, TemporalKind, TemporalOption, TextOption, Validator,
};
pub use report::{CollectingSink, ErrorSink, LogSink, Report, set_default_sink};
pub use storage::{LocalStorage, MemoryStorage, StorageProvider};
pub use value::{FromValue, Rgb, Value};

#[doc(hidden)]
pub mod __private {
    pub use paste;
}

#[cfg(test)]
mod tests;
