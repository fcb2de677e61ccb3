//! # Format Providers
//!
//! A format provider translates between a [`Manager`]'s state and one
//! serialized text format. Providers are stateless; they read the manager's
//! category and key views directly and apply every imported value through
//! [`Manager::set`], so validation is never bypassed.
//!
//! The registry is fixed at compile time: `ini`, `json` and `dict` are
//! always present, `toml` and `yaml` are behind the `toml-config` and
//! `yaml-config` features.
//!
//! The `dict` provider reads a restricted literal grammar and never
//! evaluates its input, but its documents can still carry arbitrary values
//! into the application; only import text from a trusted source.
pub mod dict;
pub mod error;
pub mod ini;
pub mod json;
pub(crate) mod literal;
#[cfg(feature = "toml-config")]
pub mod toml_format;
pub(crate) mod tree;
#[cfg(feature = "yaml-config")]
pub mod yaml_format;

use std::fmt::Debug;
use std::sync::LazyLock;

use crate::error::Result;
use crate::manager::Manager;

pub use dict::DictFormat;
pub use error::FormatError;
pub use ini::IniFormat;
pub use json::JsonFormat;
#[cfg(feature = "toml-config")]
pub use toml_format::TomlFormat;
#[cfg(feature = "yaml-config")]
pub use yaml_format::YamlFormat;

/// Codec between a manager and one text format
pub trait FormatProvider: Send + Sync + Debug {
    /// Registry name of the format
    fn name(&self) -> &'static str;

    /// Apply the configuration in `text` to `manager`.
    fn do_import(&self, manager: &mut Manager, text: &str) -> Result<()>;

    /// Serialize the current state of `manager`.
    fn do_export(&self, manager: &Manager) -> Result<String>;
}

static PROVIDERS: LazyLock<Vec<&'static dyn FormatProvider>> = LazyLock::new(|| {
    let mut providers: Vec<&'static dyn FormatProvider> = vec![&IniFormat, &JsonFormat, &DictFormat];
    #[cfg(feature = "toml-config")]
    providers.push(&TomlFormat);
    #[cfg(feature = "yaml-config")]
    providers.push(&YamlFormat);
    providers
});

/// Look up a registered provider by name.
pub fn provider(name: &str) -> Option<&'static dyn FormatProvider> {
    PROVIDERS.iter().copied().find(|p| p.name() == name)
}

/// Names of all registered formats, sorted
pub fn supported_formats() -> Vec<&'static str> {
    let mut names: Vec<_> = PROVIDERS.iter().map(|p| p.name()).collect();
    names.sort_unstable();
    names
}

// Test module declaration
#[cfg(test)]
mod tests;
