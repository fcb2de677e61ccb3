//! # Configuration Options
//!
//! A [`ConfigOption`] is a named, typed, validated configuration cell. Its
//! type behavior comes from an [`OptionKind`]: a pair of pure functions,
//! `parse` (raw input to internal value) and `represent` (internal value to
//! a re-parseable external form), satisfying
//! `parse(represent(x)) == x` for every value `parse` can produce.
//!
//! Every write goes through parse, then the optional [`Validator`], then
//! commit. A rejected value leaves the previous one in place.
pub mod color;
pub mod error;
pub mod integer;
pub mod list;
pub mod mapping;
pub mod path;
pub mod scalar;
pub mod sformat;
pub mod temporal;
pub mod text;
pub mod validation;

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::constants::{DEFAULT_CATEGORY, RESERVED_WORDS};
use crate::utils::{first_line, is_identifier};
use crate::value::Value;

pub use color::ColorOption;
pub use error::OptionError;
pub use integer::IntegerOption;
pub use list::ListOption;
pub use mapping::{ClassEntry, MapOption, MapTable};
pub use path::{PathChecker, PathOption};
pub use scalar::{BooleanOption, FloatOption};
pub use sformat::NumberFormat;
pub use temporal::{TemporalKind, TemporalOption};
pub use text::{Cleaner, TextOption};

/// Parse/represent contract implemented by every option type
pub trait OptionKind: fmt::Debug + Send + Sync {
    /// Name of the kind, used in error messages
    fn type_name(&self) -> &'static str;

    /// Interpret a raw value. Must accept text and must return values that
    /// are already of the internal type unchanged.
    fn parse(&self, raw: &Value) -> Result<Value, OptionError>;

    /// Inverse of `parse`: produce a form that parses back to `value`.
    fn represent(&self, value: &Value) -> Result<Value, OptionError>;
}

impl<K: OptionKind + ?Sized> OptionKind for Box<K> {
    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn parse(&self, raw: &Value) -> Result<Value, OptionError> {
        (**self).parse(raw)
    }

    fn represent(&self, value: &Value) -> Result<Value, OptionError> {
        (**self).represent(value)
    }
}

/// Acceptance predicate over a parsed value
#[derive(Clone)]
pub struct Validator(Arc<dyn Fn(&Value) -> bool + Send + Sync>);

impl Validator {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(predicate))
    }

    pub fn check(&self, value: &Value) -> bool {
        (self.0)(value)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator").finish_non_exhaustive()
    }
}

impl<F> From<F> for Validator
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    fn from(predicate: F) -> Self {
        Validator::new(predicate)
    }
}

/// Check that `name` can be used as an option key or category.
pub fn validate_key(name: &str) -> Result<String, OptionError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(OptionError::invalid_key(name, "must not be empty"));
    }
    if !is_identifier(name) {
        return Err(OptionError::invalid_key(name, "not a valid identifier"));
    }
    if RESERVED_WORDS.contains(&name) {
        return Err(OptionError::invalid_key(name, "reserved word"));
    }
    Ok(name.to_string())
}

/// A named, typed configuration cell
#[derive(Debug)]
pub struct ConfigOption {
    key: String,
    category: String,
    comment: String,
    kind: Box<dyn OptionKind>,
    validator: Option<Validator>,
    value: Value,
}

impl ConfigOption {
    /// Start building an option. `default` goes through the same
    /// parse/validate path as any other value when the option is built.
    pub fn builder(
        key: impl Into<String>,
        kind: impl OptionKind + 'static,
        default: impl Into<Value>,
    ) -> OptionBuilder {
        OptionBuilder {
            key: key.into(),
            kind: Box::new(kind),
            default: default.into(),
            validator: None,
            category: DEFAULT_CATEGORY.to_string(),
            comment: String::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Move the option to another category.
    pub fn set_category(&mut self, category: &str) -> Result<(), OptionError> {
        self.category = validate_key(category)?;
        Ok(())
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Replace the comment; only its first line is kept.
    pub fn set_comment(&mut self, comment: &str) {
        self.comment = first_line(comment);
    }

    pub fn kind(&self) -> &dyn OptionKind {
        self.kind.as_ref()
    }

    pub fn validator(&self) -> Option<&Validator> {
        self.validator.as_ref()
    }

    /// Current internal value
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn parse(&self, raw: &Value) -> Result<Value, OptionError> {
        self.kind.parse(raw)
    }

    /// Run the validator, if any, against a parsed value.
    pub fn validate(&self, parsed: &Value) -> Result<(), OptionError> {
        match &self.validator {
            Some(validator) if !validator.check(parsed) => Err(OptionError::Validation {
                key: self.key.clone(),
                value: parsed.to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Parse, validate and commit a new value.
    pub fn set_value(&mut self, raw: impl Into<Value>) -> Result<(), OptionError> {
        let parsed = self.parse(&raw.into())?;
        self.validate(&parsed)?;
        self.value = parsed;
        Ok(())
    }

    /// Like [`set_value`](Self::set_value) but skips the commit when the
    /// parsed value equals the current one. Returns the previous value when
    /// something changed.
    pub(crate) fn assign(&mut self, raw: &Value) -> Result<Option<Value>, OptionError> {
        let parsed = self.parse(raw)?;
        if parsed.same_as(&self.value) {
            return Ok(None);
        }
        self.validate(&parsed)?;
        Ok(Some(std::mem::replace(&mut self.value, parsed)))
    }

    /// External representation of the current value
    pub fn represent(&self) -> Result<Value, OptionError> {
        self.kind.represent(&self.value)
    }
}

impl fmt::Display for ConfigOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.represent() {
            Ok(repr) => write!(f, "{}", repr),
            Err(e) => write!(f, "<{}>", e),
        }
    }
}

impl PartialEq for ConfigOption {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for ConfigOption {}

impl PartialOrd for ConfigOption {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ConfigOption {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Builder for [`ConfigOption`]
#[derive(Debug)]
pub struct OptionBuilder {
    key: String,
    kind: Box<dyn OptionKind>,
    default: Value,
    validator: Option<Validator>,
    category: String,
    comment: String,
}

impl OptionBuilder {
    pub fn validator(mut self, validator: impl Into<Validator>) -> Self {
        self.validator = Some(validator.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn comment(mut self, comment: impl AsRef<str>) -> Self {
        self.comment = first_line(comment.as_ref());
        self
    }

    /// Validate the key and category, then set the default value.
    pub fn build(self) -> Result<ConfigOption, OptionError> {
        let key = validate_key(&self.key)?;
        let category = validate_key(&self.category)?;
        let parsed = self.kind.parse(&self.default)?;
        let option = ConfigOption {
            key,
            category,
            comment: self.comment,
            kind: self.kind,
            validator: self.validator,
            value: parsed,
        };
        option.validate(&option.value)?;
        Ok(option)
    }
}

// Test module declaration
#[cfg(test)]
mod tests;
