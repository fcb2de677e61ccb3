use std::fmt;
use std::sync::Arc;

use crate::option::OptionKind;
use crate::option::error::OptionError;
use crate::utils::first_line;
use crate::value::Value;

/// Post-processing applied to text after it has been coerced to a string
#[derive(Clone)]
pub struct Cleaner(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl Cleaner {
    pub fn new<F>(clean: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(clean))
    }

    /// Keep only the first non-blank line, trimmed.
    pub fn first_line() -> Self {
        Self::new(first_line)
    }

    pub fn apply(&self, text: &str) -> String {
        (self.0)(text)
    }
}

impl fmt::Debug for Cleaner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cleaner").finish_non_exhaustive()
    }
}

/// Free text option
#[derive(Debug, Clone)]
pub struct TextOption {
    name: &'static str,
    cleaner: Option<Cleaner>,
}

impl TextOption {
    pub fn string() -> Self {
        Self {
            name: "string",
            cleaner: None,
        }
    }

    /// Multi-line text
    pub fn text() -> Self {
        Self {
            name: "text",
            cleaner: None,
        }
    }

    /// Single line of text; anything after the first line is dropped.
    pub fn line() -> Self {
        Self {
            name: "line",
            cleaner: Some(Cleaner::first_line()),
        }
    }

    pub fn with_cleaner(mut self, cleaner: Cleaner) -> Self {
        self.cleaner = Some(cleaner);
        self
    }

    fn clean(&self, text: String) -> String {
        match &self.cleaner {
            Some(cleaner) => cleaner.apply(&text),
            None => text,
        }
    }
}

impl Default for TextOption {
    fn default() -> Self {
        Self::string()
    }
}

impl OptionKind for TextOption {
    fn type_name(&self) -> &'static str {
        self.name
    }

    fn parse(&self, raw: &Value) -> Result<Value, OptionError> {
        let text = match raw {
            Value::Str(s) => s.clone(),
            other => other.to_string(),
        };
        Ok(Value::Str(self.clean(text)))
    }

    fn represent(&self, value: &Value) -> Result<Value, OptionError> {
        match value {
            Value::Str(_) => Ok(value.clone()),
            other => Ok(Value::Str(self.clean(other.to_string()))),
        }
    }
}
