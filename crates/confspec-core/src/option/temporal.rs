use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::constants::{DATE_FORMAT, DATETIME_FORMAT, TIME_FORMAT};
use crate::option::OptionKind;
use crate::option::error::OptionError;
use crate::value::Value;

/// Which calendar type a [`TemporalOption`] holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalKind {
    DateTime,
    Date,
    Time,
}

impl TemporalKind {
    fn name(self) -> &'static str {
        match self {
            TemporalKind::DateTime => "datetime",
            TemporalKind::Date => "date",
            TemporalKind::Time => "time",
        }
    }

    fn default_format(self) -> &'static str {
        match self {
            TemporalKind::DateTime => DATETIME_FORMAT,
            TemporalKind::Date => DATE_FORMAT,
            TemporalKind::Time => TIME_FORMAT,
        }
    }
}

/// Date, time or date-time option read and written with a strftime format
#[derive(Debug, Clone)]
pub struct TemporalOption {
    kind: TemporalKind,
    format: String,
}

impl TemporalOption {
    pub fn datetime() -> Self {
        Self::of(TemporalKind::DateTime)
    }

    pub fn date() -> Self {
        Self::of(TemporalKind::Date)
    }

    pub fn time() -> Self {
        Self::of(TemporalKind::Time)
    }

    fn of(kind: TemporalKind) -> Self {
        Self {
            kind,
            format: kind.default_format().to_string(),
        }
    }

    /// Replace the strftime format. Formats chrono cannot interpret are
    /// rejected.
    pub fn with_format(mut self, format: &str) -> Result<Self, OptionError> {
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(OptionError::parse(
                "format string",
                format,
                "invalid strftime specifier",
            ));
        }
        self.format = format.to_string();
        Ok(self)
    }

    pub fn kind(&self) -> TemporalKind {
        self.kind
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    fn parse_text(&self, text: &str) -> Result<Value, OptionError> {
        let text = text.trim();
        let parsed = match self.kind {
            TemporalKind::DateTime => {
                NaiveDateTime::parse_from_str(text, &self.format).map(Value::DateTime)
            }
            TemporalKind::Date => NaiveDate::parse_from_str(text, &self.format).map(Value::Date),
            TemporalKind::Time => NaiveTime::parse_from_str(text, &self.format).map(Value::Time),
        };
        parsed.map_err(|e| {
            OptionError::parse(
                self.kind.name(),
                text,
                format!("does not match '{}': {}", self.format, e),
            )
        })
    }

    fn format_value(&self, value: &Value) -> Result<String, OptionError> {
        let mut out = String::new();
        let written = match (self.kind, value) {
            (TemporalKind::DateTime, Value::DateTime(dt)) => {
                write!(out, "{}", dt.format(&self.format))
            }
            (TemporalKind::Date, Value::Date(d)) => write!(out, "{}", d.format(&self.format)),
            (TemporalKind::Time, Value::Time(t)) => write!(out, "{}", t.format(&self.format)),
            (kind, other) => {
                return Err(OptionError::parse(kind.name(), other, "wrong value type"));
            }
        };
        written.map_err(|_| {
            OptionError::parse(
                self.kind.name(),
                value,
                format!("cannot be written with '{}'", self.format),
            )
        })?;
        Ok(out)
    }
}

impl OptionKind for TemporalOption {
    fn type_name(&self) -> &'static str {
        self.kind.name()
    }

    fn parse(&self, raw: &Value) -> Result<Value, OptionError> {
        match raw {
            Value::Str(s) => self.parse_text(s),
            // Typed values are truncated to what the format can express.
            Value::DateTime(_) | Value::Date(_) | Value::Time(_) => {
                let text = self.format_value(raw)?;
                self.parse_text(&text)
            }
            other => Err(OptionError::parse(self.kind.name(), other, "wrong value type")),
        }
    }

    fn represent(&self, value: &Value) -> Result<Value, OptionError> {
        self.format_value(value).map(Value::Str)
    }
}
