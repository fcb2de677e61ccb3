use crate::constants::{FALSE_TOKENS, TRUE_TOKENS};
use crate::option::OptionKind;
use crate::option::error::OptionError;
use crate::option::sformat::NumberFormat;
use crate::value::Value;

/// Boolean option accepting `true/yes/1/on` and `false/no/0/off`
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanOption;

impl BooleanOption {
    pub fn new() -> Self {
        Self
    }
}

impl OptionKind for BooleanOption {
    fn type_name(&self) -> &'static str {
        "boolean"
    }

    fn parse(&self, raw: &Value) -> Result<Value, OptionError> {
        match raw {
            Value::Bool(b) => Ok(Value::Bool(*b)),
            Value::Int(0) => Ok(Value::Bool(false)),
            Value::Int(1) => Ok(Value::Bool(true)),
            Value::Str(s) => {
                let token = s.trim().to_lowercase();
                if TRUE_TOKENS.contains(&token.as_str()) {
                    Ok(Value::Bool(true))
                } else if FALSE_TOKENS.contains(&token.as_str()) {
                    Ok(Value::Bool(false))
                } else {
                    Err(OptionError::parse("boolean", s, "unrecognized token"))
                }
            }
            other => Err(OptionError::parse("boolean", other, "not a boolean")),
        }
    }

    fn represent(&self, value: &Value) -> Result<Value, OptionError> {
        match value {
            Value::Bool(b) => Ok(Value::Bool(*b)),
            other => Err(OptionError::parse("boolean", other, "not a boolean")),
        }
    }
}

/// Floating point option with an optional output format.
///
/// With a format such as `{:.2f}` parsed values are rounded through the
/// format, so writing a value out and reading it back gives the same
/// number.
#[derive(Debug, Clone, Default)]
pub struct FloatOption {
    format: Option<NumberFormat>,
}

impl FloatOption {
    pub fn new() -> Self {
        Self { format: None }
    }

    pub fn with_format(mut self, format: &str) -> Result<Self, OptionError> {
        let format = NumberFormat::parse(format)?;
        if !format.number_type().is_floating() {
            return Err(OptionError::parse(
                "format string",
                format.as_str(),
                "presentation type is not valid for floats",
            ));
        }
        self.format = Some(format);
        Ok(self)
    }

    pub fn format(&self) -> Option<&NumberFormat> {
        self.format.as_ref()
    }

    fn normalize(&self, value: f64) -> Value {
        match &self.format {
            Some(format) => Value::Float(format.normalize_float(value)),
            None => Value::Float(value),
        }
    }
}

impl OptionKind for FloatOption {
    fn type_name(&self) -> &'static str {
        "float"
    }

    fn parse(&self, raw: &Value) -> Result<Value, OptionError> {
        match raw {
            Value::Float(f) => Ok(self.normalize(*f)),
            Value::Int(i) => Ok(self.normalize(*i as f64)),
            Value::Str(s) => {
                let text = match &self.format {
                    Some(format) => format.strip_affixes(s),
                    None => s.trim().into(),
                };
                text.parse::<f64>()
                    .map(|f| self.normalize(f))
                    .map_err(|e| OptionError::parse("float", s, e.to_string()))
            }
            other => Err(OptionError::parse("float", other, "not a number")),
        }
    }

    fn represent(&self, value: &Value) -> Result<Value, OptionError> {
        match (value, &self.format) {
            (Value::Float(f), Some(format)) => Ok(Value::Str(format.format_float(*f))),
            (Value::Float(f), None) => Ok(Value::Float(*f)),
            (other, _) => Err(OptionError::parse("float", other, "not a float")),
        }
    }
}
