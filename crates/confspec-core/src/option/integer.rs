use std::borrow::Cow;

use crate::option::OptionKind;
use crate::option::error::OptionError;
use crate::option::sformat::{NumberFormat, NumberType};
use crate::value::Value;

const KIND: &str = "integer";

/// Integer option with a configurable radix and output format.
///
/// Radix 0 auto-detects `0x`, `0o` and `0b` prefixes and otherwise reads
/// decimal without leading zeros (padding produced by a format string is
/// allowed). With a hex, octal or binary format string, radix 0 reads in
/// the format's radix so written values parse back. Any other radix must
/// be in `2..=36`; the literal prefix matching radix 2, 8 or 16 is
/// accepted as well.
#[derive(Debug, Clone)]
pub struct IntegerOption {
    radix: u32,
    format: Option<NumberFormat>,
}

impl IntegerOption {
    /// Auto-detecting radix, written in decimal
    pub fn new() -> Self {
        Self {
            radix: 0,
            format: None,
        }
    }

    pub fn decimal() -> Self {
        Self {
            radix: 10,
            format: None,
        }
    }

    /// Base 8, written as `0{:o}`
    pub fn octal() -> Self {
        Self {
            radix: 8,
            format: Some(NumberFormat::radix_preset("0", NumberType::Octal)),
        }
    }

    /// Base 16, written as `0x{:x}`
    pub fn hexadecimal() -> Self {
        Self {
            radix: 16,
            format: Some(NumberFormat::radix_preset("0x", NumberType::LowerHex)),
        }
    }

    pub fn with_radix(mut self, radix: u32) -> Self {
        self.radix = radix;
        self
    }

    /// Use a format string such as `{:08x}` when writing the value.
    pub fn with_format(mut self, format: &str) -> Result<Self, OptionError> {
        let format = NumberFormat::parse(format)?;
        if !format.number_type().is_integral() {
            return Err(OptionError::parse(
                "format string",
                format.as_str(),
                "presentation type is not valid for integers",
            ));
        }
        self.format = Some(format);
        Ok(self)
    }

    pub fn radix(&self) -> u32 {
        self.radix
    }

    pub fn format(&self) -> Option<&NumberFormat> {
        self.format.as_ref()
    }

    /// Radix used for reading: the format's radix stands in for radix 0
    fn read_radix(&self) -> u32 {
        match (self.radix, &self.format) {
            (0, Some(format)) => format.number_type().radix().unwrap_or(0),
            (radix, _) => radix,
        }
    }

    fn parse_text(&self, text: &str) -> Result<i64, OptionError> {
        let read_radix = self.read_radix();
        if read_radix == 1 || read_radix > 36 {
            return Err(OptionError::parse(
                KIND,
                text,
                "radix must be 0 or between 2 and 36",
            ));
        }

        let trimmed = text.trim();
        let (negative, unsigned) = split_sign(trimmed);
        if let Some((detected, rest)) = radix_prefix(unsigned) {
            if read_radix == 0 || read_radix == detected {
                return finish(text, negative, detected, rest);
            }
        }

        let stripped = match &self.format {
            Some(format) => format.strip_affixes(trimmed),
            None => Cow::Borrowed(trimmed),
        };
        let (negative, digits) = split_sign(&stripped);
        let radix = match read_radix {
            0 if self.format.is_none() && has_leading_zeros(digits) => {
                return Err(OptionError::parse(
                    KIND,
                    text,
                    "leading zeros are not allowed in decimal literals",
                ));
            }
            0 => 10,
            radix => radix,
        };
        finish(text, negative, radix, digits)
    }

    fn to_text(&self, value: i64) -> Value {
        match (&self.format, self.radix) {
            (Some(format), _) => Value::Str(format.format_int(value)),
            (None, 0 | 10) => Value::Int(value),
            (None, radix) => Value::Str(to_radix_string(value, radix)),
        }
    }
}

impl Default for IntegerOption {
    fn default() -> Self {
        Self::new()
    }
}

fn split_sign(text: &str) -> (bool, &str) {
    match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    }
}

fn has_leading_zeros(digits: &str) -> bool {
    digits.len() > 1 && digits.starts_with('0') && digits.contains(|c: char| c != '0')
}

fn radix_prefix(text: &str) -> Option<(u32, &str)> {
    let lower = text.get(..2)?.to_ascii_lowercase();
    let radix = match lower.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    Some((radix, &text[2..]))
}

fn finish(input: &str, negative: bool, radix: u32, digits: &str) -> Result<i64, OptionError> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(OptionError::parse(KIND, input, "not a number"));
    }
    let magnitude = i128::from_str_radix(digits, radix)
        .map_err(|e| OptionError::parse(KIND, input, e.to_string()))?;
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).map_err(|_| OptionError::parse(KIND, input, "out of range"))
}

fn to_radix_string(value: i64, radix: u32) -> String {
    let mut magnitude = value.unsigned_abs();
    if magnitude == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while magnitude > 0 {
        let digit = (magnitude % u64::from(radix)) as u32;
        digits.push(char::from_digit(digit, radix).unwrap_or('?'));
        magnitude /= u64::from(radix);
    }
    if value < 0 {
        digits.push('-');
    }
    digits.iter().rev().collect()
}

impl OptionKind for IntegerOption {
    fn type_name(&self) -> &'static str {
        KIND
    }

    fn parse(&self, raw: &Value) -> Result<Value, OptionError> {
        match raw {
            Value::Int(i) => Ok(Value::Int(*i)),
            Value::Str(s) => self.parse_text(s).map(Value::Int),
            other => Err(OptionError::parse(
                KIND,
                other,
                format!("{} values are not integers", other.type_name()),
            )),
        }
    }

    fn represent(&self, value: &Value) -> Result<Value, OptionError> {
        match value {
            Value::Int(i) => Ok(self.to_text(*i)),
            other => Err(OptionError::parse(KIND, other, "not an integer")),
        }
    }
}
