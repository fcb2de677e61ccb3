use crate::option::OptionKind;
use crate::option::error::OptionError;
use crate::value::{Rgb, Value};

/// RGB color written as `#RRGGBB`
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorOption;

impl ColorOption {
    pub fn new() -> Self {
        Self
    }
}

fn parse_hex(text: &str) -> Result<Rgb, OptionError> {
    let digits = text.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(OptionError::parse(
            "color",
            text,
            "expected exactly 6 hexadecimal digits",
        ));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|e| OptionError::parse("color", text, e.to_string()))
    };
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

fn parse_triple(items: &[Value]) -> Result<Rgb, OptionError> {
    let channel = |value: &Value| {
        value
            .as_int()
            .and_then(|i| u8::try_from(i).ok())
            .ok_or_else(|| OptionError::parse("color", value, "channel must be 0-255"))
    };
    match items {
        [r, g, b] => Ok(Rgb::new(channel(r)?, channel(g)?, channel(b)?)),
        _ => Err(OptionError::parse(
            "color",
            Value::List(items.to_vec()),
            "expected three channels",
        )),
    }
}

impl OptionKind for ColorOption {
    fn type_name(&self) -> &'static str {
        "color"
    }

    fn parse(&self, raw: &Value) -> Result<Value, OptionError> {
        match raw {
            Value::Color(rgb) => Ok(Value::Color(*rgb)),
            Value::Str(text) => parse_hex(text).map(Value::Color),
            Value::List(items) => parse_triple(items).map(Value::Color),
            other => Err(OptionError::parse("color", other, "not a color")),
        }
    }

    fn represent(&self, value: &Value) -> Result<Value, OptionError> {
        match value {
            Value::Color(rgb) => Ok(Value::Str(rgb.to_string())),
            other => Err(OptionError::parse("color", other, "not a color")),
        }
    }
}
