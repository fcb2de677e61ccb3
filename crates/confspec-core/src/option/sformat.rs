//! Format strings for numeric options.
//!
//! A small subset of Python's format mini language, enough to describe how
//! an integer or float is written to a configuration file: literal
//! prefix/suffix text around one `{}` placeholder whose spec is
//! `[+][0][width][.precision][type]`. `{{` and `}}` escape braces.
use std::borrow::Cow;

use crate::option::error::OptionError;

/// Presentation type of the placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberType {
    /// No type given (`{}`)
    Default,
    Decimal,
    LowerHex,
    UpperHex,
    Octal,
    Binary,
    Fixed,
    Exponent,
}

impl NumberType {
    fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'd' => NumberType::Decimal,
            'x' => NumberType::LowerHex,
            'X' => NumberType::UpperHex,
            'o' => NumberType::Octal,
            'b' => NumberType::Binary,
            'f' | 'F' => NumberType::Fixed,
            'e' | 'E' => NumberType::Exponent,
            _ => return None,
        })
    }

    pub fn is_integral(self) -> bool {
        !matches!(self, NumberType::Fixed | NumberType::Exponent)
    }

    /// Radix written by an integral type other than decimal
    pub fn radix(self) -> Option<u32> {
        match self {
            NumberType::LowerHex | NumberType::UpperHex => Some(16),
            NumberType::Octal => Some(8),
            NumberType::Binary => Some(2),
            _ => None,
        }
    }

    pub fn is_floating(self) -> bool {
        matches!(
            self,
            NumberType::Default | NumberType::Fixed | NumberType::Exponent
        )
    }
}

/// Parsed numeric format string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    source: String,
    prefix: String,
    suffix: String,
    plus: bool,
    zero_pad: bool,
    width: usize,
    precision: Option<usize>,
    ty: NumberType,
}

impl NumberFormat {
    /// Parse a format string such as `0x{:x}` or `{:.2f}`.
    pub fn parse(source: &str) -> Result<Self, OptionError> {
        let err = |reason: &str| OptionError::parse("format string", source, reason);

        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut spec: Option<String> = None;
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            let literal = if spec.is_none() { &mut prefix } else { &mut suffix };
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    if spec.is_some() {
                        return Err(err("only one placeholder is allowed"));
                    }
                    let mut inner = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(ch) => inner.push(ch),
                            None => return Err(err("unterminated placeholder")),
                        }
                    }
                    spec = Some(inner);
                }
                '}' => return Err(err("single '}' encountered")),
                other => literal.push(other),
            }
        }

        let spec = spec.ok_or_else(|| err("missing placeholder"))?;
        let spec = match spec.strip_prefix(':') {
            Some(rest) => rest.to_string(),
            None if spec.is_empty() => String::new(),
            None => return Err(err("positional or named fields are not supported")),
        };

        let mut rest = spec.as_str();
        let plus = match rest.strip_prefix('+') {
            Some(r) => {
                rest = r;
                true
            }
            None => false,
        };
        let zero_pad = match rest.strip_prefix('0') {
            Some(r) => {
                rest = r;
                true
            }
            None => false,
        };
        let width_len = rest.chars().take_while(char::is_ascii_digit).count();
        let width = if width_len > 0 {
            rest[..width_len].parse().map_err(|_| err("invalid width"))?
        } else {
            0
        };
        rest = &rest[width_len..];

        let precision = match rest.strip_prefix('.') {
            Some(r) => {
                let len = r.chars().take_while(char::is_ascii_digit).count();
                if len == 0 {
                    return Err(err("precision requires digits"));
                }
                let precision = r[..len].parse().map_err(|_| err("invalid precision"))?;
                rest = &r[len..];
                Some(precision)
            }
            None => None,
        };

        let mut type_chars = rest.chars();
        let ty = match (type_chars.next(), type_chars.next()) {
            (None, _) => NumberType::Default,
            (Some(c), None) => {
                NumberType::from_char(c).ok_or_else(|| err("unknown presentation type"))?
            }
            _ => return Err(err("trailing characters in format spec")),
        };

        Ok(Self {
            source: source.to_string(),
            prefix,
            suffix,
            plus,
            zero_pad,
            width,
            precision,
            ty,
        })
    }

    /// Format for integers written in a given base with a literal prefix
    pub(crate) fn radix_preset(prefix: &str, ty: NumberType) -> Self {
        let placeholder = match ty {
            NumberType::Octal => "{:o}",
            NumberType::LowerHex => "{:x}",
            NumberType::UpperHex => "{:X}",
            NumberType::Binary => "{:b}",
            _ => "{}",
        };
        Self {
            source: format!("{}{}", prefix, placeholder),
            prefix: prefix.to_string(),
            suffix: String::new(),
            plus: false,
            zero_pad: false,
            width: 0,
            precision: None,
            ty,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn number_type(&self) -> NumberType {
        self.ty
    }

    pub fn format_int(&self, value: i64) -> String {
        let magnitude = value.unsigned_abs();
        let digits = match self.ty {
            NumberType::LowerHex => format!("{:x}", magnitude),
            NumberType::UpperHex => format!("{:X}", magnitude),
            NumberType::Octal => format!("{:o}", magnitude),
            NumberType::Binary => format!("{:b}", magnitude),
            _ => magnitude.to_string(),
        };
        self.assemble(value < 0, digits)
    }

    pub fn format_float(&self, value: f64) -> String {
        let magnitude = value.abs();
        let digits = match (self.ty, self.precision) {
            (NumberType::Exponent, Some(p)) => format!("{:.*e}", p, magnitude),
            (NumberType::Exponent, None) => format!("{:.6e}", magnitude),
            (NumberType::Fixed, p) => format!("{:.*}", p.unwrap_or(6), magnitude),
            (_, Some(p)) => format!("{:.*}", p, magnitude),
            (_, None) => crate::value::format_float(magnitude),
        };
        self.assemble(value.is_sign_negative() && !value.is_nan(), digits)
    }

    /// Round a float through the format so that formatting and parsing
    /// back is lossless.
    pub fn normalize_float(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return value;
        }
        let plain = Self {
            prefix: String::new(),
            suffix: String::new(),
            width: 0,
            ..self.clone()
        };
        plain.format_float(value).parse().unwrap_or(value)
    }

    /// Remove the literal prefix and suffix (and padding) from text
    /// produced by this format. Text that does not carry them is returned
    /// trimmed.
    pub fn strip_affixes<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let text = text.trim();
        let (sign, body) = match text.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", text.strip_prefix('+').unwrap_or(text)),
        };
        let mut stripped = body;
        if !self.prefix.is_empty() {
            if let Some(rest) = stripped.strip_prefix(self.prefix.as_str()) {
                if !rest.trim().is_empty() {
                    stripped = rest;
                }
            }
        }
        if !self.suffix.is_empty() {
            if let Some(rest) = stripped.strip_suffix(self.suffix.as_str()) {
                stripped = rest;
            }
        }
        let stripped = stripped.trim();
        if sign.is_empty() && stripped.len() == text.len() {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(format!("{}{}", sign, stripped))
        }
    }

    fn assemble(&self, negative: bool, digits: String) -> String {
        let sign = if negative {
            "-"
        } else if self.plus {
            "+"
        } else {
            ""
        };
        let used = sign.len() + digits.len();
        let padding = self.width.saturating_sub(used);
        let mut out = String::with_capacity(self.prefix.len() + used + padding + self.suffix.len());
        if self.zero_pad {
            out.push_str(sign);
            out.push_str(&self.prefix);
            out.extend(std::iter::repeat_n('0', padding));
        } else {
            out.extend(std::iter::repeat_n(' ', padding));
            out.push_str(sign);
            out.push_str(&self.prefix);
        }
        out.push_str(&digits);
        out.push_str(&self.suffix);
        out
    }
}
