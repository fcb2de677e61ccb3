//! Restricted mapping-literal grammar.
//!
//! Reads nested literals in the style of a Python `repr`: `{...}` mappings,
//! `[...]` lists, `(...)` tuples, quoted strings, integers (with `0x`, `0o`
//! and `0b` prefixes), floats, booleans and `None`. Trailing commas and `#`
//! comments are allowed. Nothing is ever evaluated, and documents nested
//! deeper than [`MAX_DEPTH`] are rejected before parsing.
use chumsky::extra;
use chumsky::prelude::*;

use crate::value::{Value, format_float};

use super::tree::Node;

/// A decoded literal
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Literal {
    Map(Vec<(Literal, Literal)>),
    List(Vec<Literal>),
    Tuple(Vec<Literal>),
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    None,
}

impl Literal {
    pub(crate) fn into_node(self) -> Node {
        match self {
            Literal::Map(entries) => {
                let mut table = Vec::with_capacity(entries.len());
                for (key, value) in entries {
                    match key {
                        Literal::Str(name) => table.push((name, value.into_node())),
                        other => {
                            return Node::Invalid(format!("non-string mapping key {:?}", other));
                        }
                    }
                }
                Node::Table(table)
            }
            other => match other.into_value() {
                Ok(value) => Node::Leaf(value),
                Err(what) => Node::Invalid(what),
            },
        }
    }

    fn into_value(self) -> Result<Value, String> {
        match self {
            Literal::Str(s) => Ok(Value::Str(s)),
            Literal::Int(i) => Ok(Value::Int(i)),
            Literal::Float(f) => Ok(Value::Float(f)),
            Literal::Bool(b) => Ok(Value::Bool(b)),
            Literal::List(items) | Literal::Tuple(items) => items
                .into_iter()
                .map(Literal::into_value)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            Literal::None => Err("None".to_string()),
            Literal::Map(_) => Err("nested mapping".to_string()),
        }
    }
}

/// Syntax error with the byte offset it was found at
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LiteralError {
    pub offset: usize,
    pub message: String,
}

impl std::fmt::Display for LiteralError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at offset {}", self.message, self.offset)
    }
}

impl std::error::Error for LiteralError {}

type Extra<'src> = extra::Err<Rich<'src, char>>;

/// Deepest bracket nesting accepted before parsing starts
pub(crate) const MAX_DEPTH: usize = 32;

/// Parse a complete document holding exactly one literal.
pub(crate) fn parse(text: &str) -> Result<Literal, LiteralError> {
    check_depth(text)?;
    literal()
        .then_ignore(end())
        .parse(text)
        .into_result()
        .map_err(|errors| match errors.into_iter().next() {
            Some(error) => LiteralError {
                offset: error.span().start,
                message: error.reason().to_string(),
            },
            None => LiteralError {
                offset: 0,
                message: "invalid literal".to_string(),
            },
        })
}

/// Reject documents nested deeper than [`MAX_DEPTH`]. Brackets inside
/// strings and comments are not counted.
fn check_depth(text: &str) -> Result<(), LiteralError> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut comment = false;
    for (offset, c) in text.char_indices() {
        if comment {
            comment = c != '\n';
            continue;
        }
        if let Some(open) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == open {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' => quote = Some(c),
            '#' => comment = true,
            '{' | '[' | '(' => {
                depth += 1;
                if depth > MAX_DEPTH {
                    return Err(LiteralError {
                        offset,
                        message: format!("nesting deeper than {} levels", MAX_DEPTH),
                    });
                }
            }
            '}' | ']' | ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

/// Whitespace and `#` comments
fn blank<'src>() -> impl Parser<'src, &'src str, (), Extra<'src>> + Clone {
    let space = any().filter(|c: &char| c.is_whitespace()).ignored();
    let comment = just('#').then(none_of("\n").repeated()).ignored();
    space.or(comment).repeated().ignored()
}

fn quoted<'src>(quote: char) -> impl Parser<'src, &'src str, String, Extra<'src>> + Clone {
    let escape = just('\\').ignore_then(any()).map(|c: char| match c {
        'n' => "\n".to_string(),
        't' => "\t".to_string(),
        'r' => "\r".to_string(),
        '0' => "\0".to_string(),
        '\\' | '\'' | '"' => c.to_string(),
        other => format!("\\{}", other),
    });
    let plain = none_of([quote, '\\']).map(|c: char| c.to_string());
    just(quote)
        .ignore_then(escape.or(plain).repeated().collect::<Vec<_>>())
        .then_ignore(just(quote))
        .map(|parts| parts.concat())
        .labelled("string")
}

fn number<'src>() -> impl Parser<'src, &'src str, Literal, Extra<'src>> + Clone {
    let body = any()
        .filter(|c: &char| c.is_ascii_alphanumeric() || matches!(c, '.' | '_'))
        .repeated();
    one_of("+-")
        .or_not()
        .then(any().filter(|c: &char| c.is_ascii_digit() || *c == '.'))
        .then(body.clone())
        // Signed exponent, as in 1e+5
        .then(one_of("+-").then(body.at_least(1)).or_not())
        .to_slice()
        .try_map(|token: &str, span| {
            number_value(token)
                .ok_or_else(|| Rich::custom(span, format!("invalid number '{}'", token)))
        })
        .labelled("number")
}

fn number_value(token: &str) -> Option<Literal> {
    let cleaned = token.replace('_', "");
    let (negative, body) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.strip_prefix('+').unwrap_or(&cleaned)),
    };
    let radix = match body.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let magnitude = i64::from_str_radix(&body[2..], radix).ok()?;
        return Some(Literal::Int(if negative { -magnitude } else { magnitude }));
    }
    if body.contains(['.', 'e', 'E']) {
        return cleaned.parse().ok().map(Literal::Float);
    }
    cleaned.parse().ok().map(Literal::Int)
}

fn word<'src>() -> impl Parser<'src, &'src str, Literal, Extra<'src>> + Clone {
    any()
        .filter(|c: &char| c.is_alphabetic() || *c == '_')
        .then(
            any()
                .filter(|c: &char| c.is_alphanumeric() || *c == '_')
                .repeated(),
        )
        .to_slice()
        .try_map(|word: &str, span| match word {
            "True" | "true" => Ok(Literal::Bool(true)),
            "False" | "false" => Ok(Literal::Bool(false)),
            "None" => Ok(Literal::None),
            other => Err(Rich::custom(span, format!("unknown name '{}'", other))),
        })
        .labelled("True, False or None")
}

/// One literal, surrounded by optional blanks
fn literal<'src>() -> impl Parser<'src, &'src str, Literal, Extra<'src>> {
    recursive(|value| {
        // Comma separated items, trailing comma allowed
        let sequence = |open: char, close: char| {
            value
                .clone()
                .separated_by(just(','))
                .allow_trailing()
                .collect::<Vec<_>>()
                .then_ignore(blank())
                .delimited_by(just(open), just(close))
        };
        let mapping = value
            .clone()
            .then_ignore(just(':'))
            .then(value.clone())
            .separated_by(just(','))
            .allow_trailing()
            .collect::<Vec<_>>()
            .then_ignore(blank())
            .delimited_by(just('{'), just('}'))
            .map(Literal::Map);

        choice((
            mapping,
            sequence('[', ']').map(Literal::List),
            sequence('(', ')').map(Literal::Tuple),
            quoted('\'').or(quoted('"')).map(Literal::Str),
            number(),
            word(),
        ))
        .padded_by(blank())
    })
}

/// Pretty-print a two-level mapping literal with 4-space indentation.
pub(crate) fn write_document(tree: &[(String, Vec<(String, Value)>)]) -> String {
    let mut out = String::from("{\n");
    for (category, entries) in tree {
        out.push_str(&format!("    {}: {{\n", quote(category)));
        for (key, value) in entries {
            out.push_str(&format!("        {}: {},\n", quote(key), write_value(value)));
        }
        out.push_str("    },\n");
    }
    out.push('}');
    out
}

fn write_value(value: &Value) -> String {
    match value {
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) if f.is_finite() => format_float(*f),
        Value::Float(f) => quote(&format_float(*f)),
        Value::List(items) => {
            let items: Vec<_> = items.iter().map(write_value).collect();
            format!("[{}]", items.join(", "))
        }
        other => quote(&other.to_string()),
    }
}

fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
