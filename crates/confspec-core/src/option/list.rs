use log::warn;

use crate::option::OptionKind;
use crate::option::error::OptionError;
use crate::value::Value;

/// List whose elements are parsed and represented by another option kind.
///
/// Text input must be bracketed: `[a, b, c]`. Commas nested inside
/// brackets, parentheses, braces or quotes do not split. In strict mode the
/// first bad element fails the whole list; otherwise bad elements are
/// logged and dropped.
#[derive(Debug)]
pub struct ListOption {
    element: Box<dyn OptionKind>,
    strict: bool,
}

impl ListOption {
    pub fn of(element: impl OptionKind + 'static) -> Self {
        Self {
            element: Box::new(element),
            strict: true,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn lenient(self) -> Self {
        self.strict(false)
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn element(&self) -> &dyn OptionKind {
        self.element.as_ref()
    }

    fn parse_items(&self, items: Vec<Value>) -> Result<Value, OptionError> {
        let mut parsed = Vec::with_capacity(items.len());
        for item in items {
            match self.element.parse(&item) {
                Ok(value) => parsed.push(value),
                Err(e) if self.strict => return Err(e),
                Err(e) => warn!("Skipping list element <{}>: {}", item, e),
            }
        }
        Ok(Value::List(parsed))
    }
}

/// Split the inside of a bracketed list on top-level commas.
pub(crate) fn split_list(text: &str) -> Result<Vec<String>, OptionError> {
    let malformed = |reason: &str| OptionError::parse("list", text, reason);

    let inner = text
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| malformed("expected text enclosed in '[' and ']'"))?;
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut items = Vec::new();
    let mut current = String::new();
    let mut closers: Vec<char> = Vec::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for c in inner.chars() {
        if let Some(q) = quote {
            current.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' => {
                quote = Some(c);
                current.push(c);
            }
            '[' => {
                closers.push(']');
                current.push(c);
            }
            '(' => {
                closers.push(')');
                current.push(c);
            }
            '{' => {
                closers.push('}');
                current.push(c);
            }
            ']' | ')' | '}' => {
                if closers.pop() != Some(c) {
                    return Err(malformed("unbalanced brackets"));
                }
                current.push(c);
            }
            ',' if closers.is_empty() => items.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    if quote.is_some() {
        return Err(malformed("unterminated quote"));
    }
    if !closers.is_empty() {
        return Err(malformed("unbalanced brackets"));
    }
    items.push(current);

    Ok(items.iter().map(|item| unquote(item.trim())).collect())
}

/// Strip matching quotes and resolve backslash escapes.
fn unquote(item: &str) -> String {
    let quoted = item.len() >= 2
        && ((item.starts_with('"') && item.ends_with('"'))
            || (item.starts_with('\'') && item.ends_with('\'')));
    if !quoted {
        return item.to_string();
    }
    let mut out = String::with_capacity(item.len());
    let mut chars = item[1..item.len() - 1].chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

impl OptionKind for ListOption {
    fn type_name(&self) -> &'static str {
        "list"
    }

    fn parse(&self, raw: &Value) -> Result<Value, OptionError> {
        match raw {
            Value::List(items) => self.parse_items(items.clone()),
            Value::Str(text) => {
                let items = split_list(text)?.into_iter().map(Value::Str).collect();
                self.parse_items(items)
            }
            other => Err(OptionError::parse("list", other, "not a list")),
        }
    }

    fn represent(&self, value: &Value) -> Result<Value, OptionError> {
        match value {
            Value::List(items) => items
                .iter()
                .map(|item| self.element.represent(item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            other => Err(OptionError::parse("list", other, "not a list")),
        }
    }
}
