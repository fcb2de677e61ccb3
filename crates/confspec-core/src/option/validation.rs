//! Stock validators.
//!
//! Each factory returns a [`Validator`] over the parsed value. Numeric
//! validators accept integers and floats and compare integers exactly;
//! a value of any other type is rejected. Text validators look through
//! mapped values to their label.
use std::cmp::Ordering;

use crate::option::Validator;
use crate::value::Value;

fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a.mapped(), b.mapped()) {
        (Value::Int(x), Value::Int(y)) => Some(x.cmp(y)),
        (x, y) => x.as_f64()?.partial_cmp(&y.as_f64()?),
    }
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::Str(s) => Some(s.clone()),
        Value::Mapped { label, .. } => Some(label.clone()),
        Value::Path(p) => Some(p.to_string_lossy().into_owned()),
        _ => None,
    }
}

fn compared_with(bound: impl Into<Value>, accept: fn(Ordering) -> bool) -> Validator {
    let bound = bound.into();
    Validator::new(move |value| compare(value, &bound).is_some_and(accept))
}

/// Strictly greater than zero
pub fn positive() -> Validator {
    greater_than(0)
}

/// Strictly lower than zero
pub fn negative() -> Validator {
    lower_than(0)
}

pub fn greater_than(bound: impl Into<Value>) -> Validator {
    compared_with(bound, Ordering::is_gt)
}

pub fn greater_than_eq(bound: impl Into<Value>) -> Validator {
    compared_with(bound, Ordering::is_ge)
}

pub fn lower_than(bound: impl Into<Value>) -> Validator {
    compared_with(bound, Ordering::is_lt)
}

pub fn lower_than_eq(bound: impl Into<Value>) -> Validator {
    compared_with(bound, Ordering::is_le)
}

/// Inclusive range `low..=high`
pub fn in_range(low: impl Into<Value>, high: impl Into<Value>) -> Validator {
    let low = low.into();
    let high = high.into();
    Validator::new(move |value| {
        compare(value, &low).is_some_and(Ordering::is_ge)
            && compare(value, &high).is_some_and(Ordering::is_le)
    })
}

/// Integer multiple of `factor`. A zero factor accepts only zero.
pub fn multiple_of(factor: i64) -> Validator {
    Validator::new(move |value| match value.mapped() {
        Value::Int(i) if factor == 0 => *i == 0,
        Value::Int(i) => i.checked_rem(factor).unwrap_or(0) == 0,
        _ => false,
    })
}

pub fn is_even() -> Validator {
    multiple_of(2)
}

pub fn is_odd() -> Validator {
    Validator::new(|value| matches!(value.mapped(), Value::Int(i) if i % 2 != 0))
}

/// The value equals one of `choices`.
pub fn is_one_of<I, V>(choices: I) -> Validator
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let choices: Vec<Value> = choices.into_iter().map(Into::into).collect();
    Validator::new(move |value| {
        choices.contains(value) || choices.contains(value.mapped())
    })
}

/// Every element of a list value is one of `choices`.
pub fn is_subset_of<I, V>(choices: I) -> Validator
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let choices: Vec<Value> = choices.into_iter().map(Into::into).collect();
    Validator::new(move |value| match value.as_list() {
        Some(items) => items
            .iter()
            .all(|item| choices.contains(item) || choices.contains(item.mapped())),
        None => false,
    })
}

fn text_check<F>(check: F) -> Validator
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    Validator::new(move |value| text_of(value).is_some_and(|text| check(&text)))
}

pub fn has_substring(needle: impl Into<String>) -> Validator {
    let needle = needle.into();
    text_check(move |text| text.contains(needle.as_str()))
}

pub fn has_substring_igncase(needle: impl Into<String>) -> Validator {
    let needle = needle.into().to_lowercase();
    text_check(move |text| text.to_lowercase().contains(needle.as_str()))
}

pub fn startswith(prefix: impl Into<String>) -> Validator {
    let prefix = prefix.into();
    text_check(move |text| text.starts_with(prefix.as_str()))
}

pub fn startswith_igncase(prefix: impl Into<String>) -> Validator {
    let prefix = prefix.into().to_lowercase();
    text_check(move |text| text.to_lowercase().starts_with(prefix.as_str()))
}

pub fn endswith(suffix: impl Into<String>) -> Validator {
    let suffix = suffix.into();
    text_check(move |text| text.ends_with(suffix.as_str()))
}

pub fn endswith_igncase(suffix: impl Into<String>) -> Validator {
    let suffix = suffix.into().to_lowercase();
    text_check(move |text| text.to_lowercase().ends_with(suffix.as_str()))
}

/// Non-empty text or list
pub fn non_empty() -> Validator {
    Validator::new(|value| match value {
        Value::Str(s) => !s.is_empty(),
        Value::List(items) => !items.is_empty(),
        _ => true,
    })
}

/// Every element of a list value passes `validator`.
pub fn all_validate_to(validator: Validator) -> Validator {
    Validator::new(move |value| match value.as_list() {
        Some(items) => items.iter().all(|item| validator.check(item)),
        None => false,
    })
}
