use crate::option::list::split_list;
use crate::option::{ColorOption, IntegerOption, ListOption, OptionKind, TextOption};
use crate::value::{Rgb, Value};

fn ints(values: &[i64]) -> Value {
    Value::List(values.iter().copied().map(Value::Int).collect())
}

#[test]
fn test_strict_list_fails_on_bad_element() {
    let list = ListOption::of(IntegerOption::new());
    assert!(list.is_strict());
    assert!(list.parse(&Value::from("[1, abc, 3]")).is_err());
}

#[test]
fn test_lenient_list_skips_bad_elements() {
    let list = ListOption::of(IntegerOption::new()).lenient();
    assert_eq!(list.parse(&Value::from("[1, abc, 3]")).unwrap(), ints(&[1, 3]));
}

#[test]
fn test_native_and_empty_lists() {
    let list = ListOption::of(IntegerOption::new());
    assert_eq!(list.parse(&Value::from(vec![4, 5])).unwrap(), ints(&[4, 5]));
    assert_eq!(list.parse(&Value::from("[]")).unwrap(), ints(&[]));
    assert_eq!(list.parse(&Value::from("  [ ]  ")).unwrap(), ints(&[]));
    assert!(list.parse(&Value::from("1, 2")).is_err());
    assert!(list.parse(&Value::Int(1)).is_err());
}

#[test]
fn test_represent_delegates_to_element() {
    let list = ListOption::of(IntegerOption::hexadecimal());
    let repr = list.represent(&ints(&[255, 16])).unwrap();
    assert_eq!(repr.to_string(), "[0xff, 0x10]");
    assert_eq!(list.parse(&Value::Str(repr.to_string())).unwrap(), ints(&[255, 16]));
}

#[test]
fn test_nested_lists() {
    let nested = ListOption::of(ListOption::of(IntegerOption::new()));
    let parsed = nested.parse(&Value::from("[[1, 2], [], [3]]")).unwrap();
    assert_eq!(
        parsed,
        Value::List(vec![ints(&[1, 2]), ints(&[]), ints(&[3])])
    );
    let repr = nested.represent(&parsed).unwrap();
    assert_eq!(repr.to_string(), "[[1, 2], [], [3]]");
}

#[test]
fn test_quoted_strings_survive_round_trip() {
    let list = ListOption::of(TextOption::string());
    let value = Value::from(vec!["plain", "with, comma", "say \"hi\""]);
    let text = Value::Str(list.represent(&value).unwrap().to_string());
    assert_eq!(list.parse(&text).unwrap(), value);
    assert_eq!(
        list.parse(&Value::from("['a', \"b\"]")).unwrap(),
        Value::from(vec!["a", "b"])
    );
}

#[test]
fn test_list_of_colors_from_triples() {
    let list = ListOption::of(ColorOption::new());
    let parsed = list
        .parse(&Value::List(vec![Value::from(vec![0, 0, 255]), Value::from("#00FF00")]))
        .unwrap();
    assert_eq!(
        parsed,
        Value::List(vec![
            Value::Color(Rgb::new(0, 0, 255)),
            Value::Color(Rgb::new(0, 255, 0))
        ])
    );
}

#[test]
fn test_split_list_errors() {
    assert!(split_list("[1, (2, 3]").is_err());
    assert!(split_list("[\"open]").is_err());
    assert!(split_list("[1, 2)]").is_err());
    assert_eq!(split_list("[(1, 2), 3]").unwrap(), vec!["(1, 2)", "3"]);
}
