use chrono::{NaiveDate, NaiveTime};
use tempfile::tempdir;

use crate::option::error::OptionError;
use crate::option::{
    BooleanOption, ClassEntry, ColorOption, FloatOption, IntegerOption, MapOption, MapTable,
    OptionKind, PathChecker, PathOption, TemporalOption, TextOption,
};
use crate::value::{Rgb, Value};

fn s(text: &str) -> Value {
    Value::from(text)
}

fn round_trips(kind: &dyn OptionKind, value: Value) {
    let repr = kind.represent(&value).unwrap();
    assert_eq!(kind.parse(&repr).unwrap(), value, "via {:?}", repr);
    // Text form, as read back from an INI file
    let text = Value::Str(repr.to_string());
    assert_eq!(kind.parse(&text).unwrap(), value, "via text {:?}", text);
}

#[test]
fn test_text_kinds() {
    let line = TextOption::line();
    assert_eq!(line.parse(&s("first\nsecond")).unwrap(), s("first"));
    assert_eq!(line.type_name(), "line");

    let text = TextOption::text();
    assert_eq!(text.parse(&s("a\nb")).unwrap(), s("a\nb"));
    assert_eq!(text.parse(&Value::Int(3)).unwrap(), s("3"));
    round_trips(&TextOption::string(), s("hello world"));
}

#[test]
fn test_integer_auto_radix() {
    let int = IntegerOption::new();
    assert_eq!(int.parse(&s("42")).unwrap(), Value::Int(42));
    assert_eq!(int.parse(&s(" -7 ")).unwrap(), Value::Int(-7));
    assert_eq!(int.parse(&s("0x1F")).unwrap(), Value::Int(31));
    assert_eq!(int.parse(&s("0o17")).unwrap(), Value::Int(15));
    assert_eq!(int.parse(&s("0b101")).unwrap(), Value::Int(5));
    assert_eq!(int.parse(&s("0")).unwrap(), Value::Int(0));
    assert_eq!(int.parse(&Value::Int(9)).unwrap(), Value::Int(9));
    assert!(int.parse(&s("007")).is_err());
    assert!(int.parse(&s("abc")).is_err());
    assert!(int.parse(&s("")).is_err());
    assert!(int.parse(&Value::Float(6.0)).is_err());
    assert!(int.parse(&s("99999999999999999999")).is_err());
    round_trips(&int, Value::Int(42));
}

#[test]
fn test_integer_presets() {
    let octal = IntegerOption::octal();
    assert_eq!(octal.represent(&Value::Int(8)).unwrap(), s("010"));
    assert_eq!(octal.parse(&s("010")).unwrap(), Value::Int(8));
    assert_eq!(octal.parse(&s("0o10")).unwrap(), Value::Int(8));
    assert_eq!(octal.parse(&s("0")).unwrap(), Value::Int(0));
    round_trips(&octal, Value::Int(-8));

    let hex = IntegerOption::hexadecimal();
    assert_eq!(hex.represent(&Value::Int(255)).unwrap(), s("0xff"));
    assert_eq!(hex.parse(&s("ff")).unwrap(), Value::Int(255));
    round_trips(&hex, Value::Int(4096));

    let decimal = IntegerOption::decimal();
    assert_eq!(decimal.parse(&s("007")).unwrap(), Value::Int(7));
}

#[test]
fn test_integer_radix_and_format() {
    let base36 = IntegerOption::new().with_radix(36);
    assert_eq!(base36.parse(&s("z")).unwrap(), Value::Int(35));
    assert_eq!(base36.represent(&Value::Int(35)).unwrap(), s("z"));

    let invalid = IntegerOption::new().with_radix(40);
    assert!(matches!(
        invalid.parse(&s("1")),
        Err(OptionError::Parse { .. })
    ));

    let padded = IntegerOption::new().with_format("{:04d} units").unwrap();
    assert_eq!(padded.represent(&Value::Int(7)).unwrap(), s("0007 units"));
    round_trips(&padded, Value::Int(7));

    assert!(IntegerOption::new().with_format("{:.2f}").is_err());
}

#[test]
fn test_integer_formats_read_back() {
    let bare_hex = IntegerOption::new().with_format("{:x}").unwrap();
    assert_eq!(bare_hex.represent(&Value::Int(255)).unwrap(), s("ff"));
    assert_eq!(bare_hex.parse(&s("ff")).unwrap(), Value::Int(255));
    assert_eq!(
        bare_hex.parse(&s("-8000000000000000")).unwrap(),
        Value::Int(i64::MIN)
    );

    let kinds = vec![
        IntegerOption::new(),
        IntegerOption::decimal(),
        IntegerOption::octal(),
        IntegerOption::hexadecimal(),
        bare_hex,
        IntegerOption::new().with_format("{:X}").unwrap(),
        IntegerOption::new().with_format("{:o}").unwrap(),
        IntegerOption::new().with_format("{:b}").unwrap(),
        IntegerOption::new().with_format("{:03x}").unwrap(),
        IntegerOption::new().with_format("{:08x}").unwrap(),
        IntegerOption::new().with_format("0x{:x}").unwrap(),
        IntegerOption::new().with_format("{:04d} units").unwrap(),
        IntegerOption::new().with_radix(16).with_format("{:08x}").unwrap(),
    ];
    for kind in &kinds {
        for value in [0, 1, 0xb1, 0xb12, -255, i64::MAX, i64::MIN] {
            round_trips(kind, Value::Int(value));
        }
    }
}

#[test]
fn test_boolean_tokens() {
    let boolean = BooleanOption::new();
    for token in ["true", " YES ", "1", "On"] {
        assert_eq!(boolean.parse(&s(token)).unwrap(), Value::Bool(true));
    }
    for token in ["false", "No", "0", "OFF"] {
        assert_eq!(boolean.parse(&s(token)).unwrap(), Value::Bool(false));
    }
    assert_eq!(boolean.parse(&Value::Bool(true)).unwrap(), Value::Bool(true));
    assert!(boolean.parse(&s("maybe")).is_err());
    round_trips(&boolean, Value::Bool(false));
}

#[test]
fn test_float_parse_and_format() {
    let float = FloatOption::new();
    assert_eq!(float.parse(&Value::Float(3.14)).unwrap(), Value::Float(3.14));
    assert_eq!(float.parse(&s("2.5")).unwrap(), Value::Float(2.5));
    assert_eq!(float.parse(&Value::Int(2)).unwrap(), Value::Float(2.0));
    assert!(float.parse(&s("two")).is_err());
    round_trips(&float, Value::Float(100.0));

    let fixed = FloatOption::new().with_format("{:.2f} m").unwrap();
    assert_eq!(fixed.parse(&Value::Float(1.756)).unwrap(), Value::Float(1.76));
    assert_eq!(fixed.represent(&Value::Float(1.76)).unwrap(), s("1.76 m"));
    assert_eq!(fixed.parse(&s("1.76 m")).unwrap(), Value::Float(1.76));
    round_trips(&fixed, Value::Float(1.76));

    assert!(FloatOption::new().with_format("{:x}").is_err());
}

#[test]
fn test_temporal_kinds() {
    let date = TemporalOption::date();
    let day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    assert_eq!(date.parse(&s("2024-02-29")).unwrap(), Value::Date(day));
    assert_eq!(date.represent(&Value::Date(day)).unwrap(), s("2024-02-29"));
    assert!(date.parse(&s("2023-02-29")).is_err());
    round_trips(&date, Value::Date(day));

    let time = TemporalOption::time().with_format("%H:%M").unwrap();
    let noon = NaiveTime::from_hms_opt(12, 30, 0).unwrap();
    assert_eq!(time.parse(&s("12:30")).unwrap(), Value::Time(noon));
    let with_seconds = NaiveTime::from_hms_opt(12, 30, 59).unwrap();
    assert_eq!(time.parse(&Value::Time(with_seconds)).unwrap(), Value::Time(noon));

    let datetime = TemporalOption::datetime();
    let stamp = day.and_hms_opt(8, 0, 5).unwrap();
    assert_eq!(
        datetime.parse(&s("2024-02-29T08:00:05")).unwrap(),
        Value::DateTime(stamp)
    );
    assert!(datetime.parse(&Value::Date(day)).is_err());
    round_trips(&datetime, Value::DateTime(stamp));

    assert!(TemporalOption::date().with_format("%Q").is_err());
}

#[test]
fn test_map_lookup_and_consistency() {
    let table: MapTable = [("one", 1), ("two", 2)].into_iter().collect();
    let map = MapOption::map(table.clone());

    let parsed = map.parse(&s("two")).unwrap();
    assert_eq!(parsed.mapped(), &Value::Int(2));
    assert_eq!(parsed.label(), Some("two"));
    assert_eq!(map.parse(&Value::Int(1)).unwrap().label(), Some("one"));
    assert!(map.parse(&s("three")).is_err());
    round_trips(&map, parsed.clone());

    table.insert("two", 22);
    assert!(matches!(
        map.represent(&parsed),
        Err(OptionError::Consistency { .. })
    ));
    table.remove("one");
    assert!(map.parse(&s("one")).is_err());
}

struct Coffee;
struct Tea;

#[test]
fn test_class_entries() {
    let entry = ClassEntry::of::<Coffee>();
    assert_eq!(entry.name(), "Coffee");
    assert!(entry.path().ends_with("::Coffee"));

    let classes = MapOption::classes([ClassEntry::of::<Coffee>(), ClassEntry::of::<Tea>()]);
    assert_eq!(classes.type_name(), "class");
    let tea = classes.parse(&s("Tea")).unwrap();
    assert_eq!(classes.represent(&tea).unwrap(), s("Tea"));
    assert!(classes.parse(&s("Juice")).is_err());
}

#[test]
fn test_path_checkers() {
    let dir = tempdir().expect("Failed to create temp directory");
    let file = dir.path().join("settings.ini");
    std::fs::write(&file, "").unwrap();

    let file_kind = PathOption::file();
    assert_eq!(
        file_kind.parse(&Value::Path(file.clone())).unwrap(),
        Value::Path(file.clone())
    );
    assert!(file_kind.parse(&Value::Path(dir.path().to_path_buf())).is_err());

    let dir_kind = PathOption::dir();
    assert!(dir_kind.parse(&Value::Path(dir.path().to_path_buf())).is_ok());
    assert!(dir_kind.parse(&Value::Path(file.clone())).is_err());

    let missing = dir.path().join("missing.ini");
    assert!(PathOption::path().parse(&Value::Path(missing.clone())).is_err());
    assert!(PathOption::unchecked().parse(&Value::Path(missing.clone())).is_ok());

    let custom = PathOption::unchecked()
        .with_checker(PathChecker::custom(|p| p.extension().is_some_and(|e| e == "ini")));
    assert!(custom.parse(&Value::Path(missing)).is_ok());
    assert!(custom.parse(&s("/tmp/readme.txt")).is_err());

    let relative = PathOption::unchecked().parse(&s("some/../file.ini")).unwrap();
    match relative {
        Value::Path(p) => assert!(p.is_absolute() && p.ends_with("file.ini")),
        other => panic!("unexpected value {:?}", other),
    }
    round_trips(&PathOption::file(), Value::Path(file));
}

#[test]
fn test_color_parse_and_represent() {
    let color = ColorOption::new();
    let red = Value::Color(Rgb::new(255, 0, 0));
    assert_eq!(color.represent(&red).unwrap(), s("#FF0000"));
    assert_eq!(color.parse(&s("#FF0000")).unwrap(), red);
    assert_eq!(color.parse(&s("ff0000")).unwrap(), red);
    assert_eq!(color.parse(&Value::from(vec![255, 0, 0])).unwrap(), red);
    assert!(color.parse(&s("#FFF")).is_err());
    assert!(color.parse(&s("#GG0000")).is_err());
    assert!(color.parse(&Value::from(vec![256, 0, 0])).is_err());
    round_trips(&color, Value::Color(Rgb::new(18, 52, 86)));
}
