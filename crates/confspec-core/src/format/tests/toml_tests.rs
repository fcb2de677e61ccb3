use chrono::NaiveDate;

use crate::manager::Manager;
use crate::option::{ConfigOption, TemporalOption};

use super::manager;

#[test]
fn test_round_trip() {
    let (mut source, _) = manager(true);
    source.set("age", 64).unwrap();
    source.set("langs", vec!["sv", "fi"]).unwrap();
    let text = source.do_export(Some("toml")).unwrap();
    assert!(text.contains("[body]"));
    assert!(text.contains("[general]"));

    let (mut target, sink) = manager(false);
    target.do_import(&text, Some("toml")).unwrap();
    assert!(sink.is_empty());
    assert_eq!(target.get_as::<i64>("age").unwrap(), 64);
    assert_eq!(
        target.get_as::<Vec<String>>("langs").unwrap(),
        vec!["sv".to_string(), "fi".to_string()]
    );
    assert_eq!(target.get_as::<f64>("height").unwrap(), 1.75);
}

#[test]
fn test_native_dates_are_parsed_by_the_option() {
    let option = ConfigOption::builder("since", TemporalOption::date(), "2000-01-01")
        .build()
        .unwrap();
    let mut manager = Manager::builder([option]).autoload(false).build().unwrap();
    manager
        .do_import("[general]\nsince = 2024-02-29\n", Some("toml"))
        .unwrap();
    assert_eq!(
        manager.get_as::<NaiveDate>("since").unwrap(),
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    );
}

#[test]
fn test_decode_failure_is_contained() {
    let (mut manager, sink) = manager(true);
    manager.do_import("[general\nage = ", Some("toml")).unwrap();
    assert_eq!(sink.len(), 1);
    assert!(sink.reports()[0].contains("Deserialization from 'toml' failed"));
}
