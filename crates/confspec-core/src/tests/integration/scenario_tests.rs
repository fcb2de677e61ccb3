#![cfg(test)]

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::manager::listener;
use crate::value::Value;

use super::common::{Fixture, user_file};

#[test]
fn test_last_file_overrides_and_receives_writes() {
    let local = PathBuf::from("/home/john/.config/person.local.ini");
    let fixture = Fixture::with_file(&local, "[general]\nage = 40\n[identity]\nname = Sys Admin\n");
    let mut manager = fixture.builder().files([local.clone()]).build().unwrap();
    assert_eq!(manager.files().last(), Some(&local));
    assert_eq!(manager.get_as::<i64>("age").unwrap(), 40);
    assert_eq!(manager.get_as::<String>("name").unwrap(), "Sys Admin");

    manager.set("age", 41).unwrap();
    assert!(fixture.contents(&local).contains("age = 41"));
    assert!(fixture.contents(&user_file()).contains("age = 18"));
}

#[test]
fn test_corrupt_file_in_safe_mode() {
    let fixture = Fixture::with_file(
        user_file(),
        "[general]\nage = 300\n!!!\n[identity]\nname = Kim\nshoe = 44\n",
    );
    let manager = fixture.builder().build().unwrap();

    // Validation, syntax and unknown key reports
    assert_eq!(fixture.sink.len(), 3, "{:?}", fixture.sink.reports());
    assert_eq!(manager.get_as::<i64>("age").unwrap(), 18);
    assert_eq!(manager.get_as::<String>("name").unwrap(), "Kim");
}

#[test]
fn test_corrupt_file_without_safe_mode() {
    let fixture = Fixture::with_file(user_file(), "[general]\n!!!\n");
    assert!(fixture.builder().safe(false).build().is_err());
}

#[test]
fn test_export_in_every_format_reimports() {
    let fixture = Fixture::new();
    let mut source = fixture.builder().build().unwrap();
    source.set("name", "Ada Lovelace").unwrap();
    source.set("langs", vec!["fr", "nl"]).unwrap();
    source.set("height", 1.65).unwrap();

    for format in source.supported_formats() {
        let text = source.do_export(Some(format)).unwrap();
        let target_fixture = Fixture::new();
        let mut target = target_fixture
            .builder()
            .autoload(false)
            .safe(false)
            .build()
            .unwrap();
        target.do_import(&text, Some(format)).unwrap();

        assert!(target_fixture.sink.is_empty(), "{}", format);
        assert_eq!(target.get_as::<String>("name").unwrap(), "Ada Lovelace", "{}", format);
        assert_eq!(
            target.get_as::<Vec<String>>("langs").unwrap(),
            vec!["fr".to_string(), "nl".to_string()],
            "{}",
            format
        );
        assert_eq!(target.get_as::<f64>("height").unwrap(), 1.65, "{}", format);
        assert_eq!(target.get("eyes").unwrap(), source.get("eyes").unwrap(), "{}", format);
    }
}

#[test]
fn test_listener_sees_imported_changes() {
    let fixture = Fixture::new();
    let mut manager = fixture.builder().notify(true).build().unwrap();
    let seen: Arc<Mutex<Vec<Value>>> = Arc::default();
    let record = seen.clone();
    manager.register_listener(
        listener(move |_: &str, _: &Value, new: &Value| {
            record.lock().push(new.clone());
            Ok(())
        }),
        "age",
    );

    manager.do_import("[general]\nage = 33\n", None).unwrap();
    manager.do_import("[general]\nage = 33\n", None).unwrap();
    assert_eq!(*seen.lock(), vec![Value::Int(33)]);
}
