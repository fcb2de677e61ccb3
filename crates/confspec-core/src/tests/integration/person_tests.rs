#![cfg(test)]

use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::manager::Manager;
use crate::option::validation::in_range;
use crate::option::{ConfigOption, IntegerOption};
use crate::storage::MemoryStorage;
use crate::value::{Rgb, Value};

use super::common::{Fixture, user_file};

fn age_only(storage: &MemoryStorage, path: &Path) -> Manager {
    let age = ConfigOption::builder("age", IntegerOption::new(), 18)
        .validator(in_range(0, 110))
        .build()
        .unwrap();
    Manager::builder([age])
        .file(path)
        .storage(storage.clone())
        .safe(false)
        .build()
        .unwrap()
}

#[test]
fn test_missing_file_is_created_from_defaults() {
    let storage = MemoryStorage::new();
    let path = PathBuf::from("/home/john/.age.ini");
    age_only(&storage, &path);
    assert_eq!(storage.contents(&path).as_deref(), Some("[general]\nage = 18\n"));
}

#[test]
fn test_value_from_file_then_rejected_update() {
    let path = PathBuf::from("/home/john/.age.ini");
    let storage = MemoryStorage::new().with_file(&path, "[general]\nage = 42\n");
    let mut manager = age_only(&storage, &path);
    assert_eq!(manager.get("age").unwrap(), &Value::Int(42));

    let err = manager.set("age", 200).unwrap_err();
    assert!(matches!(err, Error::Option(_)));
    assert!(err.is_value_error());
    assert_eq!(manager.get("age").unwrap(), &Value::Int(42));
    assert_eq!(storage.write_count(), 0);
}

#[test]
fn test_full_spec_layout() {
    let fixture = Fixture::new();
    fixture.builder().build().unwrap();
    assert_eq!(
        fixture.contents(&user_file()),
        "[body]\neyes = #3366CC\nheight = 1.8\n\n[general]\nage = 18\n\n[identity]\nlangs = [en]\n; Full name\nname = John Doe\nscores = []\n"
    );
    assert!(fixture.sink.is_empty());
}

#[test]
fn test_color_round_trip() {
    let fixture = Fixture::with_file(user_file(), "[body]\neyes = #ff8000\n");
    let mut manager = fixture.builder().build().unwrap();
    assert_eq!(manager.get_as::<Rgb>("eyes").unwrap(), Rgb::new(255, 128, 0));

    manager.set("eyes", vec![0, 16, 255]).unwrap();
    assert!(fixture.contents(&user_file()).contains("eyes = #0010FF"));
}

#[test]
fn test_strict_list_rejects_bad_element() {
    let fixture = Fixture::new();
    let mut manager = fixture.builder().safe(false).build().unwrap();
    assert!(manager.set("langs", "[en, fr]").unwrap());
    // Not a subset of the known languages
    assert!(manager.set("langs", "[en, xx]").unwrap_err().is_value_error());
    assert_eq!(
        manager.get_as::<Vec<String>>("langs").unwrap(),
        vec!["en".to_string(), "fr".to_string()]
    );
}

#[test]
fn test_lenient_list_drops_bad_elements() {
    let fixture = Fixture::with_file(user_file(), "[identity]\nscores = [1, x, 3]\n");
    let manager = fixture.builder().build().unwrap();
    assert!(fixture.sink.is_empty());
    assert_eq!(manager.get_as::<Vec<i64>>("scores").unwrap(), vec![1, 3]);
}

#[test]
fn test_multiline_name_keeps_first_line() {
    let fixture = Fixture::new();
    let mut manager = fixture.builder().build().unwrap();
    manager.set("name", "Jane Roe\nsecond line").unwrap();
    assert_eq!(manager.get_as::<String>("name").unwrap(), "Jane Roe");
}
