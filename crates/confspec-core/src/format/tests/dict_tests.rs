use crate::error::Error;
use crate::format::error::FormatError;

use super::manager;

#[test]
fn test_export_writes_mapping_literal() {
    let (manager, _) = manager(true);
    assert_eq!(
        manager.do_export(Some("dict")).unwrap(),
        "{\n    'body': {\n        'flag': True,\n        'height': 1.75,\n    },\n    'general': {\n        'age': 18,\n        'langs': ['en'],\n        'name': 'Ann',\n    },\n}"
    );
}

#[test]
fn test_import_literal_with_comments_and_tuples() {
    let (mut manager, sink) = manager(true);
    let text = "{\n    # person\n    'general': {'age': 0x20, 'langs': ('it', 'es'), 'name': \"Zoë\"},\n    'body': {'flag': False,},\n}\n";
    manager.do_import(text, Some("dict")).unwrap();

    assert!(sink.is_empty(), "unexpected reports: {:?}", sink.reports());
    assert_eq!(manager.get_as::<i64>("age").unwrap(), 32);
    assert_eq!(manager.get_as::<String>("name").unwrap(), "Zoë");
    assert!(!manager.get_as::<bool>("flag").unwrap());
    assert_eq!(
        manager.get_as::<Vec<String>>("langs").unwrap(),
        vec!["it".to_string(), "es".to_string()]
    );
}

#[test]
fn test_round_trip() {
    let (mut source, _) = manager(true);
    source.set("name", "O'Hara").unwrap();
    source.set("height", 1.5).unwrap();
    let text = source.do_export(Some("dict")).unwrap();

    let (mut target, _) = manager(false);
    target.do_import(&text, Some("dict")).unwrap();
    assert_eq!(target.get_as::<String>("name").unwrap(), "O'Hara");
    assert_eq!(target.get_as::<f64>("height").unwrap(), 1.5);
}

#[test]
fn test_expressions_are_never_evaluated() {
    let (mut manager, _) = manager(false);
    let result = manager.do_import("{'general': {'age': __import__('os').getpid()}}", Some("dict"));
    assert!(matches!(
        result,
        Err(Error::Format(FormatError::Decode { format: "dict", .. }))
    ));
    assert_eq!(manager.get_as::<i64>("age").unwrap(), 18);
}

#[test]
fn test_none_is_a_structural_fault() {
    let (mut manager, sink) = manager(true);
    manager
        .do_import("{'general': {'age': None}}", Some("dict"))
        .unwrap();
    assert_eq!(sink.len(), 1);
    assert!(sink.reports()[0].contains("unsupported value: None"));
}

#[test]
fn test_deeply_nested_document_is_contained() {
    let depth = 100_000;
    let text = format!(
        "{{'general': {{'age': {}1{}}}}}",
        "[".repeat(depth),
        "]".repeat(depth)
    );

    let (mut safe, sink) = manager(true);
    safe.do_import(&text, Some("dict")).unwrap();
    assert_eq!(sink.len(), 1);
    assert!(sink.reports()[0].contains("nesting"), "{:?}", sink.reports());
    assert_eq!(safe.get_as::<i64>("age").unwrap(), 18);

    let (mut strict, _) = manager(false);
    assert!(matches!(
        strict.do_import(&text, Some("dict")),
        Err(Error::Format(FormatError::Decode { format: "dict", .. }))
    ));
}
