use crate::error::Error;
use crate::manager::Manager;

use super::person_spec;

crate::config_accessors! {
    /// Typed view over the person specification
    struct Person {
        name: String,
        age: i64,
    }
}

#[test]
fn test_generated_getters_and_setters() {
    let mut manager = Manager::builder(person_spec()).autoload(false).build().unwrap();
    let mut person = Person::new(&mut manager);

    assert_eq!(person.name().unwrap(), "Ann");
    assert_eq!(person.age().unwrap(), 18);

    assert!(person.set_age(33).unwrap());
    assert!(!person.set_age("33").unwrap());
    assert!(person.set_name("Dee").unwrap());
    assert!(person.set_age(500).unwrap_err().is_value_error());

    assert_eq!(person.manager().get_as::<i64>("age").unwrap(), 33);
    assert_eq!(manager.get_as::<String>("name").unwrap(), "Dee");
}

#[test]
fn test_getter_type_mismatch() {
    crate::config_accessors! {
        struct Wrong {
            age: bool,
        }
    }

    let mut manager = Manager::builder(person_spec()).autoload(false).build().unwrap();
    let wrong = Wrong::new(&mut manager);
    assert!(matches!(wrong.age(), Err(Error::TypeMismatch { .. })));
}
