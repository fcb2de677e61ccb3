use std::sync::Arc;

use crate::manager::Manager;
use crate::option::validation::in_range;
use crate::option::{BooleanOption, ConfigOption, FloatOption, IntegerOption, ListOption, TextOption};
use crate::report::CollectingSink;

fn person_spec() -> Vec<ConfigOption> {
    vec![
        ConfigOption::builder("name", TextOption::string(), "Ann")
            .build()
            .unwrap(),
        ConfigOption::builder("age", IntegerOption::new(), 18)
            .validator(in_range(0, 110))
            .comment("Age in years")
            .build()
            .unwrap(),
        ConfigOption::builder("langs", ListOption::of(TextOption::string()), vec!["en"])
            .build()
            .unwrap(),
        ConfigOption::builder("height", FloatOption::new(), 1.75)
            .category("body")
            .build()
            .unwrap(),
        ConfigOption::builder("flag", BooleanOption::new(), true)
            .category("body")
            .build()
            .unwrap(),
    ]
}

/// Manager without files reporting to its own collecting sink
fn manager(safe: bool) -> (Manager, Arc<CollectingSink>) {
    let sink = Arc::new(CollectingSink::new());
    let manager = Manager::builder(person_spec())
        .autoload(false)
        .safe(safe)
        .error_sink(sink.clone())
        .build()
        .unwrap();
    (manager, sink)
}

// Format test modules
#[cfg(test)]
mod dict_tests;
#[cfg(all(test, feature = "toml-config"))]
mod toml_tests;
