use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::manager::{Manager, ManagerBuilder};
use crate::option::validation::in_range;
use crate::option::{ConfigOption, IntegerOption, TextOption};
use crate::report::CollectingSink;
use crate::storage::MemoryStorage;

fn person_spec() -> Vec<ConfigOption> {
    vec![
        ConfigOption::builder("name", TextOption::string(), "Ann")
            .build()
            .unwrap(),
        ConfigOption::builder("age", IntegerOption::new(), 18)
            .validator(in_range(0, 110))
            .build()
            .unwrap(),
    ]
}

fn user_file() -> PathBuf {
    PathBuf::from("/home/ann/.person.ini")
}

/// Builder over in-memory storage with a collecting sink
fn builder(storage: &MemoryStorage, sink: &Arc<CollectingSink>) -> ManagerBuilder {
    Manager::builder(person_spec())
        .storage(storage.clone())
        .error_sink(sink.clone())
}

fn contents(storage: &MemoryStorage, path: &Path) -> String {
    storage.contents(path).unwrap_or_default()
}

// Manager test modules
#[cfg(test)]
mod accessor_tests;
