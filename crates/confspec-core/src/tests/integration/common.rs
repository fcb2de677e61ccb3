#![cfg(test)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::manager::{Manager, ManagerBuilder};
use crate::option::validation::{in_range, is_subset_of};
use crate::option::{ColorOption, ConfigOption, FloatOption, IntegerOption, ListOption, TextOption};
use crate::report::CollectingSink;
use crate::storage::MemoryStorage;

pub const LANGUAGES: [&str; 4] = ["en", "fr", "de", "nl"];

/// The person specification used across scenarios
pub fn person_spec() -> Vec<ConfigOption> {
    vec![
        ConfigOption::builder("age", IntegerOption::new(), 18)
            .validator(in_range(0, 110))
            .build()
            .unwrap(),
        ConfigOption::builder("name", TextOption::line(), "John Doe")
            .category("identity")
            .comment("Full name")
            .build()
            .unwrap(),
        ConfigOption::builder("height", FloatOption::new(), 1.8)
            .category("body")
            .build()
            .unwrap(),
        ConfigOption::builder("eyes", ColorOption::new(), "#3366CC")
            .category("body")
            .build()
            .unwrap(),
        ConfigOption::builder("langs", ListOption::of(TextOption::string()), vec!["en"])
            .validator(is_subset_of(LANGUAGES))
            .category("identity")
            .build()
            .unwrap(),
        ConfigOption::builder(
            "scores",
            ListOption::of(IntegerOption::new()).lenient(),
            Vec::<i64>::new(),
        )
        .category("identity")
        .build()
        .unwrap(),
    ]
}

pub fn user_file() -> PathBuf {
    PathBuf::from("/home/john/.config/person.ini")
}

pub struct Fixture {
    pub storage: MemoryStorage,
    pub sink: Arc<CollectingSink>,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            storage: MemoryStorage::new(),
            sink: Arc::new(CollectingSink::new()),
        }
    }

    pub fn with_file(path: impl Into<PathBuf>, text: &str) -> Self {
        let fixture = Self::new();
        Self {
            storage: fixture.storage.with_file(path, text),
            sink: fixture.sink,
        }
    }

    pub fn builder(&self) -> ManagerBuilder {
        Manager::builder(person_spec())
            .storage(self.storage.clone())
            .error_sink(self.sink.clone())
            .file(user_file())
    }

    pub fn contents(&self, path: &Path) -> String {
        self.storage.contents(path).unwrap_or_default()
    }
}
