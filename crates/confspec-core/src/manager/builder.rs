use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::Arc;

use crate::constants::DEFAULT_FORMAT;
use crate::error::{Error, Result};
use crate::format::{provider, supported_formats};
use crate::option::ConfigOption;
use crate::report::ErrorSink;
use crate::storage::{LocalStorage, StorageProvider};
use crate::utils::expand_path;

use super::config_manager::Manager;

/// Builder for [`Manager`].
///
/// Defaults: format `ini`, create, autoload, writeback and safe mode on,
/// notification off, local filesystem storage, process-wide error sink.
#[derive(Debug)]
pub struct ManagerBuilder {
    options: Vec<ConfigOption>,
    files: Vec<PathBuf>,
    format: String,
    create: bool,
    autoload: bool,
    notify: bool,
    writeback: bool,
    safe: bool,
    storage: Arc<dyn StorageProvider>,
    sink: Option<Arc<dyn ErrorSink>>,
}

impl ManagerBuilder {
    pub(crate) fn new(options: Vec<ConfigOption>) -> Self {
        Self {
            options,
            files: Vec::new(),
            format: DEFAULT_FORMAT.to_string(),
            create: true,
            autoload: true,
            notify: false,
            writeback: true,
            safe: true,
            storage: Arc::new(LocalStorage::new()),
            sink: None,
        }
    }

    /// Append a file to the stack. Files are read in order; the last one is
    /// the writeback target.
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    pub fn files<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Write missing files from the current defaults while loading.
    pub fn create(mut self, create: bool) -> Self {
        self.create = create;
        self
    }

    /// Load the file stack as part of [`build`](Self::build).
    pub fn autoload(mut self, autoload: bool) -> Self {
        self.autoload = autoload;
        self
    }

    pub fn notify(mut self, notify: bool) -> Self {
        self.notify = notify;
        self
    }

    pub fn writeback(mut self, writeback: bool) -> Self {
        self.writeback = writeback;
        self
    }

    pub fn safe(mut self, safe: bool) -> Self {
        self.safe = safe;
        self
    }

    pub fn storage(mut self, storage: impl StorageProvider + 'static) -> Self {
        self.storage = Arc::new(storage);
        self
    }

    pub fn error_sink(mut self, sink: Arc<dyn ErrorSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Validate the specification and build the manager.
    ///
    /// Specification faults are always returned. Faults while autoloading
    /// follow safe mode like any later [`Manager::load`].
    pub fn build(self) -> Result<Manager> {
        if self.options.is_empty() {
            return Err(Error::EmptySpec);
        }

        let format = provider(&self.format).ok_or_else(|| Error::UnknownFormat {
            name: self.format.clone(),
            supported: supported_formats().iter().map(|s| s.to_string()).collect(),
        })?;

        let mut options = BTreeMap::new();
        let mut categories: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for option in self.options {
            let key = option.key().to_string();
            if options.contains_key(&key) {
                return Err(Error::DuplicateKey { key });
            }
            categories
                .entry(option.category().to_string())
                .or_default()
                .push(key.clone());
            options.insert(key, option);
        }
        for keys in categories.values_mut() {
            keys.sort();
        }

        let files = self
            .files
            .iter()
            .map(expand_path)
            .collect::<Result<Vec<_>>>()?;

        let mut manager = Manager {
            options,
            categories,
            files,
            format,
            create: self.create,
            notify: self.notify,
            writeback: self.writeback,
            safe: self.safe,
            listeners: HashMap::new(),
            storage: self.storage,
            sink: self.sink,
        };

        log::debug!(
            "Configuration manager built with {} options, format '{}'",
            manager.options.len(),
            manager.format.name()
        );

        if self.autoload {
            manager.load()?;
        }
        Ok(manager)
    }
}
