use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::format::{FormatProvider, provider, supported_formats};
use crate::option::ConfigOption;
use crate::report::{ErrorSink, Report, default_sink};
use crate::storage::{StorageProvider, StorageSystemError};
use crate::value::{FromValue, Value};

use super::builder::ManagerBuilder;
use super::listener::Listener;

/// Owner of a configuration specification and its file stack
pub struct Manager {
    pub(super) options: BTreeMap<String, ConfigOption>,
    pub(super) categories: BTreeMap<String, Vec<String>>,
    pub(super) files: Vec<PathBuf>,
    pub(super) format: &'static dyn FormatProvider,
    pub(super) create: bool,
    pub(super) notify: bool,
    pub(super) writeback: bool,
    pub(super) safe: bool,
    pub(super) listeners: HashMap<String, Vec<Listener>>,
    pub(super) storage: Arc<dyn StorageProvider>,
    pub(super) sink: Option<Arc<dyn ErrorSink>>,
}

impl Manager {
    /// Start building a manager over `options`.
    pub fn builder(options: impl IntoIterator<Item = ConfigOption>) -> ManagerBuilder {
        ManagerBuilder::new(options.into_iter().collect())
    }

    // --- Flags ---

    pub fn enable_notify(&mut self, enable: bool) {
        self.notify = enable;
    }

    pub fn enable_writeback(&mut self, enable: bool) {
        self.writeback = enable;
    }

    pub fn enable_safe(&mut self, enable: bool) {
        self.safe = enable;
    }

    pub fn is_notify(&self) -> bool {
        self.notify
    }

    pub fn is_writeback(&self) -> bool {
        self.writeback
    }

    pub fn is_safe(&self) -> bool {
        self.safe
    }

    pub fn is_create(&self) -> bool {
        self.create
    }

    // --- Views ---

    /// All options, sorted by key
    pub fn options(&self) -> impl Iterator<Item = &ConfigOption> {
        self.options.values()
    }

    pub fn option(&self, key: &str) -> Option<&ConfigOption> {
        self.options.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    /// Category names, sorted
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Options of one category, sorted by key
    pub fn category(&self, category: &str) -> Option<Vec<&ConfigOption>> {
        self.categories
            .get(category)
            .map(|keys| keys.iter().filter_map(|key| self.options.get(key)).collect())
    }

    /// Every category with its options, both sorted
    pub fn categories(&self) -> Vec<(&str, Vec<&ConfigOption>)> {
        self.categories
            .iter()
            .map(|(name, keys)| {
                let options = keys.iter().filter_map(|key| self.options.get(key)).collect();
                (name.as_str(), options)
            })
            .collect()
    }

    /// Absolute paths of the file stack, lowest priority first
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Name of the default format
    pub fn format(&self) -> &'static str {
        self.format.name()
    }

    pub fn supported_formats(&self) -> Vec<&'static str> {
        supported_formats()
    }

    // --- Values ---

    /// Current value of `key`
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.options
            .get(key)
            .map(ConfigOption::value)
            .ok_or_else(|| Error::UnknownKey(key.to_string()))
    }

    /// Current value of `key` converted to a Rust type. Mapped values are
    /// converted from their table entry when the label itself does not fit.
    pub fn get_as<T: FromValue>(&self, key: &str) -> Result<T> {
        let value = self.get(key)?;
        T::from_value(value)
            .or_else(|| T::from_value(value.mapped()))
            .ok_or_else(|| Error::TypeMismatch {
                key: key.to_string(),
                expected: T::EXPECTED,
                found: value.mapped().type_name(),
            })
    }

    /// Parse, validate and commit a new value for `key`.
    ///
    /// Returns `Ok(false)` without side effects when the parsed value equals
    /// the current one. Parse and validation failures are always returned;
    /// writeback and listener failures follow safe mode.
    pub fn set(&mut self, key: &str, raw: impl Into<Value>) -> Result<bool> {
        let option = self
            .options
            .get_mut(key)
            .ok_or_else(|| Error::UnknownKey(key.to_string()))?;
        let old = match option.assign(&raw.into())? {
            Some(old) => old,
            None => return Ok(false),
        };
        let new = option.value().clone();
        log::debug!("Option '{}' changed from <{}> to <{}>", key, old, new);

        if self.writeback {
            self.save()?;
        }
        if self.notify {
            self.dispatch(key, &old, &new)?;
        }
        Ok(true)
    }

    fn dispatch(&self, key: &str, old: &Value, new: &Value) -> Result<()> {
        let Some(listeners) = self.listeners.get(key) else {
            return Ok(());
        };
        for listener in listeners {
            let outcome = listener(key, old, new).map_err(|source| Error::Listener {
                key: key.to_string(),
                source,
            });
            self.contain(outcome)?;
        }
        Ok(())
    }

    // --- Listeners ---

    /// Register `listener` for `key`. Returns `false` when the key is
    /// unknown or the listener is already registered for it.
    pub fn register_listener(&mut self, listener: Listener, key: &str) -> bool {
        if !self.options.contains_key(key) {
            return false;
        }
        let listeners = self.listeners.entry(key.to_string()).or_default();
        if listeners.iter().any(|l| Arc::ptr_eq(l, &listener)) {
            return false;
        }
        listeners.push(listener);
        true
    }

    /// Remove `listener` from `key`. Returns `false` when it was not
    /// registered.
    pub fn unregister_listener(&mut self, listener: &Listener, key: &str) -> bool {
        let Some(listeners) = self.listeners.get_mut(key) else {
            return false;
        };
        match listeners.iter().position(|l| Arc::ptr_eq(l, listener)) {
            Some(index) => {
                listeners.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn listener_count(&self, key: &str) -> usize {
        self.listeners.get(key).map_or(0, Vec::len)
    }

    // --- Files ---

    /// Write the current state to the last file of the stack.
    pub fn save(&self) -> Result<()> {
        let Some(target) = self.files.last() else {
            return Ok(());
        };
        let outcome = self
            .do_export(None)
            .and_then(|text| self.storage.write_string(target, &text));
        if outcome.is_ok() {
            log::debug!("Saved configuration to {}", target.display());
        }
        self.contain(outcome).map(|_| ())
    }

    /// Import every file of the stack in order, creating missing ones when
    /// enabled. Each failing file is contained or returned per safe mode.
    pub fn load(&mut self) -> Result<()> {
        for path in self.files.clone() {
            let outcome = self.load_file(&path);
            self.contain(outcome)?;
        }
        Ok(())
    }

    fn load_file(&mut self, path: &Path) -> Result<()> {
        if self.storage.exists(path) {
            if !self.storage.is_file(path) {
                return Err(StorageSystemError::NotAFile(path.to_path_buf()).into());
            }
            log::debug!("Importing configuration from {}", path.display());
            let text = self.storage.read_to_string(path)?;
            return self.do_import(&text, None);
        }

        if !self.create {
            return Err(StorageSystemError::FileNotFound(path.to_path_buf()).into());
        }

        log::debug!("Creating configuration file {}", path.display());
        if let Some(parent) = path.parent() {
            self.storage.create_dir_all(parent)?;
        }
        let text = self.do_export(None)?;
        self.storage.write_string(path, &text)
    }

    // --- Formats ---

    fn provider_for(&self, format: Option<&str>) -> Result<&'static dyn FormatProvider> {
        match format {
            None => Ok(self.format),
            Some(name) => provider(name).ok_or_else(|| Error::UnknownFormat {
                name: name.to_string(),
                supported: supported_formats().iter().map(|s| s.to_string()).collect(),
            }),
        }
    }

    /// Apply a serialized configuration. Writeback is suspended for the
    /// duration of the import.
    pub fn do_import(&mut self, text: &str, format: Option<&str>) -> Result<()> {
        let provider = self.provider_for(format)?;
        let writeback = std::mem::replace(&mut self.writeback, false);
        let outcome = provider.do_import(self, text);
        self.writeback = writeback;
        outcome
    }

    /// Serialize the current state.
    pub fn do_export(&self, format: Option<&str>) -> Result<String> {
        self.provider_for(format)?.do_export(self)
    }

    // --- Fault containment ---

    fn sink(&self) -> Arc<dyn ErrorSink> {
        self.sink.clone().unwrap_or_else(default_sink)
    }

    /// In safe mode report a failure and carry on with `Ok(None)`;
    /// otherwise return it.
    pub fn contain<T>(&self, outcome: Result<T>) -> Result<Option<T>> {
        match outcome {
            Ok(value) => Ok(Some(value)),
            Err(err) if self.safe => {
                self.sink().report(Report::Fault(&err));
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Report a diagnostic message regardless of safe mode.
    pub fn notice(&self, message: &str) {
        self.sink().report(Report::Message(message));
    }

    // --- Diagnostics ---

    /// Human readable dump: one `key :: value` line per option, grouped
    /// under `[category]` headers.
    pub fn render(&self) -> String {
        let width = self.options.keys().map(String::len).max().unwrap_or(0);
        let mut lines = Vec::new();
        for (category, options) in self.categories() {
            lines.push(format!("[{}]", category));
            for option in options {
                lines.push(format!("{:<width$} :: {}", option.key(), option, width = width));
            }
        }
        lines.join("\n")
    }
}

impl fmt::Display for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("keys", &self.options.keys().collect::<Vec<_>>())
            .field("files", &self.files)
            .field("format", &self.format.name())
            .field("create", &self.create)
            .field("notify", &self.notify)
            .field("writeback", &self.writeback)
            .field("safe", &self.safe)
            .field("storage", &self.storage.name())
            .finish_non_exhaustive()
    }
}
