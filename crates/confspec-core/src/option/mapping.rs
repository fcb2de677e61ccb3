use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::option::OptionKind;
use crate::option::error::OptionError;
use crate::value::Value;

/// Shared lookup table from label to value.
///
/// Clones share the same table. Changes made after an option was built are
/// seen by that option, and a stored value that no longer matches its label
/// fails with a consistency error when it is written out.
#[derive(Debug, Clone, Default)]
pub struct MapTable(Arc<RwLock<BTreeMap<String, Value>>>);

impl MapTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, label: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.write().insert(label.into(), value.into())
    }

    pub fn remove(&self, label: &str) -> Option<Value> {
        self.0.write().remove(label)
    }

    pub fn get(&self, label: &str) -> Option<Value> {
        self.0.read().get(label).cloned()
    }

    /// Label whose value equals `value`
    pub fn label_of(&self, value: &Value) -> Option<String> {
        self.0
            .read()
            .iter()
            .find(|(_, candidate)| *candidate == value)
            .map(|(label, _)| label.clone())
    }

    pub fn labels(&self) -> Vec<String> {
        self.0.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for MapTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let table = iter
            .into_iter()
            .map(|(label, value)| (label.into(), value.into()))
            .collect();
        Self(Arc::new(RwLock::new(table)))
    }
}

/// A Rust type registered with a class option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassEntry {
    name: String,
    path: &'static str,
}

impl ClassEntry {
    /// Entry keyed by the short name of `T`, mapped to its full type path.
    pub fn of<T: ?Sized>() -> Self {
        let path = std::any::type_name::<T>();
        let base = path.split('<').next().unwrap_or(path);
        let name = base.rsplit("::").next().unwrap_or(base).to_string();
        Self { name, path }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &'static str {
        self.path
    }
}

/// Option restricted to the labels of a lookup table
#[derive(Debug, Clone)]
pub struct MapOption {
    name: &'static str,
    table: MapTable,
}

impl MapOption {
    pub fn map(table: MapTable) -> Self {
        Self { name: "map", table }
    }

    /// Table built from Rust types, keyed by type name.
    pub fn classes(entries: impl IntoIterator<Item = ClassEntry>) -> Self {
        let table = entries
            .into_iter()
            .map(|entry| (entry.name, Value::Str(entry.path.to_string())))
            .collect();
        Self {
            name: "class",
            table,
        }
    }

    pub fn table(&self) -> &MapTable {
        &self.table
    }

    fn lookup(&self, label: &str) -> Result<Value, OptionError> {
        match self.table.get(label) {
            Some(value) => Ok(Value::Mapped {
                label: label.to_string(),
                value: Box::new(value),
            }),
            None => Err(OptionError::parse(
                self.name,
                label,
                format!("expected one of: {}", self.table.labels().join(", ")),
            )),
        }
    }

    fn check(&self, label: &str, value: &Value) -> Result<(), OptionError> {
        match self.table.get(label) {
            Some(current) if current == *value => Ok(()),
            Some(current) => Err(OptionError::Consistency {
                label: label.to_string(),
                reason: format!("table now maps it to <{}>, stored <{}>", current, value),
            }),
            None => Err(OptionError::Consistency {
                label: label.to_string(),
                reason: "label was removed from the table".to_string(),
            }),
        }
    }
}

impl OptionKind for MapOption {
    fn type_name(&self) -> &'static str {
        self.name
    }

    fn parse(&self, raw: &Value) -> Result<Value, OptionError> {
        match raw {
            Value::Mapped { label, value } => {
                if self.table.get(label).is_none() {
                    return self.lookup(label);
                }
                self.check(label, value)?;
                Ok(raw.clone())
            }
            Value::Str(label) => self.lookup(label.trim()),
            other => match self.table.label_of(other) {
                Some(label) => self.lookup(&label),
                None => Err(OptionError::parse(self.name, other, "value is not in the table")),
            },
        }
    }

    fn represent(&self, value: &Value) -> Result<Value, OptionError> {
        match value {
            Value::Mapped { label, value } => {
                self.check(label, value)?;
                Ok(Value::Str(label.clone()))
            }
            other => Err(OptionError::parse(self.name, other, "not a mapped value")),
        }
    }
}
