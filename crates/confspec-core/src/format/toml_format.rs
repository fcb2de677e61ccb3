use toml::{Table, Value as TomlValue};

use crate::error::Result;
use crate::format::FormatProvider;
use crate::format::error::FormatError;
use crate::format::tree::{Node, export_tree, import_tree};
use crate::manager::Manager;
use crate::value::Value;

/// TOML document with one table per category
#[derive(Debug, Default, Clone, Copy)]
pub struct TomlFormat;

fn to_node(toml: TomlValue) -> Node {
    match toml {
        TomlValue::Table(entries) => {
            Node::Table(entries.into_iter().map(|(k, v)| (k, to_node(v))).collect())
        }
        other => match to_value(other) {
            Ok(value) => Node::Leaf(value),
            Err(what) => Node::Invalid(what),
        },
    }
}

fn to_value(toml: TomlValue) -> std::result::Result<Value, String> {
    match toml {
        TomlValue::String(s) => Ok(Value::Str(s)),
        TomlValue::Integer(i) => Ok(Value::Int(i)),
        TomlValue::Float(f) => Ok(Value::Float(f)),
        TomlValue::Boolean(b) => Ok(Value::Bool(b)),
        // Temporal options parse their own text form
        TomlValue::Datetime(dt) => Ok(Value::Str(dt.to_string())),
        TomlValue::Array(items) => items
            .into_iter()
            .map(to_value)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(Value::List),
        TomlValue::Table(_) => Err("nested table".to_string()),
    }
}

fn from_value(value: &Value) -> TomlValue {
    match value {
        Value::Bool(b) => TomlValue::Boolean(*b),
        Value::Int(i) => TomlValue::Integer(*i),
        Value::Float(f) => TomlValue::Float(*f),
        Value::List(items) => TomlValue::Array(items.iter().map(from_value).collect()),
        other => TomlValue::String(other.to_string()),
    }
}

impl FormatProvider for TomlFormat {
    fn name(&self) -> &'static str {
        "toml"
    }

    fn do_import(&self, manager: &mut Manager, text: &str) -> Result<()> {
        let decoded = text.parse::<Table>().map_err(|e| FormatError::Decode {
            format: "toml",
            source: Box::new(e),
        });
        match manager.contain(decoded.map_err(Into::into))? {
            Some(table) => import_tree(manager, "toml", to_node(TomlValue::Table(table))),
            None => Ok(()),
        }
    }

    fn do_export(&self, manager: &Manager) -> Result<String> {
        let mut document = Table::new();
        for (category, entries) in export_tree(manager)? {
            let options: Table = entries
                .into_iter()
                .map(|(key, value)| (key, from_value(&value)))
                .collect();
            document.insert(category, TomlValue::Table(options));
        }
        toml::to_string_pretty(&document).map_err(|e| {
            FormatError::Encode {
                format: "toml",
                source: Box::new(e),
            }
            .into()
        })
    }
}
