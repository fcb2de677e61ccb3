use serde_yaml::{Mapping, Value as YamlValue};

use crate::error::Result;
use crate::format::FormatProvider;
use crate::format::error::FormatError;
use crate::format::tree::{Node, export_tree, import_tree};
use crate::manager::Manager;
use crate::value::Value;

/// YAML mapping of categories to mappings of keys
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlFormat;

fn key_text(key: &YamlValue) -> Option<String> {
    match key {
        YamlValue::String(s) => Some(s.clone()),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn to_node(yaml: YamlValue) -> Node {
    match yaml {
        YamlValue::Mapping(entries) => {
            let mut table = Vec::with_capacity(entries.len());
            for (key, value) in entries {
                let Some(name) = key_text(&key) else {
                    return Node::Invalid(format!("mapping key {:?}", key));
                };
                table.push((name, to_node(value)));
            }
            Node::Table(table)
        }
        YamlValue::Tagged(tagged) => to_node(tagged.value),
        other => match to_value(other) {
            Ok(value) => Node::Leaf(value),
            Err(what) => Node::Invalid(what),
        },
    }
}

fn to_value(yaml: YamlValue) -> std::result::Result<Value, String> {
    match yaml {
        YamlValue::Null => Err("null".to_string()),
        YamlValue::Bool(b) => Ok(Value::Bool(b)),
        YamlValue::Number(n) => match n.as_i64() {
            Some(i) => Ok(Value::Int(i)),
            None => n
                .as_f64()
                .map(Value::Float)
                .ok_or_else(|| format!("number {}", n)),
        },
        YamlValue::String(s) => Ok(Value::Str(s)),
        YamlValue::Sequence(items) => items
            .into_iter()
            .map(to_value)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(Value::List),
        YamlValue::Mapping(_) => Err("nested mapping".to_string()),
        YamlValue::Tagged(tagged) => to_value(tagged.value),
    }
}

fn from_value(value: &Value) -> YamlValue {
    match value {
        Value::Bool(b) => YamlValue::Bool(*b),
        Value::Int(i) => YamlValue::Number((*i).into()),
        Value::Float(f) => YamlValue::Number((*f).into()),
        Value::List(items) => YamlValue::Sequence(items.iter().map(from_value).collect()),
        other => YamlValue::String(other.to_string()),
    }
}

impl FormatProvider for YamlFormat {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn do_import(&self, manager: &mut Manager, text: &str) -> Result<()> {
        let decoded = serde_yaml::from_str::<YamlValue>(text).map_err(|e| FormatError::Decode {
            format: "yaml",
            source: Box::new(e),
        });
        match manager.contain(decoded.map_err(Into::into))? {
            Some(document) => import_tree(manager, "yaml", to_node(document)),
            None => Ok(()),
        }
    }

    fn do_export(&self, manager: &Manager) -> Result<String> {
        let mut document = Mapping::new();
        for (category, entries) in export_tree(manager)? {
            let options: Mapping = entries
                .into_iter()
                .map(|(key, value)| (YamlValue::String(key), from_value(&value)))
                .collect();
            document.insert(YamlValue::String(category), YamlValue::Mapping(options));
        }
        serde_yaml::to_string(&document).map_err(|e| {
            FormatError::Encode {
                format: "yaml",
                source: Box::new(e),
            }
            .into()
        })
    }
}
