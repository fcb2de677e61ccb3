use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value as JsonValue};

use crate::error::Result;
use crate::format::FormatProvider;
use crate::format::error::FormatError;
use crate::format::tree::{Node, export_tree, import_tree};
use crate::manager::Manager;
use crate::value::Value;

/// JSON object of categories, each an object of keys
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormat;

fn to_node(json: JsonValue) -> Node {
    match json {
        JsonValue::Object(entries) => {
            Node::Table(entries.into_iter().map(|(k, v)| (k, to_node(v))).collect())
        }
        other => {
            let text = other.to_string();
            match Value::from_json(other) {
                Some(value) => Node::Leaf(value),
                None => Node::Invalid(text),
            }
        }
    }
}

impl FormatProvider for JsonFormat {
    fn name(&self) -> &'static str {
        "json"
    }

    fn do_import(&self, manager: &mut Manager, text: &str) -> Result<()> {
        let decoded = serde_json::from_str::<JsonValue>(text).map_err(|e| FormatError::Decode {
            format: "json",
            source: Box::new(e),
        });
        match manager.contain(decoded.map_err(Into::into))? {
            Some(json) => import_tree(manager, "json", to_node(json)),
            None => Ok(()),
        }
    }

    fn do_export(&self, manager: &Manager) -> Result<String> {
        let mut document = Map::new();
        for (category, entries) in export_tree(manager)? {
            let options: Map<String, JsonValue> = entries
                .into_iter()
                .map(|(key, value)| (key, value.to_json()))
                .collect();
            document.insert(category, JsonValue::Object(options));
        }

        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
        JsonValue::Object(document)
            .serialize(&mut serializer)
            .map_err(|e| FormatError::Encode {
                format: "json",
                source: Box::new(e),
            })?;
        String::from_utf8(buffer).map_err(|e| {
            FormatError::Encode {
                format: "json",
                source: Box::new(e),
            }
            .into()
        })
    }
}
