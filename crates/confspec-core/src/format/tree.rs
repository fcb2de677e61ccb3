//! Two-level document model shared by the tree-shaped formats.
//!
//! JSON, TOML, YAML and mapping literals all decode to a mapping of
//! categories to mappings of keys to values. Each provider converts its
//! decoded document to a [`Node`] and hands it to [`import_tree`]; exports
//! are built from [`export_tree`].
use crate::error::Result;
use crate::format::error::FormatError;
use crate::manager::Manager;
use crate::value::Value;

/// Decoded document node
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Table(Vec<(String, Node)>),
    Leaf(Value),
    /// Something with no configuration counterpart, such as `null`
    Invalid(String),
}

/// Category name to `(key, represented value)` pairs, both sorted
pub(crate) type Tree = Vec<(String, Vec<(String, Value)>)>;

fn structural(manager: &Manager, format: &'static str, message: String) -> Result<()> {
    manager
        .contain::<()>(Err(FormatError::structural(format, message).into()))
        .map(|_| ())
}

/// Apply a decoded document to `manager`.
///
/// Unknown categories and keys are reported and skipped. Malformed
/// categories, misplaced keys and values that cannot be set follow the
/// manager's safe mode.
pub(crate) fn import_tree(manager: &mut Manager, format: &'static str, root: Node) -> Result<()> {
    let categories = match root {
        Node::Table(categories) => categories,
        _ => {
            return structural(
                manager,
                format,
                "Cannot read document as a mapping of categories.".to_string(),
            );
        }
    };

    for (category, node) in categories {
        let Node::Table(options) = node else {
            structural(manager, format, format!("Malformed category \"{}\".", category))?;
            continue;
        };

        if !manager.has_category(&category) {
            manager.notice(&format!("Ignoring unknown category \"{}\".", category));
            continue;
        }

        for (key, node) in options {
            let expected = match manager.option(&key) {
                Some(option) => option.category().to_string(),
                None => {
                    manager.notice(&format!("Ignoring unknown key \"{}\".", key));
                    continue;
                }
            };
            if expected != category {
                structural(
                    manager,
                    format,
                    format!(
                        "Key \"{}\" should belong to category \"{}\", found in \"{}\" instead.",
                        key, expected, category
                    ),
                )?;
                continue;
            }

            match node {
                Node::Leaf(value) => {
                    let outcome = manager.set(&key, value);
                    manager.contain(outcome)?;
                }
                Node::Table(_) => {
                    structural(manager, format, format!("Key \"{}\" holds a mapping.", key))?;
                }
                Node::Invalid(what) => {
                    structural(
                        manager,
                        format,
                        format!("Key \"{}\" holds an unsupported value: {}.", key, what),
                    )?;
                }
            }
        }
    }
    Ok(())
}

/// Represented values of every option, grouped by category.
pub(crate) fn export_tree(manager: &Manager) -> Result<Tree> {
    manager
        .categories()
        .into_iter()
        .map(|(category, options)| -> Result<(String, Vec<(String, Value)>)> {
            let entries = options
                .into_iter()
                .map(|option| -> Result<(String, Value)> {
                    Ok((option.key().to_string(), option.represent()?))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok((category.to_string(), entries))
        })
        .collect()
}
