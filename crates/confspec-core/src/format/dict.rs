use crate::error::Result;
use crate::format::FormatProvider;
use crate::format::error::FormatError;
use crate::format::literal;
use crate::format::tree::{export_tree, import_tree};
use crate::manager::Manager;

/// Nested mapping literal, `{'category': {'key': value}}`.
///
/// Documents are read with a restricted literal grammar; nothing in them is
/// evaluated.
#[derive(Debug, Default, Clone, Copy)]
pub struct DictFormat;

impl FormatProvider for DictFormat {
    fn name(&self) -> &'static str {
        "dict"
    }

    fn do_import(&self, manager: &mut Manager, text: &str) -> Result<()> {
        let decoded = literal::parse(text).map_err(|e| FormatError::Decode {
            format: "dict",
            source: Box::new(e),
        });
        match manager.contain(decoded.map_err(Into::into))? {
            Some(document) => import_tree(manager, "dict", document.into_node()),
            None => Ok(()),
        }
    }

    fn do_export(&self, manager: &Manager) -> Result<String> {
        Ok(literal::write_document(&export_tree(manager)?))
    }
}
