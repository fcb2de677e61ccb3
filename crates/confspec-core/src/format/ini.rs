use std::sync::LazyLock;

use regex::Regex;

use crate::constants::DEFAULT_CATEGORY;
use crate::error::Result;
use crate::format::FormatProvider;
use crate::format::error::FormatError;
use crate::manager::Manager;

static SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[ *(?P<section>\w+) *\]$").expect("section pattern is valid")
});

static PROPERTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ *(?P<key>\w+) *= *(?P<value>.+)$").expect("property pattern is valid")
});

/// Line-oriented INI format.
///
/// `[section]` lines switch the current category, starting from `general`.
/// `key = value` lines set a value. Blank lines and lines starting with `;`
/// are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct IniFormat;

impl FormatProvider for IniFormat {
    fn name(&self) -> &'static str {
        "ini"
    }

    fn do_import(&self, manager: &mut Manager, text: &str) -> Result<()> {
        let mut section = DEFAULT_CATEGORY.to_string();

        for (number, line) in text.lines().enumerate().map(|(i, l)| (i + 1, l.trim())) {
            // Ignore comments and empty lines
            if line.is_empty() || line.starts_with(';') {
                continue;
            }

            if let Some(caps) = SECTION.captures(line) {
                section = caps["section"].to_string();
                continue;
            }

            let Some(caps) = PROPERTY.captures(line) else {
                let err = FormatError::structural(
                    "ini",
                    format!("Cannot parse line {} : \"{}\".", number, line),
                );
                manager.contain::<()>(Err(err.into()))?;
                continue;
            };
            let key = &caps["key"];

            // Consider only the sections and keys in the specification
            let expected = match manager.option(key) {
                Some(option) if manager.has_category(&section) => option.category().to_string(),
                _ => {
                    manager.notice(&format!("Ignoring \"{}\" in [{}].", key, section));
                    continue;
                }
            };

            if expected != section {
                let err = FormatError::structural(
                    "ini",
                    format!(
                        "Property \"{}\" should belong to section \"[{}]\", found in \"[{}]\" instead.",
                        key, expected, section
                    ),
                );
                manager.contain::<()>(Err(err.into()))?;
                continue;
            }

            let outcome = manager.set(key, caps["value"].trim());
            manager.contain(outcome)?;
        }
        Ok(())
    }

    fn do_export(&self, manager: &Manager) -> Result<String> {
        let mut output = Vec::new();
        for (category, options) in manager.categories() {
            output.push(format!("[{}]", category));
            for option in options {
                if !option.comment().is_empty() {
                    output.push(format!("; {}", option.comment()));
                }
                output.push(format!("{} = {}", option.key(), option.represent()?));
            }
            output.push(String::new());
        }
        Ok(output.join("\n"))
    }
}
