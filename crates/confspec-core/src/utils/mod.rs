pub mod fs;

pub use fs::{expand_path, normalize_path};

/// Return the first non-blank line of a text, trimmed.
///
/// Leading blank lines are skipped, so a multi-line docstring-style
/// comment collapses to its first meaningful line.
pub fn first_line(text: &str) -> String {
    text.trim()
        .lines()
        .next()
        .map(|line| line.trim().to_string())
        .unwrap_or_default()
}

/// Check whether `name` is a valid identifier: a letter or underscore
/// followed by letters, digits or underscores (ASCII only).
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

// Test module declaration
#[cfg(test)]
mod tests;
