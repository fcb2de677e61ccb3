/// Category assigned to options that do not declare one
pub const DEFAULT_CATEGORY: &str = "general";

/// Format used by managers that do not select one
pub const DEFAULT_FORMAT: &str = "ini";

/// Default strftime format for date-time options (ISO 8601)
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Default strftime format for date options (ISO 8601)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default strftime format for time options (ISO 8601)
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Tokens accepted as `true` by boolean options (compared lowercase)
pub const TRUE_TOKENS: [&str; 4] = ["true", "yes", "1", "on"];

/// Tokens accepted as `false` by boolean options (compared lowercase)
pub const FALSE_TOKENS: [&str; 4] = ["false", "no", "0", "off"];

/// Words that can never be used as option keys or categories.
///
/// Rust strict and reserved keywords, plus Python keywords so that keys
/// stay usable as attribute names in Python tooling reading the same files.
pub const RESERVED_WORDS: &[&str] = &[
    // Rust
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
    "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
    "final", "gen", "macro", "override", "priv", "try", "typeof", "unsized", "virtual",
    "yield",
    // Python
    "False", "None", "True", "and", "assert", "class", "def", "del", "elif", "except",
    "finally", "from", "global", "import", "is", "lambda", "nonlocal", "not", "or", "pass",
    "raise", "with",
];
