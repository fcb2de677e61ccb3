
#[cfg(test)]
mod tests {
    use crate::utils::{first_line, is_identifier};

    #[test]
    fn test_first_line_skips_leading_blank_lines() {
        let text = "\n\n    The First Line\nSecond Line\n  Third Line\n";
        assert_eq!(first_line(text), "The First Line");
    }

    #[test]
    fn test_first_line_of_empty_text() {
        assert_eq!(first_line(""), "");
        assert_eq!(first_line("   \n  "), "");
    }

    #[test]
    fn test_identifiers() {
        assert!(is_identifier("age"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("config_int2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("with-dash"));
        assert!(!is_identifier("with space"));
        assert!(!is_identifier("ñandú"));
    }
}
