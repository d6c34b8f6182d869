/// Collapse every run of whitespace to a single space and trim the ends.
/// Idempotent: normalizing twice equals normalizing once.
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}

/// Adapter for optional API fields: absent text renders as empty.
pub fn collapse_opt(text: Option<&str>) -> String {
    text.map(collapse_whitespace).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_runs_and_trims() {
        assert_eq!(collapse_whitespace("  a   b\t\nc  "), "a b c");
        assert_eq!(collapse_whitespace("single"), "single");
        assert_eq!(collapse_whitespace(""), "");
        assert_eq!(collapse_whitespace(" \t\r\n "), "");
    }

    #[test]
    fn is_idempotent() {
        for text in ["  a   b ", "x\n\ny", "", "   ", "already clean"] {
            let once = collapse_whitespace(text);
            assert_eq!(collapse_whitespace(&once), once);
        }
    }

    #[test]
    fn absent_text_is_empty() {
        assert_eq!(collapse_opt(None), "");
        assert_eq!(collapse_opt(Some("  a  b ")), "a b");
    }
}
