//! Tags code-shaped words in plain prose.
//!
//! A display heuristic only: `open()` is tagged as a call because it looks
//! like one, not because anything resolved it.

use std::sync::LazyLock;

use regex::Regex;

use crate::fragment::{HighlightFragment, IdentClass, scan};

// Alternation order is significant: leftmost-first, so a call beats
// snake_case, which beats PascalCase, which beats camelCase.
static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?P<call>\b[A-Za-z_][A-Za-z0-9_]*\(\))",
        r"|(?P<snake>\b[A-Za-z][A-Za-z0-9]*(?:_+[A-Za-z0-9]+)+\b)",
        r"|(?P<pascal>\b[A-Z][A-Za-z0-9]*[a-z][A-Za-z0-9]*\b)",
        r"|(?P<camel>\b[a-z][a-z0-9]*[A-Z][A-Za-z0-9]*\b)",
    ))
    .expect("identifier pattern is valid")
});

/// Split a prose fragment into plain text and tagged identifiers.
///
/// The fragments concatenate back to `text`.
#[must_use]
pub fn highlight_identifiers(text: &str) -> Vec<HighlightFragment> {
    scan(&IDENTIFIER, text, |caps| {
        if caps.name("call").is_some() {
            Some(IdentClass::Call)
        } else if caps.name("snake").is_some() {
            Some(IdentClass::SnakeCase)
        } else if caps.name("pascal").is_some() {
            Some(IdentClass::PascalCase)
        } else if caps.name("camel").is_some() {
            Some(IdentClass::CamelCase)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::Fragment;

    fn tagged(text: &str) -> Vec<(String, IdentClass)> {
        highlight_identifiers(text)
            .into_iter()
            .filter_map(|f| f.class.map(|c| (f.text, c)))
            .collect()
    }

    #[test]
    fn call_beats_snake_case() {
        assert_eq!(
            tagged("call_me()"),
            vec![("call_me()".to_string(), IdentClass::Call)]
        );
    }

    #[test]
    fn each_shape() {
        assert_eq!(
            tagged("use parse_str on RepoView with fileTree"),
            vec![
                ("parse_str".to_string(), IdentClass::SnakeCase),
                ("RepoView".to_string(), IdentClass::PascalCase),
                ("fileTree".to_string(), IdentClass::CamelCase),
            ]
        );
    }

    #[test]
    fn single_hump_is_pascal_case_but_acronym_is_not() {
        assert_eq!(
            highlight_identifiers("Lexer and API"),
            vec![
                Fragment::classified(IdentClass::PascalCase, "Lexer"),
                Fragment::plain(" and API"),
            ]
        );
        assert_eq!(
            tagged("Ab A"),
            vec![("Ab".to_string(), IdentClass::PascalCase)]
        );
    }

    #[test]
    fn lowercase_prose_passes_through() {
        assert_eq!(
            highlight_identifiers("it is fast."),
            vec![Fragment::plain("it is fast.")]
        );
    }

    #[test]
    fn repeated_underscores_join_snake_segments() {
        assert_eq!(
            tagged("foo__bar and x___y"),
            vec![
                ("foo__bar".to_string(), IdentClass::SnakeCase),
                ("x___y".to_string(), IdentClass::SnakeCase),
            ]
        );
    }

    #[test]
    fn acronym_prefixed_pascal_case() {
        assert_eq!(
            tagged("an HTTPServer"),
            vec![("HTTPServer".to_string(), IdentClass::PascalCase)]
        );
    }

    #[test]
    fn screaming_snake_case() {
        assert_eq!(
            tagged("MAX_RETRIES"),
            vec![("MAX_RETRIES".to_string(), IdentClass::SnakeCase)]
        );
    }

    #[test]
    fn call_with_arguments_is_not_tagged_as_call() {
        assert!(tagged("run(x)").is_empty());
    }

    #[test]
    fn method_call_tags_last_segment() {
        assert_eq!(
            tagged("client.close()"),
            vec![("close()".to_string(), IdentClass::Call)]
        );
    }
}
