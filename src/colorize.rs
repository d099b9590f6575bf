//! Cheap colorizer for inline code spans inside prose.
//!
//! Unlike the line lexer this only picks out four shapes with one regex.
//! It exists for visual differentiation of short snippets such as
//! `` `if x:` `` or `` `client.connect()` ``.

use std::sync::LazyLock;

use regex::Regex;

use crate::fragment::{CodeClass, CodeFragment, scan};

/// Control-flow and declaration words from common C-like and scripting
/// languages.
pub const CODE_SPAN_KEYWORDS: &[&str] = &[
    "if", "else", "elif", "for", "while", "do", "return", "break", "continue", "function", "def",
    "class", "const", "let", "var", "import", "from", "export", "async", "await", "try", "catch",
    "except", "finally", "raise", "throw", "new", "fn", "pub", "struct", "impl", "match", "use",
    "mut", "in", "lambda", "yield", "with",
];

static CODE_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r#"\b(?P<keyword>{})\b|(?P<string>"[^"]*"|'[^']*')|(?P<number>\b[0-9]+\b)|(?P<call>\b[A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*\(\))"#,
        CODE_SPAN_KEYWORDS.join("|")
    );
    Regex::new(&pattern).expect("code span pattern is valid")
});

/// Colorize the content of one inline code span (backticks already
/// stripped). The fragments concatenate back to `code`.
#[must_use]
pub fn colorize_code_span(code: &str) -> Vec<CodeFragment> {
    scan(&CODE_SPAN, code, |caps| {
        if caps.name("keyword").is_some() {
            Some(CodeClass::Keyword)
        } else if caps.name("string").is_some() {
            Some(CodeClass::String)
        } else if caps.name("number").is_some() {
            Some(CodeClass::Number)
        } else if caps.name("call").is_some() {
            Some(CodeClass::Call)
        } else {
            None
        }
    })
}
