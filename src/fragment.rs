//! Classified slices produced by the regex passes.

use std::ops::Range;

use regex::Captures;

/// A slice of text, optionally tagged with a class `C`.
///
/// `class == None` means the text passed through unclassified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment<C> {
    pub text: String,
    pub class: Option<C>,
}

impl<C> Fragment<C> {
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: None,
        }
    }

    #[must_use]
    pub fn classified(class: C, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: Some(class),
        }
    }

    #[must_use]
    pub const fn is_plain(&self) -> bool {
        self.class.is_none()
    }
}

/// Identifier shapes tagged in prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentClass {
    /// `name()`
    Call,
    /// `snake_case`
    SnakeCase,
    /// `PascalCase`
    PascalCase,
    /// `camelCase`
    CamelCase,
}

impl IdentClass {
    /// Visual class tag. Snake and camel case share one.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Call => "function-call",
            Self::SnakeCase | Self::CamelCase => "identifier",
            Self::PascalCase => "type-name",
        }
    }
}

/// Classes recognised inside inline code spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeClass {
    Keyword,
    String,
    Number,
    Call,
}

impl CodeClass {
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::String => "string",
            Self::Number => "number",
            Self::Call => "call",
        }
    }
}

/// Tag used for plain fragments.
pub const DEFAULT_TAG: &str = "default";

pub type HighlightFragment = Fragment<IdentClass>;
pub type CodeFragment = Fragment<CodeClass>;

/// Split `text` into plain gaps and classified regex matches.
///
/// `classify` maps each match to its class by inspecting which named
/// group participated. Matches it rejects are kept as plain text.
pub(crate) fn scan<C>(
    regex: &regex::Regex,
    text: &str,
    classify: impl Fn(&Captures<'_>) -> Option<C>,
) -> Vec<Fragment<C>> {
    let mut out = Vec::new();
    let mut last = 0;

    for caps in regex.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let Some(class) = classify(&caps) else {
            continue;
        };
        push_plain(&mut out, text, last..whole.start());
        out.push(Fragment::classified(class, whole.as_str()));
        last = whole.end();
    }
    push_plain(&mut out, text, last..text.len());

    out
}

fn push_plain<C>(out: &mut Vec<Fragment<C>>, text: &str, range: Range<usize>) {
    if !range.is_empty() {
        out.push(Fragment::plain(&text[range]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_and_camel_share_tag() {
        assert_eq!(IdentClass::SnakeCase.tag(), IdentClass::CamelCase.tag());
        assert_ne!(IdentClass::Call.tag(), IdentClass::PascalCase.tag());
    }

    #[test]
    fn scan_keeps_gaps() {
        let re = regex::Regex::new(r"(?P<d>\d+)").expect("valid regex");
        let frags = scan(&re, "a1b22", |c| c.name("d").map(|_| CodeClass::Number));
        let texts: Vec<_> = frags.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "1", "b", "22"]);
        assert!(frags[0].is_plain());
        assert_eq!(frags[3].class, Some(CodeClass::Number));
    }
}
