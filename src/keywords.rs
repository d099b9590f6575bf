//! Keyword sets for the line lexer.
//!
//! The lexer never guesses the source language. Whatever set is passed
//! in is applied to every identifier, so words that are plain identifiers
//! in one language (`from`, `class`) are keywords everywhere once listed.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

/// Union of common C-like, JavaScript and Python keywords.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "const",
    "let",
    "var",
    "function",
    "class",
    "if",
    "else",
    "for",
    "while",
    "return",
    "import",
    "export",
    "from",
    "async",
    "await",
    "try",
    "catch",
    "throw",
    "new",
    "this",
    "typeof",
    "instanceof",
    "def",
    "elif",
    "as",
    "with",
    "except",
    "finally",
    "raise",
    "lambda",
    "yield",
    "pass",
    "break",
    "continue",
];

static DEFAULT_SET: LazyLock<KeywordSet> = LazyLock::new(KeywordSet::default);

/// Shared instance of [`KeywordSet::default`].
#[must_use]
pub fn default_keywords() -> &'static KeywordSet {
    &DEFAULT_SET
}

/// Classifies a keyword list error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordErrorKind {
    /// Entry that can never be lexed as a single identifier.
    InvalidKeyword(String),
}

impl fmt::Display for KeywordErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKeyword(word) => {
                write!(f, "invalid keyword {word:?}, expected an identifier")
            }
        }
    }
}

/// Error produced while reading a keyword list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {line}")]
pub struct KeywordError {
    pub kind: KeywordErrorKind,
    pub line: usize,
}

/// Set of words the lexer classifies as `Keyword`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    words: HashSet<String>,
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::from_words(DEFAULT_KEYWORDS.iter().copied())
    }
}

impl KeywordSet {
    /// Empty set: every identifier becomes a function or variable.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a keyword list: one word per line, `#` starts a comment line.
    ///
    /// # Errors
    ///
    /// Returns `KeywordError` for an entry that is not identifier-shaped.
    pub fn parse(text: &str) -> Result<Self, KeywordError> {
        let mut words = HashSet::new();

        for (idx, raw) in text.lines().enumerate() {
            let word = raw.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            if !is_identifier(word) {
                return Err(KeywordError {
                    kind: KeywordErrorKind::InvalidKeyword(word.to_string()),
                    line: idx + 1,
                });
            }
            words.insert(word.to_string());
        }

        Ok(Self { words })
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Whether the lexer would read `word` as exactly one identifier.
pub(crate) fn is_identifier(word: &str) -> bool {
    let mut bytes = word.bytes();
    bytes.next().is_some_and(is_ident_start) && bytes.all(is_ident_continue)
}

pub(crate) const fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

pub(crate) const fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}
