use std::fmt;

/// Bracket family of a single bracket character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketKind {
    /// `(` or `)`.
    Paren,
    /// `{` or `}`.
    Brace,
    /// `[` or `]`.
    Square,
}

impl BracketKind {
    /// Bracket family for `ch`, if it is one of `()[]{}`.
    #[must_use]
    pub const fn of(ch: char) -> Option<Self> {
        match ch {
            '(' | ')' => Some(Self::Paren),
            '{' | '}' => Some(Self::Brace),
            '[' | ']' => Some(Self::Square),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paren => "paren",
            Self::Brace => "brace",
            Self::Square => "square",
        }
    }
}

/// Token kinds produced by the line lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Member of the configured keyword set.
    Keyword,
    /// Quoted string, possibly unterminated.
    String,
    /// `//` or `#` to end of line.
    Comment,
    /// Digit run, including `.` and `_`.
    Number,
    /// Identifier followed by `(`.
    Function,
    /// Any other identifier.
    Variable,
    /// Single bracket character.
    Bracket(BracketKind),
    /// Anything else, one character per token.
    Text,
}

impl TokenKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::String => "string",
            Self::Comment => "comment",
            Self::Number => "number",
            Self::Function => "function",
            Self::Variable => "variable",
            Self::Bracket(_) => "bracket",
            Self::Text => "text",
        }
    }

    /// Bracket family, set only for `Bracket` tokens.
    #[must_use]
    pub const fn bracket_kind(self) -> Option<BracketKind> {
        match self {
            Self::Bracket(kind) => Some(kind),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bracket(kind) => write!(f, "bracket({})", kind.as_str()),
            other => f.write_str(other.as_str()),
        }
    }
}

/// A single classified slice of a source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}
