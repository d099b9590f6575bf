use crate::fragment::{CodeFragment, HighlightFragment};

/// Markdown-lite span kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Plain prose between delimited spans.
    Text,
    /// `**...**`
    Bold,
    /// `*...*`
    Italic,
    /// `` `...` ``
    Code,
}

impl SpanKind {
    /// Delimiter placed on both sides of the span value.
    #[must_use]
    pub const fn delimiter(self) -> &'static str {
        match self {
            Self::Text => "",
            Self::Bold => "**",
            Self::Italic => "*",
            Self::Code => "`",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Code => "code",
        }
    }
}

/// One span of a paragraph, with delimiters stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSpan {
    pub kind: SpanKind,
    pub value: String,
}

impl InlineSpan {
    #[must_use]
    pub fn new(kind: SpanKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// The span as it appeared in the paragraph, delimiters included.
    #[must_use]
    pub fn source(&self) -> String {
        let delim = self.kind.delimiter();
        format!("{delim}{}{delim}", self.value)
    }
}

/// A span after its secondary pass has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedSpan {
    Text(Vec<HighlightFragment>),
    Bold(Vec<HighlightFragment>),
    Italic(Vec<HighlightFragment>),
    Code(Vec<CodeFragment>),
}

impl RenderedSpan {
    #[must_use]
    pub const fn kind(&self) -> SpanKind {
        match self {
            Self::Text(_) => SpanKind::Text,
            Self::Bold(_) => SpanKind::Bold,
            Self::Italic(_) => SpanKind::Italic,
            Self::Code(_) => SpanKind::Code,
        }
    }

    /// Visible text of the span, without delimiters.
    #[must_use]
    pub fn visible_text(&self) -> String {
        match self {
            Self::Text(frags) | Self::Bold(frags) | Self::Italic(frags) => {
                frags.iter().map(|f| f.text.as_str()).collect()
            }
            Self::Code(frags) => frags.iter().map(|f| f.text.as_str()).collect(),
        }
    }
}
