//! Layout units: answers become paragraphs, file bodies become lines.
//!
//! This is the only place that knows about newlines. Everything below it
//! works on a single line or paragraph.

use tracing::debug;

use crate::inline::render_paragraph;
use crate::keywords::KeywordSet;
use crate::lexer::lex_line_with;
use crate::span::RenderedSpan;
use crate::token::Token;

/// A lexed line of a file body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// 1-based line number.
    pub number: usize,
    pub tokens: Vec<Token>,
}

/// Paragraphs of an assistant answer.
///
/// Splits on `\n` and drops blank or whitespace-only lines. Kept lines
/// are returned verbatim.
#[must_use]
pub fn split_paragraphs(answer: &str) -> Vec<&str> {
    answer
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Lines of a file body, split on `\n` only.
///
/// Nothing is trimmed or dropped: joining the result with `\n` gives
/// back `content`.
#[must_use]
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split('\n').collect()
}

/// Render every paragraph of an answer.
#[must_use]
pub fn render_answer(answer: &str) -> Vec<Vec<RenderedSpan>> {
    let paragraphs = split_paragraphs(answer);
    debug!(paragraphs = paragraphs.len(), "rendering answer");
    paragraphs.into_iter().map(render_paragraph).collect()
}

/// Lex every line of a file body.
#[must_use]
pub fn render_file(content: &str, keywords: &KeywordSet) -> Vec<RenderedLine> {
    let lines = split_lines(content);
    debug!(lines = lines.len(), keywords = keywords.len(), "rendering file");
    lines
        .into_iter()
        .enumerate()
        .map(|(idx, line)| RenderedLine {
            number: idx + 1,
            tokens: lex_line_with(line, keywords),
        })
        .collect()
}
