//! Markdown-lite inline span splitting for chat answers.
//!
//! Recognises exactly three forms, with no nesting: `**bold**`,
//! `` `code` `` and `*italic*`. At each position bold is tried first,
//! then code, then italic. The first match wins and scanning resumes
//! after it, so `` **a `b` c** `` is one bold span with literal
//! backticks inside.

use std::sync::LazyLock;

use regex::Regex;

use crate::colorize::colorize_code_span;
use crate::highlight::highlight_identifiers;
use crate::span::{InlineSpan, RenderedSpan, SpanKind};

static INLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*(?P<bold>[^*]+?)\*\*|`(?P<code>[^`]+?)`|\*(?P<italic>[^*]+?)\*")
        .expect("inline span pattern is valid")
});

/// Split one paragraph into text, bold, italic and code spans.
///
/// Unpaired delimiters stay in the surrounding text span. Empty text
/// spans are not emitted.
#[must_use]
pub fn split_inline_spans(paragraph: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in INLINE.captures_iter(paragraph) {
        let (kind, value) = if let Some(m) = caps.name("bold") {
            (SpanKind::Bold, m.as_str())
        } else if let Some(m) = caps.name("code") {
            (SpanKind::Code, m.as_str())
        } else if let Some(m) = caps.name("italic") {
            (SpanKind::Italic, m.as_str())
        } else {
            continue;
        };
        let Some(whole) = caps.get(0) else {
            continue;
        };

        if whole.start() > last {
            spans.push(InlineSpan::new(
                SpanKind::Text,
                &paragraph[last..whole.start()],
            ));
        }
        spans.push(InlineSpan::new(kind, value));
        last = whole.end();
    }

    if last < paragraph.len() {
        spans.push(InlineSpan::new(SpanKind::Text, &paragraph[last..]));
    }

    spans
}

/// Run the secondary pass that belongs to the span's kind.
#[must_use]
pub fn render_span(span: &InlineSpan) -> RenderedSpan {
    match span.kind {
        SpanKind::Text => RenderedSpan::Text(highlight_identifiers(&span.value)),
        SpanKind::Bold => RenderedSpan::Bold(highlight_identifiers(&span.value)),
        SpanKind::Italic => RenderedSpan::Italic(highlight_identifiers(&span.value)),
        SpanKind::Code => RenderedSpan::Code(colorize_code_span(&span.value)),
    }
}

/// Split a paragraph and render every span.
#[must_use]
pub fn render_paragraph(paragraph: &str) -> Vec<RenderedSpan> {
    split_inline_spans(paragraph)
        .iter()
        .map(render_span)
        .collect()
}
