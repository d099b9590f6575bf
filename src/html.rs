//! Class-tagged HTML for token and fragment streams.
//!
//! Only class names are emitted; colors belong to whatever stylesheet
//! the host page ships.

use std::fmt::Write as _;

use html_escape::encode_text;

use crate::block::{render_answer, render_file};
use crate::fragment::{CodeFragment, DEFAULT_TAG, HighlightFragment};
use crate::keywords::KeywordSet;
use crate::span::RenderedSpan;
use crate::token::{Token, TokenKind};

/// Serialize one lexed line.
#[must_use]
pub fn line_to_html(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = match token.kind {
            TokenKind::Bracket(kind) => write!(
                out,
                "<span class=\"tok-bracket tok-{}\">{}</span>",
                kind.as_str(),
                encode_text(&token.text)
            ),
            kind => write!(
                out,
                "<span class=\"tok-{}\">{}</span>",
                kind.as_str(),
                encode_text(&token.text)
            ),
        };
    }
    out
}

/// Serialize one rendered paragraph as `<p>...</p>`.
#[must_use]
pub fn paragraph_to_html(spans: &[RenderedSpan]) -> String {
    let mut out = String::from("<p>");
    for span in spans {
        match span {
            RenderedSpan::Text(frags) => push_highlighted(&mut out, frags),
            RenderedSpan::Bold(frags) => {
                out.push_str("<strong>");
                push_highlighted(&mut out, frags);
                out.push_str("</strong>");
            }
            RenderedSpan::Italic(frags) => {
                out.push_str("<em>");
                push_highlighted(&mut out, frags);
                out.push_str("</em>");
            }
            RenderedSpan::Code(frags) => {
                out.push_str("<code>");
                push_code(&mut out, frags);
                out.push_str("</code>");
            }
        }
    }
    out.push_str("</p>");
    out
}

/// Render an assistant answer, one `<p>` per paragraph.
#[must_use]
pub fn answer_to_html(answer: &str) -> String {
    render_answer(answer)
        .iter()
        .map(|spans| paragraph_to_html(spans))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a file body, one `<div class="line">` per line.
#[must_use]
pub fn file_to_html(content: &str, keywords: &KeywordSet) -> String {
    let mut out = String::new();
    for line in render_file(content, keywords) {
        let _ = writeln!(
            out,
            "<div class=\"line\" data-line=\"{}\">{}</div>",
            line.number,
            line_to_html(&line.tokens)
        );
    }
    out
}

fn push_highlighted(out: &mut String, frags: &[HighlightFragment]) {
    for frag in frags {
        match frag.class {
            Some(class) => {
                let _ = write!(
                    out,
                    "<span class=\"hl-{}\">{}</span>",
                    class.tag(),
                    encode_text(&frag.text)
                );
            }
            None => out.push_str(&encode_text(&frag.text)),
        }
    }
}

fn push_code(out: &mut String, frags: &[CodeFragment]) {
    for frag in frags {
        let tag = frag.class.map_or(DEFAULT_TAG, |class| class.tag());
        let _ = write!(
            out,
            "<span class=\"code-{tag}\">{}</span>",
            encode_text(&frag.text)
        );
    }
}
