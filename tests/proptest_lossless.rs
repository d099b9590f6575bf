//! Property-based tests with proptest.
//!
//! Every stage must reproduce its input exactly and give the same answer
//! twice. Inputs mix arbitrary Unicode with strings biased towards the
//! characters the scanners care about (quotes, stars, brackets, escapes).

mod common;

use common::{join_fragments, join_spans, join_tokens};
use proptest::prelude::*;
use syntext::{
    TokenKind, colorize_code_span, highlight_identifiers, lex_line, render_paragraph,
    split_inline_spans,
};

/// Lines made mostly of lexer-significant characters.
fn code_like() -> impl Strategy<Value = String> {
    r#"[a-zA-Z0-9_$ ()\[\]{}"'`\\/#.*=+-]{0,40}"#.prop_map(|s| s)
}

/// Paragraphs made mostly of markdown-lite delimiters and identifiers.
fn prose_like() -> impl Strategy<Value = String> {
    r"[a-zA-Z_ ()*`.]{0,40}".prop_map(|s| s)
}

fn any_line() -> impl Strategy<Value = String> {
    prop_oneof![code_like(), prose_like(), "[^\n]{0,40}".prop_map(|s| s)]
}

proptest! {
    #[test]
    fn lexer_is_lossless(line in any_line()) {
        prop_assert_eq!(join_tokens(&lex_line(&line)), line);
    }

    #[test]
    fn lexer_is_deterministic(line in any_line()) {
        prop_assert_eq!(lex_line(&line), lex_line(&line));
    }

    #[test]
    fn single_char_kinds_are_single_chars(line in code_like()) {
        for token in lex_line(&line) {
            if matches!(token.kind, TokenKind::Bracket(_) | TokenKind::Text) {
                prop_assert_eq!(token.text.chars().count(), 1);
            }
        }
    }

    #[test]
    fn comment_is_always_last(line in code_like()) {
        let tokens = lex_line(&line);
        if let Some(pos) = tokens.iter().position(|t| t.kind == TokenKind::Comment) {
            prop_assert_eq!(pos, tokens.len() - 1);
        }
    }

    #[test]
    fn colorizer_is_lossless(code in any_line()) {
        prop_assert_eq!(join_fragments(&colorize_code_span(&code)), code);
    }

    #[test]
    fn highlighter_is_lossless(text in any_line()) {
        prop_assert_eq!(join_fragments(&highlight_identifiers(&text)), text);
    }

    #[test]
    fn splitter_is_lossless(paragraph in any_line()) {
        prop_assert_eq!(join_spans(&split_inline_spans(&paragraph)), paragraph);
    }

    #[test]
    fn splitter_never_emits_empty_spans(paragraph in prose_like()) {
        for span in split_inline_spans(&paragraph) {
            prop_assert!(!span.value.is_empty());
        }
    }

    #[test]
    fn rendering_preserves_span_values(paragraph in prose_like()) {
        let spans = split_inline_spans(&paragraph);
        let rendered = render_paragraph(&paragraph);
        prop_assert_eq!(spans.len(), rendered.len());
        for (span, out) in spans.iter().zip(&rendered) {
            prop_assert_eq!(span.kind, out.kind());
            prop_assert_eq!(&span.value, &out.visible_text());
        }
    }
}
