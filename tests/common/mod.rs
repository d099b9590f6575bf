#![allow(dead_code)]

use syntext::{Fragment, InlineSpan, Token, TokenKind, lex_line, split_inline_spans};

/// Concatenate token texts back into a line.
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

/// Concatenate spans with their delimiters reinserted.
pub fn join_spans(spans: &[InlineSpan]) -> String {
    spans.iter().map(InlineSpan::source).collect()
}

pub fn join_fragments<C>(frags: &[Fragment<C>]) -> String {
    frags.iter().map(|f| f.text.as_str()).collect()
}

/// `(kind, text)` pairs, the shape most assertions want.
pub fn lexed(line: &str) -> Vec<(TokenKind, String)> {
    lex_line(line).into_iter().map(|t| (t.kind, t.text)).collect()
}

/// Lex and assert the round-trip in one step.
pub fn lex_lossless(line: &str) -> Vec<Token> {
    let tokens = lex_line(line);
    assert_eq!(
        join_tokens(&tokens),
        line,
        "lexer is not lossless for {line:?}: {tokens:#?}"
    );
    tokens
}

/// Split and assert the round-trip in one step.
pub fn split_lossless(paragraph: &str) -> Vec<InlineSpan> {
    let spans = split_inline_spans(paragraph);
    assert_eq!(
        join_spans(&spans),
        paragraph,
        "splitter is not lossless for {paragraph:?}: {spans:#?}"
    );
    spans
}
