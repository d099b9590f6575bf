//! Single-line source lexer for code previews.
//!
//! Works on one line of unknown language at a time. There is no state
//! carried between lines, so block comments and multi-line strings are
//! not recognised.

use crate::keywords::{KeywordSet, default_keywords, is_ident_continue, is_ident_start};
use crate::token::{BracketKind, Token, TokenKind};

/// Tokenize one line with the default keyword set.
///
/// Never fails: every input, including the empty string, yields a
/// token sequence whose texts concatenate back to `line`.
#[must_use]
pub fn lex_line(line: &str) -> Vec<Token> {
    lex_line_with(line, default_keywords())
}

/// Tokenize one line, classifying identifiers against `keywords`.
#[must_use]
pub fn lex_line_with(line: &str, keywords: &KeywordSet) -> Vec<Token> {
    Lexer::new(line, keywords).tokenize()
}

struct Lexer<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    keywords: &'a KeywordSet,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str, keywords: &'a KeywordSet) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            keywords,
        }
    }

    fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            if let Some(kind) = BracketKind::of(char::from(ch)) {
                tokens.push(self.take(TokenKind::Bracket(kind), self.pos + 1));
                continue;
            }

            match ch {
                b'#' => {
                    tokens.push(self.take(TokenKind::Comment, self.bytes.len()));
                    break;
                }
                b'/' if self.peek_at(1) == Some(b'/') => {
                    tokens.push(self.take(TokenKind::Comment, self.bytes.len()));
                    break;
                }
                b'"' | b'\'' | b'`' => tokens.push(self.read_string(ch)),
                b'0'..=b'9' => tokens.push(self.read_number()),
                _ if is_ident_start(ch) => tokens.push(self.read_identifier()),
                _ => tokens.push(self.read_char()),
            }
        }

        tokens
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    /// Emit `pos..end` as one token and move past it.
    fn take(&mut self, kind: TokenKind, end: usize) -> Token {
        let token = Token::new(kind, &self.input[self.pos..end]);
        self.pos = end;
        token
    }

    fn read_string(&mut self, quote: u8) -> Token {
        // Quotes and backslash are ASCII, so byte stepping never lands
        // inside a multi-byte character at a slice boundary.
        let mut end = self.pos + 1;
        while end < self.bytes.len() {
            match self.bytes[end] {
                b'\\' if end + 1 < self.bytes.len() => end += 2,
                b if b == quote => {
                    end += 1;
                    break;
                }
                _ => end += 1,
            }
        }
        self.take(TokenKind::String, end)
    }

    fn read_number(&mut self) -> Token {
        let mut end = self.pos + 1;
        while end < self.bytes.len() && matches!(self.bytes[end], b'0'..=b'9' | b'.' | b'_') {
            end += 1;
        }
        self.take(TokenKind::Number, end)
    }

    fn read_identifier(&mut self) -> Token {
        let mut end = self.pos + 1;
        while end < self.bytes.len() && is_ident_continue(self.bytes[end]) {
            end += 1;
        }

        let ident = &self.input[self.pos..end];
        let kind = if self.keywords.contains(ident) {
            TokenKind::Keyword
        } else if self.input[end..].trim_start().starts_with('(') {
            TokenKind::Function
        } else {
            TokenKind::Variable
        };
        self.take(kind, end)
    }

    fn read_char(&mut self) -> Token {
        let len = self.input[self.pos..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        self.take(TokenKind::Text, self.pos + len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<TokenKind> {
        lex_line(line).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn empty_line() {
        assert!(lex_line("").is_empty());
    }

    #[test]
    fn brackets_tagged_by_family() {
        let tokens = lex_line("a(b[c{d}])");
        let brackets: Vec<_> = tokens
            .iter()
            .filter_map(|t| t.kind.bracket_kind())
            .collect();
        assert_eq!(
            brackets,
            vec![
                BracketKind::Paren,
                BracketKind::Square,
                BracketKind::Brace,
                BracketKind::Brace,
                BracketKind::Square,
                BracketKind::Paren,
            ]
        );
    }

    #[test]
    fn hash_comment_swallows_rest() {
        let tokens = lex_line("x = 1 # note \"q\"");
        let last = tokens.last().expect("tokens");
        assert_eq!(last.kind, TokenKind::Comment);
        assert_eq!(last.text, "# note \"q\"");
    }

    #[test]
    fn single_slash_is_text() {
        assert_eq!(
            kinds("a / b"),
            vec![
                TokenKind::Variable,
                TokenKind::Text,
                TokenKind::Text,
                TokenKind::Text,
                TokenKind::Variable,
            ]
        );
    }

    #[test]
    fn escaped_quote_does_not_close() {
        let tokens = lex_line(r#""a\"b" c"#);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text, r#""a\"b""#);
    }

    #[test]
    fn trailing_backslash_in_string() {
        let tokens = lex_line("'abc\\");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "'abc\\");
    }

    #[test]
    fn escape_before_multibyte_char() {
        let tokens = lex_line("\"\\é\" x");
        assert_eq!(tokens[0].text, "\"\\é\"");
        assert_eq!(tokens[0].kind, TokenKind::String);
    }

    #[test]
    fn number_with_separators() {
        let tokens = lex_line("1_000.5");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Number);
    }

    #[test]
    fn function_lookahead_skips_whitespace() {
        assert_eq!(kinds("foo  ()")[0], TokenKind::Function);
    }

    #[test]
    fn dollar_identifier() {
        let tokens = lex_line("$el");
        assert_eq!(tokens[0].kind, TokenKind::Variable);
        assert_eq!(tokens[0].text, "$el");
    }

    #[test]
    fn non_ascii_falls_back_per_char() {
        let tokens = lex_line("λ→");
        assert_eq!(tokens.len(), 2);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Text));
    }

    #[test]
    fn custom_keywords() {
        let set = KeywordSet::from_words(["fn"]);
        let tokens = lex_line_with("fn main() {", &set);
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[2].kind, TokenKind::Function);
    }
}
