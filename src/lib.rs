//! Line lexer and markdown-lite inline formatter.
//!
//! Turns raw source lines and assistant answers into classified token
//! streams for display, without a language parser or a markdown library.
//!
//! # Quick start
//!
//! ## Lex a line of code
//!
//! ```
//! use syntext::{lex_line, TokenKind};
//!
//! let tokens = lex_line("return foo(42) # done");
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens[2].kind, TokenKind::Function);
//! let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(joined, "return foo(42) # done");
//! ```
//!
//! ## Render a chat paragraph
//!
//! ```
//! use syntext::{render_paragraph, RenderedSpan, IdentClass};
//!
//! let spans = render_paragraph("Call *parse_args()* first");
//! let RenderedSpan::Italic(frags) = &spans[1] else { panic!() };
//! assert_eq!(frags[0].class, Some(IdentClass::Call));
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod block;
pub mod colorize;
pub mod fragment;
pub mod highlight;
pub mod html;
pub mod inline;
pub mod keywords;
pub mod lexer;
pub mod span;
pub mod symbols;
pub mod token;

use std::path::{Path, PathBuf};

pub use block::{RenderedLine, render_answer, render_file, split_lines, split_paragraphs};
pub use colorize::colorize_code_span;
pub use fragment::{CodeClass, CodeFragment, Fragment, HighlightFragment, IdentClass};
pub use highlight::highlight_identifiers;
pub use inline::{render_paragraph, render_span, split_inline_spans};
pub use keywords::{KeywordError, KeywordErrorKind, KeywordSet};
pub use lexer::{lex_line, lex_line_with};
pub use span::{InlineSpan, RenderedSpan, SpanKind};
pub use symbols::{DetectedSymbol, Language, detect_symbols, symbols_by_line};
pub use token::{BracketKind, Token, TokenKind};

/// Errors from the crate's file-facing edges. The pipeline itself is total.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A keyword list could not be parsed.
    #[error("{0}")]
    Keywords(#[from] KeywordError),
    /// A source file could not be read.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read a text source for rendering.
pub fn read_source(path: &Path) -> Result<String, Error> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a keyword list file.
pub fn read_keywords(path: &Path) -> Result<KeywordSet, Error> {
    let text = read_source(path)?;
    Ok(KeywordSet::parse(&text)?)
}
