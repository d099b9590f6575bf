//! Function definition detection for the code viewer.
//!
//! Line-oriented pattern matching, not parsing: a `def` inside a string
//! literal is still reported. Extents are estimated from indentation
//! (Python) or brace depth (JavaScript/TypeScript).

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

/// Braces are counted at most this many lines past the definition.
const JS_MAX_LOOKAHEAD: usize = 400;
/// Extent assumed when no closing brace is found.
const JS_FALLBACK_LINES: usize = 40;

static PY_DEF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:async\s+)?def\s+([A-Za-z_][A-Za-z0-9_]*)\s*\(")
        .expect("python def pattern is valid")
});

static JS_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:export\s+)?(?:async\s+)?function\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*\(")
        .expect("js function pattern is valid")
});

static JS_ARROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:export\s+)?(?:const|let|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*(?:async\s*)?\([^)]*\)\s*=>",
    )
    .expect("js arrow pattern is valid")
});

static JS_ASSIGN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*function\s*\(")
        .expect("js assign pattern is valid")
});

/// Language family, as far as symbol detection cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    /// JavaScript and TypeScript, including JSX/TSX.
    JavaScript,
    Other,
}

impl Language {
    /// Map a free-form language tag (`"Python"`, `"tsx"`, ...) to a family.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.to_lowercase();
        if tag.contains("python") || tag == "py" {
            Self::Python
        } else if tag.contains("typescript")
            || tag.contains("javascript")
            || matches!(tag.as_str(), "ts" | "tsx" | "js" | "jsx")
        {
            Self::JavaScript
        } else {
            Self::Other
        }
    }

    /// Infer from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(Self::Other, Self::from_tag)
    }
}

/// A detected function definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedSymbol {
    pub name: String,
    /// 1-based line of the definition.
    pub start_line: usize,
    /// 1-based, inclusive.
    pub end_line: usize,
    /// 0-based character column of the name.
    pub start_col: usize,
    /// Exclusive.
    pub end_col: usize,
}

/// Find function definitions in `content`.
#[must_use]
pub fn detect_symbols(content: &str, language: Language) -> Vec<DetectedSymbol> {
    if language == Language::Other {
        return Vec::new();
    }

    let lines: Vec<&str> = content.split('\n').collect();
    let mut symbols = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let (name, end_line) = match language {
            Language::Python => match capture_name(&PY_DEF, line) {
                Some(name) => (name, python_end_line(&lines, idx)),
                None => continue,
            },
            Language::JavaScript | Language::Other => {
                let name = capture_name(&JS_FUNCTION, line)
                    .or_else(|| capture_name(&JS_ARROW, line))
                    .or_else(|| capture_name(&JS_ASSIGN, line));
                match name {
                    Some(name) => (name, js_end_line(&lines, idx)),
                    None => continue,
                }
            }
        };

        let start_col = line
            .find(name)
            .map_or(0, |byte| line[..byte].chars().count());
        let end_col = start_col + name.chars().count();

        trace!(symbol = name, start_line = idx + 1, end_line, "detected symbol");
        symbols.push(DetectedSymbol {
            name: name.to_string(),
            start_line: idx + 1,
            end_line,
            start_col,
            end_col,
        });
    }

    symbols
}

/// First symbol starting on each line, keyed by 1-based line number.
#[must_use]
pub fn symbols_by_line(symbols: &[DetectedSymbol]) -> BTreeMap<usize, DetectedSymbol> {
    let mut by_line = BTreeMap::new();
    for symbol in symbols {
        by_line
            .entry(symbol.start_line)
            .or_insert_with(|| symbol.clone());
    }
    by_line
}

fn capture_name<'a>(regex: &Regex, line: &'a str) -> Option<&'a str> {
    regex
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn leading_indent(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}

/// Last line of the body that starts at `start` (0-based), as a 1-based
/// line number. Blank and comment lines never end the body.
fn python_end_line(lines: &[&str], start: usize) -> usize {
    let def_indent = leading_indent(lines[start]);
    let mut end = start;

    for (idx, line) in lines.iter().enumerate().skip(start + 1) {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            end = idx;
            continue;
        }
        if leading_indent(line) <= def_indent {
            break;
        }
        end = idx;
    }

    end + 1
}

/// Line (1-based) on which the first opened brace closes again.
fn js_end_line(lines: &[&str], start: usize) -> usize {
    let last = (lines.len() - 1).min(start + JS_MAX_LOOKAHEAD);
    let mut depth = 0usize;
    let mut started = false;

    for (idx, line) in lines.iter().enumerate().take(last + 1).skip(start) {
        for ch in line.bytes() {
            match ch {
                b'{' => {
                    depth += 1;
                    started = true;
                }
                b'}' if started => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return idx + 1;
                    }
                }
                _ => {}
            }
        }
    }

    lines.len().min(start + JS_FALLBACK_LINES + 1)
}
