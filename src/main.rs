//! CLI to lex source files, render answer text and list function symbols.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use syntext::fragment::DEFAULT_TAG;
use syntext::{
    KeywordSet, Language, RenderedSpan, detect_symbols, html, read_keywords, read_source,
    render_answer, render_file,
};
use tracing::{Level, debug};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "syntext", version, about = "Lex code and render markdown-lite answers")]
struct Cli {
    /// Log debug events to stderr (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Lex source files line by line
    Lex {
        /// Keyword list, one word per line
        #[arg(long, value_name = "FILE")]
        keywords: Option<PathBuf>,
        /// Emit class-tagged HTML instead of a token listing
        #[arg(long)]
        html: bool,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Render answer text paragraph by paragraph
    Answer {
        /// Emit HTML instead of a span listing
        #[arg(long)]
        html: bool,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// List function definitions and their line ranges
    Symbols {
        /// Language tag (python, ts, ...); inferred from the extension otherwise
        #[arg(long)]
        language: Option<String>,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

impl Command {
    fn files(&self) -> &[PathBuf] {
        match self {
            Self::Lex { files, .. } | Self::Answer { files, .. } | Self::Symbols { files, .. } => {
                files
            }
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let files = cli.command.files();

    let keywords = match &cli.command {
        Command::Lex {
            keywords: Some(path),
            ..
        } => match read_keywords(path) {
            Ok(set) => set,
            Err(e @ syntext::Error::Io { .. }) => {
                eprintln!("{e}");
                return ExitCode::from(2);
            }
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                return ExitCode::from(2);
            }
        },
        _ => KeywordSet::default(),
    };

    let mut had_error = false;

    for path in files {
        debug!(path = %path.display(), "processing");
        let content = match read_source(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{e}");
                had_error = true;
                continue;
            }
        };

        if files.len() > 1 {
            println!("==> {} <==", path.display());
        }

        match &cli.command {
            Command::Lex { html: true, .. } => {
                print!("{}", html::file_to_html(&content, &keywords));
            }
            Command::Lex { .. } => print_tokens(&content, &keywords),
            Command::Answer { html: true, .. } => {
                println!("{}", html::answer_to_html(&content));
            }
            Command::Answer { .. } => print_spans(&content),
            Command::Symbols { language, .. } => {
                print_symbols(path, &content, language.as_deref());
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default.into())
                .from_env_lossy(),
        )
        .init();
}

/// `line:col<TAB>kind<TAB>text`, columns counted in characters from 1.
fn print_tokens(content: &str, keywords: &KeywordSet) {
    for line in render_file(content, keywords) {
        let mut col = 1;
        for token in &line.tokens {
            println!("{}:{col}\t{}\t{:?}", line.number, token.kind, token.text);
            col += token.text.chars().count();
        }
    }
}

/// One row per fragment: `span<TAB>class<TAB>text`, blank line between
/// paragraphs.
fn print_spans(content: &str) {
    for (idx, paragraph) in render_answer(content).iter().enumerate() {
        if idx > 0 {
            println!();
        }
        for span in paragraph {
            let kind = span.kind().as_str();
            match span {
                RenderedSpan::Text(frags)
                | RenderedSpan::Bold(frags)
                | RenderedSpan::Italic(frags) => {
                    for frag in frags {
                        let tag = frag.class.map_or(DEFAULT_TAG, |c| c.tag());
                        println!("{kind}\t{tag}\t{:?}", frag.text);
                    }
                }
                RenderedSpan::Code(frags) => {
                    for frag in frags {
                        let tag = frag.class.map_or(DEFAULT_TAG, |c| c.tag());
                        println!("{kind}\t{tag}\t{:?}", frag.text);
                    }
                }
            }
        }
    }
}

fn print_symbols(path: &Path, content: &str, language: Option<&str>) {
    let language = language.map_or_else(|| Language::from_path(path), Language::from_tag);
    for symbol in detect_symbols(content, language) {
        println!("{}\t{}-{}", symbol.name, symbol.start_line, symbol.end_line);
    }
}
