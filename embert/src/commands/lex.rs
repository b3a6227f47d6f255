//! Lex command implementation.
//!
//! Prints the token stream of one or more Ember source files, either as
//! tab-separated text or as JSON.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use emberc_lex::{tokenize_strict, tokenize_with, LexerConfig, Token};
use serde::Serialize;
use tracing::debug;

use crate::commands::common::{read_source, require_files, OutputFormat};
use crate::commands::traits::{run_command, Command};
use crate::error::Result;

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Source files to tokenize.
    pub files: Vec<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Lexer options.
    pub lexer: LexerConfig,
    /// Fail on the first illegal character instead of printing it.
    pub deny_illegal: bool,
    /// Enable verbose output.
    pub verbose: bool,
}

/// Tokens of one file, as written in JSON output.
#[derive(Debug, Serialize)]
struct FileTokens {
    file: String,
    tokens: Vec<Token>,
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
}

impl LexCommand {
    /// Tokenize every file and render the output.
    pub fn render(&self) -> Result<String> {
        require_files(&self.args.files)?;

        let mut files = Vec::with_capacity(self.args.files.len());
        for path in &self.args.files {
            let tokens = self.lex_file(path)?;
            files.push(FileTokens {
                file: path.display().to_string(),
                tokens,
            });
        }

        match self.args.format {
            OutputFormat::Text => Ok(Self::render_text(&files)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&files)?),
        }
    }

    fn lex_file(&self, path: &Path) -> Result<Vec<Token>> {
        let source = read_source(path)?;
        let tokens = if self.args.deny_illegal {
            tokenize_strict(&source, &self.args.lexer)?
        } else {
            tokenize_with(&source, &self.args.lexer)
        };

        debug!(file = %path.display(), tokens = tokens.len(), "tokenized file");
        if self.args.verbose {
            eprintln!("ℹ️ {}: {} token(s)", path.display(), tokens.len());
        }
        Ok(tokens)
    }

    fn render_text(files: &[FileTokens]) -> String {
        let mut out = String::new();
        let with_headers = files.len() > 1;

        for (index, file) in files.iter().enumerate() {
            if with_headers {
                if index > 0 {
                    out.push('\n');
                }
                let _ = writeln!(out, "==> {} <==", file.file);
            }
            for token in &file.tokens {
                let _ = writeln!(out, "{}", format_token(token));
            }
        }

        out.truncate(out.trim_end_matches('\n').len());
        out
    }
}

/// Format a token as `line:column<TAB>Kind<TAB>"text"`.
pub fn format_token(token: &Token) -> String {
    format!(
        "{}:{}\t{:?}\t{:?}",
        token.line(),
        token.column(),
        token.kind(),
        token.text()
    )
}

impl Command for LexCommand {
    type Args = LexArgs;
    type Output = ();

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    /// Writes the rendered tokens to stdout.
    fn execute(&self) -> Result<Self::Output> {
        let output = self.render()?;
        println!("{}", output);
        Ok(())
    }

    fn name() -> &'static str {
        "lex"
    }
}

/// Run the lex command.
pub fn run_lex(args: LexArgs) -> Result<()> {
    run_command::<LexCommand>(args)
}
