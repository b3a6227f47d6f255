//! Check command implementation.
//!
//! Lexes a set of source files in parallel, one lexer per file, and reports
//! every diagnostic with the offending source line.

use std::path::{Path, PathBuf};
use std::time::Instant;

use emberc_lex::{Lexer, LexerConfig};
use emberc_util::Diagnostic;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::commands::common::{error_messages, read_source, require_files, OutputFormat};
use crate::commands::traits::{run_command, Command, CommandResult};
use crate::error::{EmbertError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Source files to check.
    pub files: Vec<PathBuf>,
    /// Number of files lexed in parallel.
    pub jobs: usize,
    /// Report format.
    pub format: OutputFormat,
    /// Lexer options.
    pub lexer: LexerConfig,
    /// Enable verbose output.
    pub verbose: bool,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            jobs: 1,
            format: OutputFormat::Text,
            lexer: LexerConfig::default(),
            verbose: false,
        }
    }
}

/// Lexing outcome for a single file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path to the source file.
    pub file: String,
    /// Number of tokens produced, excluding the end of input.
    pub tokens: usize,
    /// Diagnostics reported by the lexer.
    pub diagnostics: Vec<Diagnostic>,
    #[serde(skip)]
    source: String,
}

impl FileReport {
    /// Check if the file has any errors.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Render every diagnostic against the file's source.
    pub fn render(&self) -> String {
        self.diagnostics
            .iter()
            .map(|diag| diag.render(&self.file, &self.source))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Lex every file and collect the reports, in input order.
    pub fn check_files(&self) -> Result<CommandResult<Vec<FileReport>>> {
        require_files(&self.args.files)?;
        let start_time = Instant::now();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.args.jobs.max(1))
            .build()
            .map_err(|e| {
                EmbertError::CommandExecution(format!("Failed to build thread pool: {}", e))
            })?;

        let reports = pool.install(|| {
            self.args
                .files
                .par_iter()
                .map(|path| check_file(path, &self.args.lexer))
                .collect::<Result<Vec<_>>>()
        })?;

        let failed = reports.iter().filter(|report| report.has_errors()).count();
        let elapsed_ms = u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX);

        Ok(CommandResult::success(reports)
            .with_items_processed(self.args.files.len())
            .with_items_failed(failed)
            .with_execution_time_ms(elapsed_ms))
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CommandResult<Vec<FileReport>>;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    /// Prints the reports and fails if any file has errors.
    fn execute(&self) -> Result<Self::Output> {
        let result = self.check_files()?;

        match self.args.format {
            OutputFormat::Text => {
                for report in result.data.iter().filter(|report| report.has_errors()) {
                    eprintln!("{}\n", report.render());
                }
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result.data)?),
        }

        if self.args.verbose {
            eprintln!(
                "ℹ️ Checked {} file(s) in {}ms: {} failed",
                result.items_processed, result.execution_time_ms, result.items_failed
            );
        }

        if !result.success {
            return Err(EmbertError::Validation(format!(
                "{} {}",
                result.items_failed,
                error_messages::FILES_FAILED
            )));
        }
        Ok(result)
    }

    fn name() -> &'static str {
        "check"
    }
}

fn check_file(path: &Path, config: &LexerConfig) -> Result<FileReport> {
    let source = read_source(path)?;
    let mut lexer = Lexer::with_config(&source, config.clone());
    let tokens = lexer.by_ref().count();
    let diagnostics = lexer.handler().take_diagnostics();

    if diagnostics.is_empty() {
        debug!(file = %path.display(), tokens, "file is clean");
    } else {
        warn!(file = %path.display(), errors = diagnostics.len(), "lexical errors");
    }

    Ok(FileReport {
        file: path.display().to_string(),
        tokens,
        diagnostics,
        source,
    })
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<()> {
    run_command::<CheckCommand>(args).map(|_| ())
}
