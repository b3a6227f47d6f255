//! Embert CLI - A command-line tool for Ember source files.
//!
//! This is the main entry point for the embert CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use emberc_lex::BlockCommentMode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::OutputFormat;
use commands::{run_check, run_init, run_lex, CheckArgs, InitArgs, LexArgs};
use config::Config;
use error::{EmbertError, Result};

/// Embert - A CLI tool for Ember source files
///
/// Embert prints token streams, checks files for lexical errors and
/// initializes project configuration.
#[derive(Parser, Debug)]
#[command(name = "embert")]
#[command(author = "Ember Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI tool for Ember source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "EMBERT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "EMBERT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "EMBERT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the embert CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of source files
    ///
    /// Writes one token per line as `line:column`, kind and quoted text,
    /// or a JSON array with `--format json`.
    Lex(LexCommand),

    /// Check source files for lexical errors
    ///
    /// Lexes files in parallel and reports every illegal character with
    /// its location. Fails if any file has errors.
    Check(CheckCommand),

    /// Initialize a new embert project
    ///
    /// Writes a default embert.toml and a starter source file in the
    /// specified or current directory.
    Init(InitCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Source files to tokenize
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Skip block comments instead of emitting marker tokens
    #[arg(long)]
    suppress_block_comments: bool,

    /// Fail on the first illegal character
    #[arg(long)]
    deny_illegal: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Number of parallel jobs (default: from config)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    jobs: Option<u16>,

    /// Report format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Skip block comments instead of emitting marker tokens
    #[arg(long)]
    suppress_block_comments: bool,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// Directory to initialize (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing embert.toml
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the embert CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that command output on stdout stays machine
/// readable. `RUST_LOG` overrides the default level.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| EmbertError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Lex(args) => execute_lex(args, verbose, config),
        Commands::Check(args) => execute_check(args, verbose, config),
        Commands::Init(args) => execute_init(args, verbose),
    }
}

/// Apply the `--suppress-block-comments` override to the configured lexer.
fn lexer_config(config: &Config, suppress_block_comments: bool) -> emberc_lex::LexerConfig {
    let lexer = config.lexer.clone();
    if suppress_block_comments {
        lexer.with_block_comments(BlockCommentMode::Suppress)
    } else {
        lexer
    }
}

/// Execute the lex command.
fn execute_lex(args: LexCommand, verbose: bool, config: Config) -> Result<()> {
    let lex_args = LexArgs {
        files: args.files,
        format: args.format.unwrap_or(config.output.format),
        lexer: lexer_config(&config, args.suppress_block_comments),
        deny_illegal: args.deny_illegal,
        verbose,
    };
    run_lex(lex_args)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, verbose: bool, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        files: args.files,
        jobs: args.jobs.map_or(config.check.jobs, usize::from),
        format: args.format.unwrap_or(config.output.format),
        lexer: lexer_config(&config, args.suppress_block_comments),
        verbose,
    };
    run_check(check_args)
}

/// Execute the init command.
fn execute_init(args: InitCommand, verbose: bool) -> Result<()> {
    let init_args = InitArgs {
        verbose,
        force: args.force,
        path: args.path,
    };
    run_init(init_args)
}
