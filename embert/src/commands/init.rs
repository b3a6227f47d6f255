//! Init command implementation.
//!
//! This module writes a default `embert.toml` and a starter source file
//! into a project directory.

use std::path::{Path, PathBuf};

use crate::commands::common::{error_messages, output_messages};
use crate::commands::traits::{run_command, Command};
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{EmbertError, Result};

/// Starter program written next to a fresh configuration.
const STARTER_SOURCE: &str = r#"// Entry point
let greet = function(name) {
    return name;
};

let count = 0;
while (count < 3) {
    count = count + 1;
}
"#;

/// Name of the starter source file.
const STARTER_FILE_NAME: &str = "main.em";

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Overwrite an existing configuration file.
    pub force: bool,
    /// Directory to initialize.
    pub path: Option<PathBuf>,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    fn get_target_path(&self) -> PathBuf {
        self.args
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Create the target directory if needed and make sure it is a directory.
    fn prepare_directory(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::create_dir_all(path)?;
            if self.args.verbose {
                eprintln!("{} {}", output_messages::CREATED_DIR, path.display());
            }
            return Ok(());
        }

        if !path.is_dir() {
            return Err(EmbertError::Validation(format!(
                "{}: {}",
                error_messages::TARGET_NOT_DIR,
                path.display()
            )));
        }

        Ok(())
    }

    fn create_config_file(&self, path: &Path) -> Result<PathBuf> {
        let config_path = path.join(CONFIG_FILE_NAME);

        if config_path.exists() && !self.args.force {
            return Err(EmbertError::Validation(format!(
                "{}: {}",
                error_messages::CONFIG_EXISTS,
                config_path.display()
            )));
        }

        Config::default().save_to_path(&config_path)?;

        if self.args.verbose {
            eprintln!("{} {}", output_messages::CREATED_FILE, config_path.display());
        }
        Ok(config_path)
    }

    fn create_starter_source(&self, path: &Path) -> Result<()> {
        let source_path = path.join(STARTER_FILE_NAME);

        if source_path.exists() {
            if self.args.verbose {
                eprintln!("{} {}", output_messages::SKIPPED_FILE, source_path.display());
            }
            return Ok(());
        }

        std::fs::write(&source_path, STARTER_SOURCE)?;
        if self.args.verbose {
            eprintln!("{} {}", output_messages::CREATED_FILE, source_path.display());
        }
        Ok(())
    }
}

impl Command for InitCommand {
    type Args = InitArgs;
    type Output = PathBuf;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    /// Returns the path of the written configuration.
    fn execute(&self) -> Result<Self::Output> {
        let target_path = self.get_target_path();

        self.prepare_directory(&target_path)?;
        let config_path = self.create_config_file(&target_path)?;
        self.create_starter_source(&target_path)?;

        tracing::debug!(path = %config_path.display(), "project initialized");
        Ok(config_path)
    }

    fn name() -> &'static str {
        "init"
    }
}

/// Run the init command.
pub fn run_init(args: InitArgs) -> Result<()> {
    run_command::<InitCommand>(args).map(|_| ())
}
