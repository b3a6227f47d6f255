//! Command trait and common types for the embert CLI.
//!
//! Every subcommand implements [`Command`] and is started through
//! [`run_command`].

use tracing::debug;

use crate::error::Result;

/// Standard command trait that all embert commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command, writing its output.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Build a command from its arguments and execute it.
pub fn run_command<C: Command>(args: C::Args) -> Result<C::Output> {
    debug!(command = C::name(), "running command");
    C::new(args).execute()
}

/// Command execution result with per-file counts.
#[derive(Debug, Clone)]
pub struct CommandResult<T = ()> {
    /// Whether every item succeeded.
    pub success: bool,

    /// The command output data.
    pub data: T,

    /// Number of files processed.
    pub items_processed: usize,

    /// Number of files that failed.
    pub items_failed: usize,

    /// Execution time in milliseconds.
    pub execution_time_ms: u64,
}

impl<T> CommandResult<T> {
    /// Create a new successful command result.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
            items_processed: 0,
            items_failed: 0,
            execution_time_ms: 0,
        }
    }

    /// Set the number of items processed.
    pub fn with_items_processed(mut self, count: usize) -> Self {
        self.items_processed = count;
        self
    }

    /// Set the number of items failed; any failure marks the result unsuccessful.
    pub fn with_items_failed(mut self, count: usize) -> Self {
        self.items_failed = count;
        self.success = count == 0;
        self
    }

    /// Set the execution time.
    pub fn with_execution_time_ms(mut self, time_ms: u64) -> Self {
        self.execution_time_ms = time_ms;
        self
    }
}
