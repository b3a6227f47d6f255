//! Common types and utilities for embert commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EmbertError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported formats for command output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

// ============================================================================
// Source Files
// ============================================================================

/// Read an Ember source file.
///
/// Fails with a validation error when the path is missing or is not a
/// regular file, and with a file operation error when it cannot be read
/// as UTF-8 text.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(EmbertError::Validation(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(EmbertError::Validation(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    std::fs::read_to_string(path).map_err(|e| {
        EmbertError::FileOperation(format!("Failed to read {}: {}", path.display(), e))
    })
}

/// Reject an empty list of input files.
pub fn require_files<T>(files: &[T]) -> Result<()> {
    if files.is_empty() {
        return Err(EmbertError::Validation(
            error_messages::NO_INPUT_FILES.to_string(),
        ));
    }
    Ok(())
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file";

    /// Error when target path is not a directory.
    pub const TARGET_NOT_DIR: &str = "Target path is not a directory";

    /// Error when a configuration file is already present.
    pub const CONFIG_EXISTS: &str = "Configuration file already exists (use --force to overwrite)";

    /// Error when files failed to check.
    pub const FILES_FAILED: &str = "file(s) failed lexical checks";
}

// ============================================================================
// Output Messages
// ============================================================================

/// Standard output message prefixes.
pub mod output_messages {
    /// Message when a directory is created.
    pub const CREATED_DIR: &str = "✅ Created directory:";

    /// Message when a file is created.
    pub const CREATED_FILE: &str = "✅ Created file:";

    /// Message when an existing file is left alone.
    pub const SKIPPED_FILE: &str = "ℹ️ Skipped existing file:";
}
