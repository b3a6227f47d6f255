//! Error handling module for the embert CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use emberc_lex::LexError;
use thiserror::Error;

/// Main error type for the embert CLI application.
///
/// This enum represents all possible errors that can occur
/// during the execution of embert commands.
#[derive(Error, Debug)]
pub enum EmbertError {
    /// Error when a configuration file cannot be found or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a command cannot run to completion.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when strict lexing rejects the input.
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),
}

/// Result type alias using EmbertError.
pub type Result<T> = std::result::Result<T, EmbertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = EmbertError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_validation_error_display() {
        let err = EmbertError::Validation("2 file(s) failed".to_string());
        assert_eq!(err.to_string(), "Validation error: 2 file(s) failed");
    }

    #[test]
    fn test_command_execution_error_display() {
        let err = EmbertError::CommandExecution("no thread pool".to_string());
        assert_eq!(err.to_string(), "Command execution failed: no thread pool");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: EmbertError = io_err.into();
        assert!(matches!(err, EmbertError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: EmbertError = json_err.into();
        assert!(matches!(err, EmbertError::Json(_)));
    }

    #[test]
    fn test_lex_error_conversion() {
        let lex_err = LexError::IllegalCharacter {
            text: "@".to_string(),
            line: 1,
            column: 2,
        };
        let err: EmbertError = lex_err.into();
        assert_eq!(err.to_string(), "Lex error: illegal character \"@\" at 1:2");
    }
}
