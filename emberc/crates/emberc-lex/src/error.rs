//! Errors for fail-fast tokenization.
//!
//! The lexer itself never fails; it reports problems as `Illegal` tokens and
//! diagnostics. [`crate::tokenize_strict`] converts the first problem into a
//! [`LexError`].

use thiserror::Error;

/// A problem found while tokenizing in strict mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Input that does not start any recognized lexeme
    #[error("illegal character {text:?} at {line}:{column}")]
    IllegalCharacter {
        /// The offending input
        text: String,
        /// Line of the character
        line: u32,
        /// Column of the character
        column: u32,
    },

    /// A suppressed block comment with no closing `*/`
    #[error("unterminated block comment starting at {line}:{column}")]
    UnterminatedBlockComment {
        /// Line of the opening `/*`
        line: u32,
        /// Column of the opening `/*`
        column: u32,
    },
}

impl LexError {
    /// Line where the problem starts
    pub fn line(&self) -> u32 {
        match self {
            LexError::IllegalCharacter { line, .. }
            | LexError::UnterminatedBlockComment { line, .. } => *line,
        }
    }

    /// Column where the problem starts
    pub fn column(&self) -> u32 {
        match self {
            LexError::IllegalCharacter { column, .. }
            | LexError::UnterminatedBlockComment { column, .. } => *column,
        }
    }
}

/// Result type for strict tokenization
pub type LexResult<T> = std::result::Result<T, LexError>;
