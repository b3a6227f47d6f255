//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Integer and real literal lexing
//! - `operator` - Operator and punctuation lexing
//! - `comment` - Comment reading and block comment suppression

mod comment;
mod core;
mod identifier;
mod number;
mod operator;

pub use core::Lexer;
