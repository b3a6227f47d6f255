//! emberc-util - Core utilities shared by the Ember toolchain.
//!
//! This crate provides the foundation types that the lexer and the `embert`
//! tool agree on:
//!
//! - [`span`] - Source locations (byte offsets plus line/column)
//! - [`diagnostic`] - Error and warning reporting infrastructure
//!
//! # Example
//!
//! ```
//! use emberc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '@'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use span::Span;
