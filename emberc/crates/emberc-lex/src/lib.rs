//! emberc-lex - Lexical Analyzer for the Ember Scripting Language
//!
//! This crate provides the lexer (tokenizer) for Ember, a small C-like
//! scripting language. It turns source text into a flat stream of
//! classified tokens for a downstream parser.
//!
//! # Example Usage
//!
//! ```
//! use emberc_lex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("let x = 42;");
//!
//! let token = lexer.next_token();
//! assert_eq!(token.kind(), TokenKind::Let);
//! assert_eq!((token.line(), token.column()), (1, 1));
//!
//! // The rest of the stream, without the final Eof
//! for token in &mut lexer {
//!     println!("{}", token);
//! }
//! assert!(lexer.next_token().is_eof());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions and the keyword table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Byte cursor for source traversal
//! - [`chars`] - Byte classification
//! - [`config`] - Lexer options
//! - [`error`] - Errors for strict tokenization
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `function`, `let`, `return`, `if`, `else`, `for`, `while`, plus the
//! boolean literals `true` and `false`.
//!
//! ## Identifiers
//!
//! Pattern: `[A-Za-z_]+`. Digits are not part of identifiers.
//!
//! ## Literals
//!
//! - **Integer**: `42`
//! - **Real**: `3.14` (a `.` must be followed by a digit)
//! - **Boolean**: `true`, `false`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Other**: `=`, `!`
//!
//! ## Delimiters
//!
//! `(`, `)`, `{`, `}`, `,`, `;`, `:`
//!
//! ## Comments
//!
//! - `// text` becomes a line comment token carrying `text`
//! - `/*` and `*/` become marker tokens, unless block comments are
//!   suppressed through [`LexerConfig`]
//!
//! ## Special
//!
//! - **Eof**: End of input, returned on every call once input is exhausted
//! - **Illegal**: Unrecognized input, also recorded as an error diagnostic

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use config::{BlockCommentMode, LexerConfig};
pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token, TokenKind};

use emberc_util::DiagnosticCode;

/// Tokenizes `source` with the default configuration.
///
/// The returned vector always ends with exactly one `Eof` token.
///
/// # Example
///
/// ```
/// use emberc_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("@");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].kind(), TokenKind::Illegal);
/// assert!(tokens[1].is_eof());
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with(source, &LexerConfig::default())
}

/// Tokenizes `source` with the given configuration.
///
/// Illegal lexemes stay in the returned stream; no diagnostics are kept.
pub fn tokenize_with(source: &str, config: &LexerConfig) -> Vec<Token> {
    let mut lexer = Lexer::with_config(source, config.clone()).without_diagnostics();
    collect_tokens(&mut lexer)
}

/// Tokenizes `source`, failing on the first problem.
///
/// Returns [`LexError::IllegalCharacter`] for the first illegal lexeme, or
/// [`LexError::UnterminatedBlockComment`] when a suppressed block comment
/// never closes.
///
/// # Example
///
/// ```
/// use emberc_lex::{tokenize_strict, LexError, LexerConfig};
///
/// let err = tokenize_strict("let $x", &LexerConfig::default()).unwrap_err();
/// assert!(matches!(err, LexError::IllegalCharacter { line: 1, column: 5, .. }));
/// ```
pub fn tokenize_strict(source: &str, config: &LexerConfig) -> LexResult<Vec<Token>> {
    let mut lexer = Lexer::with_config(source, config.clone());
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        match token.kind() {
            TokenKind::Illegal => {
                let (line, column) = (token.line(), token.column());
                return Err(LexError::IllegalCharacter {
                    text: token.into_text(),
                    line,
                    column,
                });
            }
            TokenKind::Eof => {
                tokens.push(token);
                break;
            }
            _ => tokens.push(token),
        }
    }

    let unterminated = lexer
        .handler()
        .diagnostics()
        .into_iter()
        .find(|diag| diag.code == Some(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT));
    if let Some(diag) = unterminated {
        return Err(LexError::UnterminatedBlockComment {
            line: diag.span.line,
            column: diag.span.column,
        });
    }

    Ok(tokens)
}

fn collect_tokens(lexer: &mut Lexer) -> Vec<Token> {
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).iter().map(Token::kind).collect()
    }

    #[test]
    fn test_small_program() {
        let source = r#"
            let add = function(a, b) {
                return a + b;
            };

            let result = add(5, 10);
            if (result >= 15) {
                return true;
            } else {
                return false;
            }
        "#;
        let tokens = tokenize(source);

        assert!(tokens.iter().any(|t| t.kind() == TokenKind::Function));
        assert!(tokens.iter().any(|t| t.kind() == TokenKind::GtEq));
        assert!(tokens.iter().any(|t| t.kind() == TokenKind::True));
        assert!(tokens.iter().any(|t| t.kind() == TokenKind::Else));
        assert!(tokens.iter().all(|t| t.kind() != TokenKind::Illegal));
        assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
    }

    #[test]
    fn test_loops_and_comments() {
        let source = "// count down\nwhile (n != 0) { n = n - 1; }\nfor (i) {}";
        assert_eq!(
            kinds(source),
            [
                TokenKind::LineComment,
                TokenKind::While,
                TokenKind::LParen,
                TokenKind::Ident,
                TokenKind::NotEq,
                TokenKind::Int,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::Ident,
                TokenKind::Assign,
                TokenKind::Ident,
                TokenKind::Minus,
                TokenKind::Int,
                TokenKind::Semicolon,
                TokenKind::RBrace,
                TokenKind::For,
                TokenKind::LParen,
                TokenKind::Ident,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_empty_source_is_single_eof() {
        assert_eq!(tokenize(""), [Token::new(TokenKind::Eof, "", 1, 0)]);
    }

    #[test]
    fn test_tokenize_with_suppression() {
        let config = LexerConfig::new().with_block_comments(BlockCommentMode::Suppress);
        let tokens = tokenize_with("a /* b */ c", &config);
        let texts: Vec<_> = tokens.iter().map(Token::text).collect();
        assert_eq!(texts, ["a", "c", ""]);
    }

    #[test]
    fn test_strict_accepts_clean_input() {
        let tokens = tokenize_strict("let x = 1.5;", &LexerConfig::default()).unwrap();
        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[3].kind(), TokenKind::Real);
    }

    #[test]
    fn test_strict_rejects_illegal() {
        let err = tokenize_strict("a\n  #", &LexerConfig::default()).unwrap_err();
        assert_eq!(
            err,
            LexError::IllegalCharacter {
                text: "#".to_string(),
                line: 2,
                column: 3,
            }
        );
    }

    #[test]
    fn test_strict_rejects_unterminated_comment() {
        let config = LexerConfig::new().with_block_comments(BlockCommentMode::Suppress);
        let err = tokenize_strict("x\n /* open", &config).unwrap_err();
        assert_eq!(err, LexError::UnterminatedBlockComment { line: 2, column: 2 });
    }

    #[test]
    fn test_strict_allows_unterminated_markers() {
        let tokens = tokenize_strict("/* open", &LexerConfig::default()).unwrap();
        assert_eq!(tokens[0].kind(), TokenKind::BlockCommentStart);
    }
}
