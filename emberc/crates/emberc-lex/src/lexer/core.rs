//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core methods.

use emberc_util::{DiagnosticCode, Handler, Span};
use tracing::{debug, trace};

use crate::chars::{is_digit, is_letter};
use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for the Ember scripting language.
///
/// The lexer transforms source code text into a stream of tokens. It owns a
/// copy of the source and a [`Handler`] that collects a diagnostic for each
/// illegal lexeme, unless built [`without_diagnostics`](Lexer::without_diagnostics).
/// Lexing never fails: unrecognized input becomes an
/// [`TokenKind::Illegal`] token and scanning continues after it.
///
/// # Example
///
/// ```
/// use emberc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("let x = 5;");
/// assert_eq!(lexer.next_token().kind(), TokenKind::Let);
///
/// let kinds: Vec<_> = lexer.map(|token| token.kind()).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Ident, TokenKind::Assign, TokenKind::Int, TokenKind::Semicolon]
/// );
/// ```
#[derive(Debug)]
pub struct Lexer {
    /// Byte cursor for source traversal.
    pub(crate) cursor: Cursor,

    /// Tokenization options.
    config: LexerConfig,

    /// Collected lexical diagnostics.
    handler: Handler,

    /// Starting position of the current token (byte offset).
    token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl Lexer {
    /// Creates a new lexer with the default configuration.
    pub fn new(source: &str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    /// Creates a new lexer with the given configuration.
    pub fn with_config(source: &str, config: LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            config,
            handler: Handler::new(),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Drops diagnostics instead of collecting them.
    ///
    /// Tokens are unaffected; use this when only the token stream matters.
    ///
    /// # Example
    ///
    /// ```
    /// use emberc_lex::Lexer;
    ///
    /// let mut lexer = Lexer::new("@ # $").without_diagnostics();
    /// assert_eq!(lexer.by_ref().count(), 3);
    /// assert!(!lexer.handler().has_errors());
    /// ```
    pub fn without_diagnostics(mut self) -> Self {
        self.handler = Handler::discarding();
        self
    }

    /// Returns the next token from the source code.
    ///
    /// This is the main entry point for tokenization. It skips whitespace
    /// (and suppressed block comments), then dispatches on the current byte.
    /// Once the input is exhausted every call returns the same `Eof` token.
    pub fn next_token(&mut self) -> Token {
        self.skip_trivia();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let token = match self.cursor.current_byte() {
            None => self.token_with_text(TokenKind::Eof, ""),
            Some(byte) => self.dispatch(byte),
        };

        trace!(
            kind = ?token.kind(),
            line = token.line(),
            column = token.column(),
            "lexed token"
        );
        token
    }

    fn dispatch(&mut self, byte: u8) -> Token {
        match byte {
            b'+' => self.lex_single(TokenKind::Plus),
            b'-' => self.lex_single(TokenKind::Minus),
            b',' => self.lex_single(TokenKind::Comma),
            b';' => self.lex_single(TokenKind::Semicolon),
            b':' => self.lex_single(TokenKind::Colon),
            b'(' => self.lex_single(TokenKind::LParen),
            b')' => self.lex_single(TokenKind::RParen),
            b'{' => self.lex_single(TokenKind::LBrace),
            b'}' => self.lex_single(TokenKind::RBrace),
            b'=' => self.lex_equals(),
            b'!' => self.lex_bang(),
            b'<' => self.lex_less(),
            b'>' => self.lex_greater(),
            b'*' => self.lex_star(),
            b'/' => self.lex_slash(),
            b if is_letter(b) => self.lex_identifier(),
            b if is_digit(b) => self.lex_number(),
            _ => self.lex_illegal(),
        }
    }

    fn lex_illegal(&mut self) -> Token {
        self.cursor.advance_char();
        let token = self.token(TokenKind::Illegal);
        debug!(
            text = token.text(),
            line = token.line(),
            column = token.column(),
            "illegal character"
        );
        if self.handler.is_recording() {
            self.report_error(
                DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
                format!("unexpected character '{}'", token.text()),
            );
        }
        token
    }

    /// Builds a token of `kind` whose text is the source consumed since the
    /// token started.
    pub(crate) fn token(&self, kind: TokenKind) -> Token {
        self.token_with_text(kind, self.cursor.slice_from(self.token_start))
    }

    /// Builds a token of `kind` at the current token start with explicit text.
    pub(crate) fn token_with_text(&self, kind: TokenKind, text: impl Into<String>) -> Token {
        Token::new(kind, text, self.token_start_line, self.token_start_column)
    }

    /// Reports a lexical error covering the current token.
    pub fn report_error(&self, code: DiagnosticCode, message: impl Into<String>) {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        self.report_error_at(span, code, message);
    }

    /// Reports a lexical error at an explicit span.
    pub(crate) fn report_error_at(
        &self,
        span: Span,
        code: DiagnosticCode,
        message: impl Into<String>,
    ) {
        self.handler
            .build_error(span, message)
            .code(code)
            .emit(&self.handler);
    }

    /// Returns the diagnostics handler.
    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Returns the configuration this lexer was built with.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Returns the full source text.
    pub fn source(&self) -> &str {
        self.cursor.source()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based, 0 before the first byte
    /// of a line).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the starting byte offset of the most recent token.
    pub fn token_start(&self) -> usize {
        self.token_start
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
