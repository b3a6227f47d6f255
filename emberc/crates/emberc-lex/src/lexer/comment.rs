//! Comment lexing.
//!
//! Line comments always become tokens. Block comments either produce marker
//! tokens or, when suppressed by the configuration, are skipped like
//! whitespace.

use emberc_util::{DiagnosticCode, Span};
use tracing::debug;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl Lexer {
    /// Reads a comment body.
    ///
    /// Starts on the first byte of a two-byte marker and consumes up to, but
    /// not including, the next newline. Returns the text between the marker
    /// and the newline (or end of input).
    pub fn read_comment(&mut self) -> String {
        self.cursor.advance();
        self.cursor.advance();

        let start = self.cursor.position();
        while self.cursor.current_byte().is_some_and(|byte| byte != b'\n') {
            self.cursor.advance();
        }
        self.cursor.slice_from(start).to_owned()
    }

    /// Lexes `// ...` into a line comment token.
    pub fn lex_line_comment(&mut self) -> Token {
        let text = self.read_comment();
        self.token_with_text(TokenKind::LineComment, text)
    }

    /// Lexes `/* ...` into a block comment start marker.
    ///
    /// The marker's text is the rest of its line; anything on later lines is
    /// lexed normally until `*/` produces the end marker.
    pub fn lex_block_comment_start(&mut self) -> Token {
        let text = self.read_comment();
        self.token_with_text(TokenKind::BlockCommentStart, text)
    }

    /// Skips whitespace and, when suppressed, block comments.
    ///
    /// This is called before lexing each token.
    pub fn skip_trivia(&mut self) {
        loop {
            self.cursor.skip_whitespace();

            let at_block_comment =
                self.cursor.current_byte() == Some(b'/') && self.cursor.peek() == Some(b'*');
            if !(at_block_comment && self.config().suppresses_block_comments()) {
                return;
            }
            self.skip_block_comment();
        }
    }

    /// Skips a block comment.
    ///
    /// Comments do not nest; the first `*/` closes the comment. Without one
    /// the rest of the input is consumed and an error is reported at the
    /// opening marker.
    pub fn skip_block_comment(&mut self) {
        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();

        self.cursor.advance();
        self.cursor.advance();

        loop {
            match self.cursor.current_byte() {
                None => break,
                Some(b'*') if self.cursor.peek() == Some(b'/') => {
                    self.cursor.advance();
                    self.cursor.advance();
                    return;
                }
                Some(b'\n') => self.cursor.newline(),
                Some(_) => self.cursor.advance(),
            }
        }

        debug!(line, column, "unterminated block comment");
        self.report_error_at(
            Span::new(start, start + 2, line, column),
            DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
            "unterminated block comment",
        );
    }
}
