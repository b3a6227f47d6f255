//! Integer and real literal lexing.

use crate::chars::is_digit;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl Lexer {
    /// Lexes an integer or real literal.
    ///
    /// A `.` belongs to the literal only when a digit follows it, so `3.`
    /// is an integer followed by `.` and `1.2.3` stops after `1.2`.
    pub fn lex_number(&mut self) -> Token {
        self.eat_digits();

        if self.cursor.current_byte() == Some(b'.') && self.cursor.peek().is_some_and(is_digit) {
            self.cursor.advance();
            self.eat_digits();
        }

        let text = self.cursor.slice_from(self.token_start());
        let kind = if text.contains('.') {
            TokenKind::Real
        } else {
            TokenKind::Int
        };
        self.token(kind)
    }

    fn eat_digits(&mut self) {
        while self.cursor.current_byte().is_some_and(is_digit) {
            self.cursor.advance();
        }
    }
}
