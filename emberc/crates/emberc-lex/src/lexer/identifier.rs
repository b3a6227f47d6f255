//! Identifier and keyword lexing.

use crate::chars::is_letter;
use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Lexer;

impl Lexer {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes the full run of letters and underscores, then looks the
    /// text up in the keyword table.
    pub fn lex_identifier(&mut self) -> Token {
        while self.cursor.current_byte().is_some_and(is_letter) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start());
        let kind = keyword_from_ident(text).unwrap_or(TokenKind::Ident);
        self.token(kind)
    }
}
