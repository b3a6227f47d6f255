//! Operator and punctuation lexing.
//!
//! This module handles lexing of operators, delimiters, and punctuation.
//! Each method starts on the first byte of its lexeme and leaves the cursor
//! one past the last byte.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl Lexer {
    /// Lexes a one-byte token of the given kind.
    pub fn lex_single(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.token(kind)
    }

    /// Lexes assign or equality.
    ///
    /// Handles: `=`, `==`
    pub fn lex_equals(&mut self) -> Token {
        self.lex_with_equals(TokenKind::Assign, TokenKind::EqEq)
    }

    /// Lexes bang or not-equal.
    ///
    /// Handles: `!`, `!=`
    pub fn lex_bang(&mut self) -> Token {
        self.lex_with_equals(TokenKind::Bang, TokenKind::NotEq)
    }

    /// Lexes less-than or less-equal.
    ///
    /// Handles: `<`, `<=`
    pub fn lex_less(&mut self) -> Token {
        self.lex_with_equals(TokenKind::Lt, TokenKind::LtEq)
    }

    /// Lexes greater-than or greater-equal.
    ///
    /// Handles: `>`, `>=`
    pub fn lex_greater(&mut self) -> Token {
        self.lex_with_equals(TokenKind::Gt, TokenKind::GtEq)
    }

    fn lex_with_equals(&mut self, single: TokenKind, double: TokenKind) -> Token {
        self.cursor.advance();
        if self.cursor.match_byte(b'=') {
            self.token(double)
        } else {
            self.token(single)
        }
    }

    /// Lexes star or block comment end.
    ///
    /// Handles: `*`, `*/`
    pub fn lex_star(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_byte(b'/') {
            self.token(TokenKind::BlockCommentEnd)
        } else {
            self.token(TokenKind::Star)
        }
    }

    /// Lexes slash or a comment.
    ///
    /// Handles: `/`, `// ...`, `/* ...`
    pub fn lex_slash(&mut self) -> Token {
        match self.cursor.peek() {
            Some(b'/') => self.lex_line_comment(),
            Some(b'*') => self.lex_block_comment_start(),
            _ => self.lex_single(TokenKind::Slash),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};
    use crate::Lexer;

    fn lex_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            if token.is_eof() {
                return tokens;
            }
            tokens.push(token);
        }
    }

    fn pairs(source: &str) -> Vec<(TokenKind, String)> {
        lex_all(source)
            .into_iter()
            .map(|token| (token.kind(), token.text().to_string()))
            .collect()
    }

    #[test]
    fn test_equals_longest_match() {
        assert_eq!(
            pairs("== ="),
            [
                (TokenKind::EqEq, "==".to_string()),
                (TokenKind::Assign, "=".to_string()),
            ]
        );
    }

    #[test]
    fn test_triple_equals() {
        let kinds: Vec<_> = lex_all("===").iter().map(Token::kind).collect();
        assert_eq!(kinds, [TokenKind::EqEq, TokenKind::Assign]);
    }

    #[test]
    fn test_bang() {
        assert_eq!(
            pairs("!= !"),
            [
                (TokenKind::NotEq, "!=".to_string()),
                (TokenKind::Bang, "!".to_string()),
            ]
        );
    }

    #[test]
    fn test_comparisons() {
        let kinds: Vec<_> = lex_all("< <= > >= <>").iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::Lt,
                TokenKind::LtEq,
                TokenKind::Gt,
                TokenKind::GtEq,
                TokenKind::Lt,
                TokenKind::Gt,
            ]
        );
    }

    #[test]
    fn test_two_byte_position_is_first_byte() {
        let tokens = lex_all("a != b");
        assert_eq!(tokens[1], Token::new(TokenKind::NotEq, "!=", 1, 3));
        assert_eq!(tokens[2].column(), 6);
    }

    #[test]
    fn test_star_and_comment_end() {
        assert_eq!(
            pairs("* */"),
            [
                (TokenKind::Star, "*".to_string()),
                (TokenKind::BlockCommentEnd, "*/".to_string()),
            ]
        );
    }

    #[test]
    fn test_slash_alone() {
        assert_eq!(pairs("a / b")[1], (TokenKind::Slash, "/".to_string()));
        assert_eq!(pairs("/"), [(TokenKind::Slash, "/".to_string())]);
    }

    #[test]
    fn test_operator_at_end_of_input() {
        assert_eq!(pairs("="), [(TokenKind::Assign, "=".to_string())]);
        assert_eq!(
            pairs("x <"),
            [
                (TokenKind::Ident, "x".to_string()),
                (TokenKind::Lt, "<".to_string()),
            ]
        );
    }
}
