//! Token type definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact text it was lexed from
//! and the line/column of its first byte.

use serde::Serialize;
use std::fmt;

/// The lexical category of a token.
///
/// Every kind is a distinct variant; comparisons never depend on the
/// display text returned by [`TokenKind::as_str`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Input that does not start any recognized lexeme
    Illegal,
    /// End of input
    Eof,

    // Identifiers and literals
    /// Identifier (`[A-Za-z_]+`)
    Ident,
    /// Integer literal (`42`)
    Int,
    /// Real literal (`3.14`)
    Real,
    /// `true`
    True,
    /// `false`
    False,

    // Operators
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Bang,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,

    // Delimiters
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,

    // Keywords
    /// `function`
    Function,
    /// `let`
    Let,
    /// `return`
    Return,
    /// `if`
    If,
    /// `else`
    Else,
    /// `for`
    For,
    /// `while`
    While,

    // Comments
    /// `// ...`, text is the comment body
    LineComment,
    /// `/* ...`, text is the rest of the marker's line
    BlockCommentStart,
    /// `*/`
    BlockCommentEnd,
}

impl TokenKind {
    /// Returns the display text for this kind.
    ///
    /// # Example
    ///
    /// ```
    /// use emberc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::EqEq.as_str(), "==");
    /// assert_eq!(TokenKind::RParen.as_str(), ")");
    /// assert_eq!(TokenKind::Ident.as_str(), "IDENT");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Real => "REAL",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::Return => "RETURN",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::For => "FOR",
            TokenKind::While => "WHILE",
            TokenKind::LineComment => "//",
            TokenKind::BlockCommentStart => "/*",
            TokenKind::BlockCommentEnd => "*/",
        }
    }

    /// Returns true for reserved words other than the boolean literals.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::Return
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::For
                | TokenKind::While
        )
    }

    /// Returns true for numeric and boolean literals.
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Int | TokenKind::Real | TokenKind::True | TokenKind::False
        )
    }

    /// Returns true for line comments and block comment markers.
    pub const fn is_comment(self) -> bool {
        matches!(
            self,
            TokenKind::LineComment | TokenKind::BlockCommentStart | TokenKind::BlockCommentEnd
        )
    }

    /// Returns true for arithmetic, assignment and comparison operators.
    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Bang
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::EqEq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::LtEq
                | TokenKind::GtEq
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Looks up the reserved word spelled by `ident`.
///
/// Returns `None` for ordinary identifiers. The match is exact, so
/// `truest` and `Let` are identifiers.
///
/// # Example
///
/// ```
/// use emberc_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("while"), Some(TokenKind::While));
/// assert_eq!(keyword_from_ident("true"), Some(TokenKind::True));
/// assert_eq!(keyword_from_ident("truest"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    let kind = match ident {
        "function" => TokenKind::Function,
        "let" => TokenKind::Let,
        "return" => TokenKind::Return,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "for" => TokenKind::For,
        "while" => TokenKind::While,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        _ => return None,
    };
    Some(kind)
}

/// A lexed token.
///
/// The text is owned by the token and is independent of the lexer's
/// buffer. It is the exact lexeme, except for comments (the body without
/// the marker) and [`TokenKind::Eof`] (empty).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    kind: TokenKind,
    text: String,
    line: u32,
    column: u32,
}

impl Token {
    /// Creates a token of `kind` starting at `line`/`column`.
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// The token's lexical category.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The token's text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The 1-based line of the token's first byte.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The 1-based column of the token's first byte.
    ///
    /// `Eof` reports the final cursor position, which is column 0 for empty
    /// input or input ending in a newline.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns true if this is the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Consumes the token, returning its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {:?} at {}:{}",
            self.kind, self.text, self.line, self.column
        )
    }
}
