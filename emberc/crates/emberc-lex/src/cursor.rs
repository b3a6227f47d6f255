//! Byte cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while walking the source buffer one byte at a time. It tracks line and
//! column information for token positions and error reporting.

use crate::chars::is_whitespace;

/// A cursor over an owned copy of the source text.
///
/// The cursor exposes the byte under it, a one-byte lookahead, and the
/// running line/column counters. Reaching the end of the buffer is
/// represented by `None` rather than a sentinel byte, so a NUL in the input
/// is ordinary (illegal) content.
///
/// Lines and columns are 1-based. Columns count bytes; they are reset at
/// every newline so the first byte of each line is column 1. Stepping off
/// the last byte does not move the column, so the end position reports the
/// column of the last byte (0 after a trailing newline or for empty input).
///
/// # Example
///
/// ```
/// use emberc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x = 42;");
///
/// assert_eq!(cursor.current_byte(), Some(b'l'));
/// cursor.advance();
/// assert_eq!(cursor.current_byte(), Some(b'e'));
/// assert_eq!(cursor.peek(), Some(b't'));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor {
    /// The source text being traversed.
    source: String,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Column of the byte under the cursor (1-based, in bytes).
    column: u32,
}

impl Cursor {
    /// Creates a new cursor positioned on the first byte of `source`.
    ///
    /// # Example
    ///
    /// ```
    /// use emberc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.line(), 1);
    /// assert_eq!(cursor.column(), 1);
    /// assert_eq!(Cursor::new("").column(), 0);
    /// ```
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_owned(),
            position: 0,
            line: 1,
            column: u32::from(!source.is_empty()),
        }
    }

    /// Returns the byte under the cursor, or `None` at the end of input.
    #[inline]
    pub fn current_byte(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// Returns the byte one past the cursor without consuming anything.
    ///
    /// # Example
    ///
    /// ```
    /// use emberc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("==");
    /// assert_eq!(cursor.peek(), Some(b'='));
    /// assert_eq!(Cursor::new("=").peek(), None);
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(1)
    }

    /// Returns the byte `offset` bytes past the cursor, `None` out of bounds.
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.source.as_bytes().get(self.position + offset).copied()
    }

    /// Advances the cursor by one byte.
    ///
    /// Increments the column when another byte follows. Stepping off the
    /// last byte moves onto the end position and leaves the column alone;
    /// once there, this does nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use emberc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("ab");
    /// cursor.advance();
    /// assert_eq!(cursor.column(), 2);
    ///
    /// cursor.advance();
    /// assert!(cursor.is_at_end());
    /// assert_eq!(cursor.column(), 2);
    /// ```
    #[inline]
    pub fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }
        self.position += 1;
        if !self.is_at_end() {
            self.column += 1;
        }
    }

    /// Advances past the whole UTF-8 character under the cursor.
    ///
    /// Used for input the lexer does not recognize so that the consumed text
    /// is always valid UTF-8. The column moves by the character's byte width.
    ///
    /// # Example
    ///
    /// ```
    /// use emberc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("é!");
    /// cursor.advance_char();
    /// assert_eq!(cursor.position(), 2);
    /// assert_eq!(cursor.current_byte(), Some(b'!'));
    /// ```
    pub fn advance_char(&mut self) {
        let width = self.remaining().chars().next().map_or(0, char::len_utf8);
        for _ in 0..width {
            self.advance();
        }
    }

    /// Consumes a newline: bumps the line and restarts the column.
    ///
    /// The caller must be positioned on `\n`.
    #[inline]
    pub fn newline(&mut self) {
        debug_assert_eq!(self.current_byte(), Some(b'\n'));
        self.line += 1;
        self.column = 0;
        self.advance();
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes the current byte if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use emberc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>");
    /// assert!(cursor.match_byte(b'='));
    /// assert!(!cursor.match_byte(b'='));
    /// assert_eq!(cursor.current_byte(), Some(b'>'));
    /// ```
    pub fn match_byte(&mut self, expected: u8) -> bool {
        if self.current_byte() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips spaces, tabs, carriage returns and newlines.
    ///
    /// It does NOT skip comments.
    ///
    /// # Example
    ///
    /// ```
    /// use emberc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("  \t\nlet");
    /// cursor.skip_whitespace();
    /// assert_eq!(cursor.current_byte(), Some(b'l'));
    /// assert_eq!(cursor.line(), 2);
    /// assert_eq!(cursor.column(), 1);
    /// ```
    pub fn skip_whitespace(&mut self) {
        while let Some(byte) = self.current_byte() {
            if !is_whitespace(byte) {
                break;
            }
            if byte == b'\n' {
                self.newline();
            } else {
                self.advance();
            }
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the column of the byte under the cursor, or of the last byte
    /// once the end is reached.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text from `start` up to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use emberc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("let x");
    /// let start = cursor.position();
    /// for _ in 0..3 {
    ///     cursor.advance();
    /// }
    /// assert_eq!(cursor.slice_from(start), "let");
    /// ```
    pub fn slice_from(&self, start: usize) -> &str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &str {
        &self.source
    }
}
