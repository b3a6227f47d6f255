//! Lexer configuration.

use serde::{Deserialize, Serialize};

/// How `/* ... */` comments are lexed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockCommentMode {
    /// Emit `BlockCommentStart` and `BlockCommentEnd` marker tokens and lex
    /// everything between them as ordinary tokens.
    #[default]
    Markers,
    /// Skip the whole comment as whitespace. Comments do not nest.
    Suppress,
}

/// Options that change how source is tokenized.
///
/// # Example
///
/// ```
/// use emberc_lex::{BlockCommentMode, LexerConfig};
///
/// let config = LexerConfig::new().with_block_comments(BlockCommentMode::Suppress);
/// assert!(config.suppresses_block_comments());
/// assert!(!LexerConfig::default().suppresses_block_comments());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexerConfig {
    /// Block comment handling
    #[serde(default)]
    pub block_comments: BlockCommentMode,
}

impl LexerConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the block comment mode
    pub fn with_block_comments(mut self, mode: BlockCommentMode) -> Self {
        self.block_comments = mode;
        self
    }

    /// Returns true if block comments are skipped as trivia
    pub fn suppresses_block_comments(&self) -> bool {
        self.block_comments == BlockCommentMode::Suppress
    }
}
