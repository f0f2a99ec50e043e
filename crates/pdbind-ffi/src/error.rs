//! Translation error types.

use crate::block::BlockKind;

/// Errors that can occur while translating a declaration block.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// The block has no lines at all.
    #[error("empty declaration block")]
    EmptyBlock,

    /// The block ends before the lines its kind requires.
    #[error("{kind} block too short: needs at least {needed} lines, found {found}")]
    TruncatedBlock {
        kind: BlockKind,
        needed: usize,
        found: usize,
    },

    /// A closing line carries no recognizable tag name.
    #[error("no tag name in closing line '{line}'")]
    MissingTag { line: String },

    /// A type expression is empty once whitespace and pointer markers are removed.
    #[error("empty type expression in '{line}'")]
    EmptyType { line: String },

    /// A member line has no identifier.
    #[error("missing name in '{line}'")]
    EmptyName { line: String },

    /// A struct member line cannot be split into a type and a name.
    #[error("malformed struct member '{line}'")]
    MalformedField { line: String },

    /// A rename table maps a name onto another key of the same table.
    #[error("{table} table: '{key}' maps to '{value}', which is itself renamed")]
    ChainedRename {
        table: &'static str,
        key: String,
        value: String,
    },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for translation operations.
pub type Result<T> = std::result::Result<T, TranslateError>;
