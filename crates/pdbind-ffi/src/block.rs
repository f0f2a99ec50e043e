//! Declaration blocks and block classification.
//!
//! A block is one complete unit handed over by the caller: an enum, a struct,
//! or a flat run of function-pointer table entries. Only the first line is
//! consulted to decide which.

use std::fmt;
use std::ops::Range;

use crate::emit::split_trailing_comment;
use crate::error::{Result, TranslateError};

/// The three recognized block shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `typedef enum` ... `} Name;`
    Enum,
    /// `typedef struct` ..., either opaque on one line or a full definition.
    Struct,
    /// Anything else: independent one-line function-pointer declarations.
    FunctionList,
}

impl BlockKind {
    /// Classify a block by its first line.
    ///
    /// Unrecognized lines are not rejected; they fall through to
    /// [`BlockKind::FunctionList`].
    pub fn of_first_line(line: &str) -> Self {
        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next().map(|t| t.trim_end_matches('{'))) {
            (Some("typedef"), Some("enum")) => BlockKind::Enum,
            (Some("typedef"), Some("struct")) => BlockKind::Struct,
            _ => BlockKind::FunctionList,
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::Enum => write!(f, "enum"),
            BlockKind::Struct => write!(f, "struct"),
            BlockKind::FunctionList => write!(f, "function-list"),
        }
    }
}

/// One declaration block, as an ordered list of raw lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationBlock {
    lines: Vec<String>,
}

impl DeclarationBlock {
    /// Split text into a block, dropping line terminators.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Build a block from individual lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DeclarationBlock {
            lines: lines
                .into_iter()
                .map(|l| {
                    let l: String = l.into();
                    l.trim_end_matches(['\r', '\n']).to_string()
                })
                .collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The introducer line.
    pub fn first_line(&self) -> Result<&str> {
        self.lines
            .first()
            .map(String::as_str)
            .ok_or(TranslateError::EmptyBlock)
    }

    /// Classify this block by its first line.
    pub fn classify(&self) -> Result<BlockKind> {
        Ok(BlockKind::of_first_line(self.first_line()?))
    }

    /// Line indices of the members of a braced definition, excluding the
    /// introducer, a separate opening-brace line, and the closing line.
    ///
    /// When the introducer ends with `{` the members start on the next line;
    /// otherwise the line after the introducer holds the brace and members
    /// start one line later.
    pub fn body(&self, kind: BlockKind) -> Result<Range<usize>> {
        let start = if self.first_line()?.trim_end().ends_with('{') {
            1
        } else {
            2
        };
        let needed = start + 1;
        let found = self.content_len();
        if found < needed {
            return Err(TranslateError::TruncatedBlock {
                kind,
                needed,
                found,
            });
        }
        Ok(start..found - 1)
    }

    /// The last non-blank line of the block.
    pub fn closing_line(&self) -> Result<&str> {
        self.lines[..self.content_len()]
            .last()
            .map(String::as_str)
            .ok_or(TranslateError::EmptyBlock)
    }

    /// Number of lines up to and including the last non-blank one.
    fn content_len(&self) -> usize {
        self.lines
            .iter()
            .rposition(|l| !l.trim().is_empty())
            .map_or(0, |i| i + 1)
    }
}

/// Extract the typedef name from a closing line such as `} PDRect;` or
/// `} /* FileOptions */`.
///
/// An inline name before the terminator wins over a comment-wrapped one.
pub fn closing_tag(line: &str) -> Result<&str> {
    let (code, comment) = split_trailing_comment(line);
    let after_brace = code.split_once('}').map_or(code, |(_, rest)| rest);
    let inline = after_brace
        .split(';')
        .next()
        .and_then(|s| s.split_whitespace().last());

    match inline.or(comment.filter(|c| !c.is_empty())) {
        Some(tag) => Ok(tag),
        None => Err(TranslateError::MissingTag {
            line: line.to_string(),
        }),
    }
}
