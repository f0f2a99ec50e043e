//! Enum block emitter.
//!
//! Nelua rejects an empty `@enum`, and the SDK's constant values are defined
//! in C, so the enum type itself only carries a zero-valued sentinel. Each
//! real constant becomes a namespaced global bound to its C symbol.

use std::fmt;

use tracing::{debug, trace};

use crate::block::{closing_tag, BlockKind, DeclarationBlock};
use crate::ctype::TypeName;
use crate::emit::{
    cimport_annotations, comment_text, split_trailing_comment, COMMENT_MARKER, INDENT,
};
use crate::error::{Result, TranslateError};
use crate::tables::RenameTables;

/// Name of the injected zero-valued member.
pub const SENTINEL_NAME: &str = "_";

/// One enum constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    /// Name inside the enum's namespace, after constant renaming.
    pub exposed: String,
    /// The C symbol the member binds to.
    pub foreign: String,
}

/// A line of the enum body: a constant or a pass-through comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumEntry {
    Member(EnumMember),
    Comment(String),
}

/// A parsed enum block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDecl {
    /// Emitted type name.
    pub name: String,
    /// Typedef name as written in C.
    pub tag: String,
    pub entries: Vec<EnumEntry>,
}

impl EnumDecl {
    /// Parse an enum block.
    pub fn parse(block: &DeclarationBlock, tables: &RenameTables) -> Result<Self> {
        let body = block.body(BlockKind::Enum)?;
        let tag = closing_tag(block.closing_line()?)?.to_string();
        let name = TypeName::normalize(&tag, tables)?.to_string();
        debug!(%tag, %name, "emitting enum");

        let mut entries = Vec::new();
        for line in &block.lines()[body] {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(text) = comment_text(line) {
                entries.push(EnumEntry::Comment(text.to_string()));
                continue;
            }
            let foreign = member_symbol(line)?;
            let exposed = tables.rename_constant(foreign).to_string();
            trace!(foreign, %exposed, "enum member");
            entries.push(EnumEntry::Member(EnumMember {
                exposed,
                foreign: foreign.to_string(),
            }));
        }

        Ok(EnumDecl { name, tag, entries })
    }

    pub fn members(&self) -> impl Iterator<Item = &EnumMember> {
        self.entries.iter().filter_map(|e| match e {
            EnumEntry::Member(m) => Some(m),
            EnumEntry::Comment(_) => None,
        })
    }

    /// Render as Nelua lines.
    pub fn to_lines(&self) -> Vec<String> {
        let mut out = vec![
            format!(
                "global {}: type {} = @enum(cint){{",
                self.name,
                cimport_annotations(&self.name, &self.tag, &[])
            ),
            format!("{INDENT}{SENTINEL_NAME} = 0, -- workaround: nelua does not allow empty enums"),
            "}".to_string(),
        ];
        for entry in &self.entries {
            match entry {
                EnumEntry::Member(m) => out.push(format!(
                    "global {}.{}: {} <cimport'{}', nodecl, const>",
                    self.name, m.exposed, self.name, m.foreign
                )),
                EnumEntry::Comment(text) => out.push(format!("{COMMENT_MARKER} {text}")),
            }
        }
        out
    }
}

impl fmt::Display for EnumDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.to_lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// The constant identifier of a member line, with any initializer,
/// separator, and trailing comment removed.
fn member_symbol(line: &str) -> Result<&str> {
    let (code, _) = split_trailing_comment(line);
    let symbol = code
        .split(['=', ','])
        .next()
        .map(str::trim)
        .unwrap_or_default();
    if symbol.is_empty() {
        return Err(TranslateError::EmptyName {
            line: line.to_string(),
        });
    }
    Ok(symbol)
}
