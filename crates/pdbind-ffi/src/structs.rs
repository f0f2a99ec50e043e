//! Struct block emitter.
//!
//! Opaque forward declarations become empty `@record{}` types; full
//! definitions become records with one field per member line.

use std::fmt;

use tracing::{debug, trace};

use crate::block::{closing_tag, BlockKind, DeclarationBlock};
use crate::ctype::{migrate_pointer_markers, TypeName};
use crate::emit::{
    cimport_annotations, comment_line, comment_text, split_trailing_comment, trailing_comment,
    INDENT,
};
use crate::error::{Result, TranslateError};
use crate::tables::RenameTables;

/// One line of a struct body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructField {
    /// A typed member.
    Field {
        name: String,
        ty: TypeName,
        comment: Option<String>,
    },
    /// A standalone comment line.
    Comment(String),
    Blank,
}

impl StructField {
    /// Parse one member line.
    pub fn parse(line: &str, tables: &RenameTables) -> Result<Self> {
        if line.trim().is_empty() {
            return Ok(StructField::Blank);
        }
        if let Some(text) = comment_text(line) {
            return Ok(StructField::Comment(text.to_string()));
        }

        let (code, comment) = split_trailing_comment(line);
        let code = code.trim();
        // Rightmost split: the type may itself contain spaces ("const char").
        let (ty, name) = code
            .rsplit_once(char::is_whitespace)
            .ok_or_else(|| TranslateError::MalformedField {
                line: line.to_string(),
            })?;
        let name = name.trim_end_matches(';').trim();
        let (ty, name) = migrate_pointer_markers(ty, name);
        if name.is_empty() {
            return Err(TranslateError::EmptyName {
                line: line.to_string(),
            });
        }
        let ty = TypeName::normalize(&ty, tables)?;
        trace!(%name, %ty, "struct field");

        Ok(StructField::Field {
            name,
            ty,
            comment: comment.filter(|c| !c.is_empty()).map(str::to_string),
        })
    }

    fn to_line(&self) -> String {
        match self {
            StructField::Field { name, ty, comment } => {
                format!("{INDENT}{name}: {ty},{}", trailing_comment(comment.as_deref()))
            }
            StructField::Comment(text) => comment_line(text),
            StructField::Blank => String::new(),
        }
    }
}

/// A parsed struct block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructDecl {
    /// `typedef struct Tag Tag;`
    Opaque { name: String, tag: String },
    /// A braced definition closed by `} Tag;`.
    Definition {
        name: String,
        tag: String,
        fields: Vec<StructField>,
    },
}

impl StructDecl {
    /// Parse a struct block.
    pub fn parse(block: &DeclarationBlock, tables: &RenameTables) -> Result<Self> {
        let first = block.first_line()?;
        let (code, _) = split_trailing_comment(first);

        if let Some(decl) = code.trim_end().strip_suffix(';') {
            let tag = decl
                .split_whitespace()
                .last()
                .ok_or_else(|| TranslateError::MissingTag {
                    line: first.to_string(),
                })?
                .to_string();
            let name = TypeName::normalize(&tag, tables)?.to_string();
            debug!(%tag, %name, "emitting opaque struct");
            return Ok(StructDecl::Opaque { name, tag });
        }

        let body = block.body(BlockKind::Struct)?;
        let tag = closing_tag(block.closing_line()?)?.to_string();
        let name = TypeName::normalize(&tag, tables)?.to_string();
        debug!(%tag, %name, start = body.start, "emitting struct definition");

        let fields = block.lines()[body]
            .iter()
            .map(|line| StructField::parse(line, tables))
            .collect::<Result<Vec<_>>>()?;

        Ok(StructDecl::Definition { name, tag, fields })
    }

    /// Emitted type name.
    pub fn name(&self) -> &str {
        match self {
            StructDecl::Opaque { name, .. } | StructDecl::Definition { name, .. } => name,
        }
    }

    /// Render as Nelua lines.
    pub fn to_lines(&self) -> Vec<String> {
        match self {
            StructDecl::Opaque { name, tag } => vec![format!(
                "global {name}: type {} = @record{{}}",
                cimport_annotations(name, tag, &["forwarddecl"])
            )],
            StructDecl::Definition { name, tag, fields } => {
                let mut out = Vec::with_capacity(fields.len() + 2);
                out.push(format!(
                    "global {name}: type {} = @record{{",
                    cimport_annotations(name, tag, &[])
                ));
                out.extend(fields.iter().map(StructField::to_line));
                out.push("}".to_string());
                out
            }
        }
    }
}

impl fmt::Display for StructDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.to_lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> StructDecl {
        StructDecl::parse(&DeclarationBlock::from_text(text), &RenameTables::builtin()).unwrap()
    }

    #[test]
    fn opaque_struct_with_renamed_tag() {
        let decl = parse("typedef struct LCDBitmap LCDBitmap;");
        assert_eq!(
            decl,
            StructDecl::Opaque {
                name: "Bitmap".to_string(),
                tag: "LCDBitmap".to_string(),
            }
        );
        assert_eq!(
            decl.to_lines(),
            vec!["global Bitmap: type <cimport'LCDBitmap', nodecl, forwarddecl> = @record{}"]
        );
    }

    #[test]
    fn opaque_struct_with_unchanged_tag() {
        let decl = parse("typedef struct playdate_sound playdate_sound;");
        assert_eq!(
            decl.to_lines(),
            vec!["global playdate_sound: type <cimport, nodecl, forwarddecl> = @record{}"]
        );
    }

    #[test]
    fn definition_with_brace_on_next_line() {
        let decl = parse(
            "typedef struct\n{\n\tint x;\n\tint y;\n\tint width; // in pixels\n\tint height;\n} LCDRect;",
        );
        assert_eq!(decl.name(), "Rect");
        assert_eq!(
            decl.to_lines(),
            vec![
                "global Rect: type <cimport'LCDRect', nodecl> = @record{",
                "  x: cint,",
                "  y: cint,",
                "  width: cint, -- in pixels",
                "  height: cint,",
                "}",
            ]
        );
    }

    #[test]
    fn definition_with_inline_brace() {
        let decl = parse("typedef struct {\n\tfloat x;\n\tfloat y;\n} PDRect;");
        assert_eq!(
            decl.to_lines(),
            vec![
                "global PDRect: type <cimport, nodecl> = @record{",
                "  x: float32,",
                "  y: float32,",
                "}",
            ]
        );
    }

    #[test]
    fn pointer_marker_on_name_moves_to_type() {
        let field = StructField::parse("\tconst char *name;", &RenameTables::builtin()).unwrap();
        assert_eq!(
            field,
            StructField::Field {
                name: "name".to_string(),
                ty: TypeName {
                    base: "cstring".to_string(),
                    depth: 0,
                },
                comment: None,
            }
        );

        let field = StructField::parse("\tLCDBitmap* image;", &RenameTables::builtin()).unwrap();
        assert_eq!(field.to_line(), "  image: *Bitmap,");
    }

    #[test]
    fn comment_and_blank_lines_pass_through() {
        let decl = parse(
            "typedef struct\n{\n\t// file attributes\n\tint isdir;\n\n\tunsigned int size;\n} FileStat;",
        );
        assert_eq!(
            decl.to_lines(),
            vec![
                "global FileStat: type <cimport, nodecl> = @record{",
                "  -- file attributes",
                "  isdir: cint,",
                "",
                "  size: cuint,",
                "}",
            ]
        );
    }

    #[test]
    fn member_without_name_is_an_error() {
        assert!(matches!(
            StructField::parse("\tint;", &RenameTables::builtin()),
            Err(TranslateError::MalformedField { .. })
        ));
    }

    #[test]
    fn truncated_definition_is_an_error() {
        let block = DeclarationBlock::from_text("typedef struct\n{");
        assert!(matches!(
            StructDecl::parse(&block, &RenameTables::builtin()),
            Err(TranslateError::TruncatedBlock { .. })
        ));
    }
}
