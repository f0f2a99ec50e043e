//! Block classification and emitter dispatch.

use std::fmt;
use std::io::Write;

use tracing::debug;

use crate::block::{BlockKind, DeclarationBlock};
use crate::enums::EnumDecl;
use crate::error::Result;
use crate::fnlist;
use crate::structs::StructDecl;
use crate::tables::RenameTables;

/// Translates declaration blocks against a fixed set of renaming tables.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'t> {
    tables: &'t RenameTables,
}

/// The generated binding lines for one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub kind: BlockKind,
    pub lines: Vec<String>,
}

impl<'t> Translator<'t> {
    pub fn new(tables: &'t RenameTables) -> Self {
        Translator { tables }
    }

    /// Classify `block` and run the matching emitter.
    pub fn translate(&self, block: &DeclarationBlock) -> Result<Translation> {
        let kind = block.classify()?;
        debug!(%kind, lines = block.len(), "classified block");

        let lines = match kind {
            BlockKind::Enum => {
                let decl = EnumDecl::parse(block, self.tables)?;
                debug!(name = %decl.name, members = decl.members().count(), "translated enum");
                decl.to_lines()
            }
            BlockKind::Struct => {
                let decl = StructDecl::parse(block, self.tables)?;
                debug!(name = decl.name(), "translated struct");
                decl.to_lines()
            }
            BlockKind::FunctionList => fnlist::parse_block(block, self.tables)?
                .iter()
                .map(ToString::to_string)
                .collect(),
        };

        Ok(Translation { kind, lines })
    }

    /// Translate a block given as text.
    pub fn translate_str(&self, text: &str) -> Result<Translation> {
        self.translate(&DeclarationBlock::from_text(text))
    }
}

impl Translation {
    /// Write each line followed by a newline.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        for line in &self.lines {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TranslateError;

    fn translate(text: &str) -> Translation {
        Translator::new(&RenameTables::builtin())
            .translate_str(text)
            .unwrap()
    }

    #[test]
    fn dispatches_enum() {
        let t = translate("typedef enum\n{\n\tkFileRead,\n\tkFileWrite,\n} /* FileOptions */");
        assert_eq!(t.kind, BlockKind::Enum);
        assert!(t.lines.iter().any(|l| l.contains("_ = 0")));
        assert!(t
            .lines
            .iter()
            .any(|l| l == "global FileOptions.Read: FileOptions <cimport'kFileRead', nodecl, const>"));
        assert!(t
            .lines
            .iter()
            .any(|l| l == "global FileOptions.Write: FileOptions <cimport'kFileWrite', nodecl, const>"));
    }

    #[test]
    fn dispatches_opaque_struct() {
        let t = translate("typedef struct LCDFont LCDFont;");
        assert_eq!(t.kind, BlockKind::Struct);
        assert_eq!(
            t.to_string(),
            "global Font: type <cimport'LCDFont', nodecl, forwarddecl> = @record{}\n"
        );
    }

    #[test]
    fn dispatches_function_list() {
        let t = translate(
            "// Draws a line.\nvoid (*drawLine)(int x1, int y1, int x2, int y2, LCDColor color);\n\nvoid (*clear)(LCDColor color);",
        );
        assert_eq!(t.kind, BlockKind::FunctionList);
        assert_eq!(
            t.lines,
            vec![
                "  -- Draws a line.",
                "  drawLine: function(x1: cint, y1: cint, x2: cint, y2: cint, color: ColorOrPattern),",
                "",
                "  clear: function(color: ColorOrPattern),",
            ]
        );
    }

    #[test]
    fn trailing_blank_lines_after_struct() {
        let t = translate("typedef struct\n{\n\tint x;\n} PDRect;\n\n");
        assert_eq!(
            t.lines,
            vec!["global PDRect: type <cimport, nodecl> = @record{", "  x: cint,", "}"]
        );
    }

    #[test]
    fn trailing_blank_lines_after_enum() {
        let t = translate("typedef enum\n{\n\tkFileRead,\n} /* FileOptions */\n\n");
        assert_eq!(
            t.lines.last().unwrap(),
            "global FileOptions.Read: FileOptions <cimport'kFileRead', nodecl, const>"
        );
    }

    #[test]
    fn overrides_flow_into_output() {
        let mut overrides = crate::config::TableOverrides::default();
        overrides
            .types
            .insert("LCDSprite".to_string(), "Sprite".to_string());
        let tables = RenameTables::builtin().with_overrides(&overrides).unwrap();

        let t = Translator::new(&tables)
            .translate_str("void (*freeSprite)(LCDSprite* sprite);")
            .unwrap();
        assert_eq!(t.lines, vec!["  freeSprite: function(sprite: *Sprite),"]);
    }

    #[test]
    fn write_to_appends_newlines() {
        let t = translate("void (*display)(void);");
        let mut buf = Vec::new();
        t.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "  display: function(),\n");
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = Translator::new(&RenameTables::builtin())
            .translate_str("")
            .unwrap_err();
        assert!(matches!(err, TranslateError::EmptyBlock));
    }
}
