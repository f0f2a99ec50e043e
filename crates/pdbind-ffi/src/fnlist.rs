//! Function-pointer list emitter.
//!
//! Each line of the block is one table entry of the form
//!
//! ```text
//! ret (*name)(type arg, type arg); // comment
//! ```
//!
//! Lines are cut with three plain substring partitions (` (*`, `)(`, `);`)
//! rather than parsed as C. This matches the SDK headers exactly; other
//! input produces best-effort output.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::block::DeclarationBlock;
use crate::ctype::{migrate_pointer_markers, TypeName};
use crate::emit::{comment_line, comment_text, trailing_comment, INDENT};
use crate::error::{Result, TranslateError};
use crate::tables::RenameTables;

const NAME_OPEN: &str = " (*";
const ARGS_OPEN: &str = ")(";
const ARGS_CLOSE: &str = ");";
const VARIADIC: &str = "...";
const VARIADIC_TYPE: &str = "cvarargs";

/// A named, typed function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Binding-safe name (synthesized or suffixed if needed).
    pub name: String,
    pub ty: TypeName,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)
    }
}

/// Parameters plus an optional return type (`None` for `void`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FunctionSignature {
    pub params: Vec<Parameter>,
    pub ret: Option<TypeName>,
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "function(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ")")?;
        if let Some(ret) = &self.ret {
            write!(f, ": {ret}")?;
        }
        Ok(())
    }
}

/// One line of a function-pointer list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FnListLine {
    Blank,
    Comment(String),
    Entry {
        name: String,
        signature: FunctionSignature,
        comment: Option<String>,
    },
}

impl FnListLine {
    /// Parse one line.
    pub fn parse(line: &str, tables: &RenameTables) -> Result<Self> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(FnListLine::Blank);
        }
        if let Some(text) = comment_text(line) {
            return Ok(FnListLine::Comment(text.to_string()));
        }

        if !line.contains(NAME_OPEN) {
            warn!(line, "no function-pointer marker; output will not be meaningful");
        }
        let (ret, rest) = partition(line, NAME_OPEN);
        let (name, rest) = partition(rest, ARGS_OPEN);
        let (args, comment) = partition(rest, ARGS_CLOSE);

        let ret = TypeName::normalize(ret, tables)?;
        let ret = (!ret.is_void()).then_some(ret);
        let params = parse_args(args, tables)?;
        trace!(name, params = params.len(), "function entry");

        Ok(FnListLine::Entry {
            name: name.trim().to_string(),
            signature: FunctionSignature { params, ret },
            comment: entry_comment(comment),
        })
    }
}

impl fmt::Display for FnListLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FnListLine::Blank => Ok(()),
            FnListLine::Comment(text) => write!(f, "{}", comment_line(text)),
            FnListLine::Entry {
                name,
                signature,
                comment,
            } => write!(
                f,
                "{INDENT}{name}: {signature},{}",
                trailing_comment(comment.as_deref())
            ),
        }
    }
}

/// Parse every line of a function-list block.
pub fn parse_block(block: &DeclarationBlock, tables: &RenameTables) -> Result<Vec<FnListLine>> {
    if block.is_empty() {
        return Err(TranslateError::EmptyBlock);
    }
    debug!(lines = block.len(), "emitting function list");
    block
        .lines()
        .iter()
        .map(|line| FnListLine::parse(line, tables))
        .collect()
}

/// Split at the first `sep`; a missing separator leaves the tail empty.
fn partition<'a>(s: &'a str, sep: &str) -> (&'a str, &'a str) {
    s.split_once(sep).unwrap_or((s, ""))
}

fn parse_args(args: &str, tables: &RenameTables) -> Result<Vec<Parameter>> {
    let args = args.trim();
    if args.is_empty() || args == "void" {
        return Ok(Vec::new());
    }

    let mut params = Vec::new();
    for (index, arg) in args.split(',').map(str::trim).enumerate() {
        if arg == VARIADIC {
            params.push(Parameter {
                name: VARIADIC.to_string(),
                ty: TypeName {
                    base: VARIADIC_TYPE.to_string(),
                    depth: 0,
                },
            });
            continue;
        }

        let (ty, name) = match arg.rsplit_once(char::is_whitespace) {
            Some((ty, name)) => (ty, name.trim()),
            None => (arg, ""),
        };
        let (ty, name) = migrate_pointer_markers(ty, name);
        let name = if name.is_empty() {
            format!("unnamed{index}")
        } else {
            tables.safe_identifier(&name)
        };
        let ty = TypeName::normalize(&ty, tables)?;
        params.push(Parameter { name, ty });
    }
    Ok(params)
}

/// Trailing text after `);`, with a C comment marker swapped out.
fn entry_comment(rest: &str) -> Option<String> {
    let rest = rest.trim();
    if rest.is_empty() {
        return None;
    }
    Some(comment_text(rest).unwrap_or(rest).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(input: &str) -> String {
        FnListLine::parse(input, &RenameTables::builtin())
            .unwrap()
            .to_string()
    }

    #[test]
    fn draw_line_entry() {
        let parsed = FnListLine::parse(
            "void (*drawLine)(int x1, int y1, int x2, int y2, LCDColor color);",
            &RenameTables::builtin(),
        )
        .unwrap();
        let FnListLine::Entry {
            name, signature, ..
        } = &parsed
        else {
            panic!("expected entry, got {parsed:?}");
        };
        assert_eq!(name, "drawLine");
        assert!(signature.ret.is_none());
        assert_eq!(signature.params.len(), 5);
        for p in &signature.params[..4] {
            assert_eq!(p.ty.to_string(), "cint");
        }
        assert_eq!(signature.params[4].ty.to_string(), "ColorOrPattern");
        assert_eq!(
            parsed.to_string(),
            "  drawLine: function(x1: cint, y1: cint, x2: cint, y2: cint, color: ColorOrPattern),"
        );
    }

    #[test]
    fn return_type_is_normalized() {
        assert_eq!(
            line("LCDBitmap* (*newBitmap)(int width, int height, LCDColor bgcolor);"),
            "  newBitmap: function(width: cint, height: cint, bgcolor: ColorOrPattern): *Bitmap,"
        );
        assert_eq!(
            line("const char* (*getLanguage)(void);"),
            "  getLanguage: function(): cstring,"
        );
    }

    #[test]
    fn void_argument_list_is_empty() {
        assert_eq!(line("void (*display)(void);"), "  display: function(),");
    }

    #[test]
    fn reserved_argument_name_is_suffixed() {
        assert_eq!(
            line("int (*seek)(SDFile* file, int pos, int end);"),
            "  seek: function(file: *File, pos: cint, end_: cint): cint,"
        );
    }

    #[test]
    fn unnamed_arguments_get_placeholders() {
        assert_eq!(
            line("void (*setCallback)(PDCallbackFunction*, void*);"),
            "  setCallback: function(unnamed0: *CallbackFunction, unnamed1: pointer),"
        );
    }

    #[test]
    fn pointer_marker_on_argument_name_moves_to_type() {
        assert_eq!(
            line("int (*read)(SDFile *file, void *buf, unsigned int len);"),
            "  read: function(file: *File, buf: pointer, len: cuint): cint,"
        );
    }

    #[test]
    fn variadic_arguments() {
        assert_eq!(
            line("void (*logToConsole)(const char* fmt, ...);"),
            "  logToConsole: function(fmt: cstring, ...: cvarargs),"
        );
    }

    #[test]
    fn trailing_comment_is_kept() {
        assert_eq!(
            line("void (*clear)(LCDColor color); // fills the frame buffer"),
            "  clear: function(color: ColorOrPattern), -- fills the frame buffer"
        );
    }

    #[test]
    fn comment_and_blank_lines() {
        assert_eq!(line("// Draws a line."), "  -- Draws a line.");
        assert_eq!(line("   "), "");
    }

    #[test]
    fn unrecognized_line_falls_through() {
        // No marker: best-effort output rather than an error.
        assert_eq!(line("LCDColor"), "  : function(): ColorOrPattern,");
    }

    #[test]
    fn empty_block_is_an_error() {
        assert!(parse_block(&DeclarationBlock::default(), &RenameTables::builtin()).is_err());
    }
}
