//! Raw C type expressions and their normalized binding form.
//!
//! Handles exactly what the SDK's declarations use: a base name, optional
//! `const`, and trailing pointer markers. Does NOT handle arrays, function
//! pointer types, or qualifiers between pointer markers.

use std::fmt;

use crate::error::{Result, TranslateError};
use crate::tables::RenameTables;

/// Pointer marker in both C input and Nelua output.
pub const POINTER_MARKER: char = '*';

/// C's character type, after `constchar` has been renamed.
pub const CHAR: &str = "char";
/// C's void type, after `constvoid` has been renamed.
pub const VOID: &str = "void";
/// Nelua's native string-reference type, standing in for `char*`.
pub const CSTRING: &str = "cstring";
/// Nelua's opaque pointer type, standing in for `void*`.
pub const POINTER: &str = "pointer";

/// A base type name plus an indirection depth.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName {
    /// Base identifier with whitespace and pointer markers removed.
    pub base: String,
    /// Number of pointer levels.
    pub depth: usize,
}

impl TypeName {
    /// Split a raw type expression into base name and depth, without renaming.
    ///
    /// All whitespace is removed first, so `const char *` yields base
    /// `constchar` at depth 1.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut compact: String = raw.split_whitespace().collect();
        let mut depth = 0;
        while compact.ends_with(POINTER_MARKER) {
            compact.pop();
            depth += 1;
        }
        if compact.is_empty() {
            return Err(TranslateError::EmptyType {
                line: raw.to_string(),
            });
        }
        Ok(TypeName {
            base: compact,
            depth,
        })
    }

    /// Normalize a raw type expression for the binding.
    ///
    /// Renames the base through the type table (one lookup, never chained),
    /// then folds one level of `char*` into `cstring` and one level of
    /// `void*` into `pointer`.
    pub fn normalize(raw: &str, tables: &RenameTables) -> Result<Self> {
        let TypeName { base, mut depth } = Self::parse(raw)?;
        let mut base = tables.rename_type(&base).to_string();

        if base == CHAR && depth >= 1 {
            depth -= 1;
            base = CSTRING.to_string();
        } else if base == VOID && depth >= 1 {
            depth -= 1;
            base = POINTER.to_string();
        }

        let normalized = TypeName { base, depth };
        tracing::trace!(raw, %normalized, "normalized type");
        Ok(normalized)
    }

    /// Whether this is plain `void` (no value).
    pub fn is_void(&self) -> bool {
        self.depth == 0 && self.base == VOID
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.depth {
            write!(f, "{POINTER_MARKER}")?;
        }
        write!(f, "{}", self.base)
    }
}

/// Move leading pointer markers from a declarator name onto its type.
///
/// `("char", "*name")` becomes `("char*", "name")`.
pub fn migrate_pointer_markers(ty: &str, name: &str) -> (String, String) {
    let stripped = name.trim_start_matches(POINTER_MARKER);
    let markers = name.len() - stripped.len();
    let mut ty = ty.to_string();
    for _ in 0..markers {
        ty.push(POINTER_MARKER);
    }
    (ty, stripped.to_string())
}
