//! Type normalization command.

use anyhow::{Context, Result};
use pdbind_ffi::{RenameTables, TypeName};

/// Run `pdbind type <expr>...`, printing one normalized type per line.
pub fn run(tables: &RenameTables, exprs: &[String]) -> Result<()> {
    for ty in normalize_all(tables, exprs)? {
        println!("{ty}");
    }
    Ok(())
}

/// Normalize every expression, stopping at the first one that fails.
pub fn normalize_all(tables: &RenameTables, exprs: &[String]) -> Result<Vec<TypeName>> {
    exprs
        .iter()
        .map(|expr| {
            TypeName::normalize(expr, tables).with_context(|| format!("normalizing '{expr}'"))
        })
        .collect()
}
