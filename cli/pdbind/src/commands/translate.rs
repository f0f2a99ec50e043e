//! Block translation and classification commands.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use pdbind_ffi::{BlockKind, DeclarationBlock, RenameTables, Translation, Translator};

use super::read_input;

/// Run `pdbind translate`: one block in, binding text out.
///
/// Nothing is written to `output` unless the whole block translates.
pub fn run(tables: &RenameTables, input: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let text = read_input(input)?;
    let translation = translate_text(tables, &text)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let mut file = std::fs::File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            translation.write_to(&mut file)?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            translation.write_to(&mut lock)?;
            lock.flush()?;
        }
    }

    Ok(())
}

/// Translate one block of text.
pub fn translate_text(tables: &RenameTables, text: &str) -> Result<Translation> {
    Translator::new(tables)
        .translate_str(text)
        .context("translating declaration block")
}

/// Run `pdbind classify`. Needs no renaming tables.
pub fn classify(input: Option<&Path>) -> Result<()> {
    let kind = classify_text(&read_input(input)?)?;
    println!("{kind}");
    Ok(())
}

pub fn classify_text(text: &str) -> Result<BlockKind> {
    DeclarationBlock::from_text(text)
        .classify()
        .context("classifying declaration block")
}
