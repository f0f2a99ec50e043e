//! CLI command implementations.

pub mod tables;
pub mod translate;
pub mod types;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use pdbind_ffi::{RenameTables, TableOverrides};

/// Build the effective tables: built-ins merged with an explicit config file,
/// or with the nearest `pdbind.toml` above `cwd` when none is given.
pub fn load_tables(cwd: &Path, config: Option<&Path>) -> Result<RenameTables> {
    let overrides = match config {
        Some(path) => Some((
            TableOverrides::load(path).with_context(|| format!("loading {}", path.display()))?,
            path.to_path_buf(),
        )),
        None => TableOverrides::find_and_load(cwd).context("searching for pdbind.toml")?,
    };

    match overrides {
        Some((overrides, path)) => {
            tracing::debug!(path = %path.display(), "applying table overrides");
            RenameTables::builtin()
                .with_overrides(&overrides)
                .with_context(|| format!("merging {}", path.display()))
        }
        None => Ok(RenameTables::builtin()),
    }
}

/// Read a whole declaration block from a file, or from stdin.
pub fn read_input(input: Option<&Path>) -> Result<String> {
    read_input_from(input, std::io::stdin())
}

/// Read a whole declaration block from a file, or from `stdin` when no path
/// is given.
pub fn read_input_from<R: Read>(input: Option<&Path>, mut stdin: R) -> Result<String> {
    match input {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut text = String::new();
            stdin.read_to_string(&mut text).context("reading stdin")?;
            Ok(text)
        }
    }
}
