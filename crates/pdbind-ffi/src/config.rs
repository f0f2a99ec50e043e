//! `pdbind.toml` parsing.
//!
//! A `pdbind.toml` file extends or overrides the built-in renaming tables:
//!
//! ```toml
//! [types]
//! PDMenuItem = "MenuItem"
//!
//! [constants]
//! kMenuItemChecked = "Checked"
//!
//! [reserved]
//! words = ["record"]
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TranslateError};
use crate::tables::RenameTables;

/// File name searched for by [`TableOverrides::find_and_load`].
pub const CONFIG_FILE_NAME: &str = "pdbind.toml";

/// Table entries read from a `pdbind.toml` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOverrides {
    /// Extra or replacement type renames.
    #[serde(default)]
    pub types: BTreeMap<String, String>,
    /// Extra or replacement enum constant renames.
    #[serde(default)]
    pub constants: BTreeMap<String, String>,
    /// Additional reserved words.
    #[serde(default)]
    pub reserved: ReservedWords,
}

/// The `[reserved]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservedWords {
    #[serde(default)]
    pub words: Vec<String>,
}

impl TableOverrides {
    /// Parse overrides from a TOML string.
    pub fn parse(input: &str) -> Result<Self> {
        let overrides: TableOverrides = toml::from_str(input).map_err(TranslateError::Toml)?;

        for (key, value) in overrides.types.iter().chain(&overrides.constants) {
            if key.trim().is_empty() || value.trim().is_empty() {
                return Err(TranslateError::EmptyName {
                    line: format!("{key} = \"{value}\""),
                });
            }
        }

        Ok(overrides)
    }

    /// Parse overrides from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Search upward from `start_dir` for a `pdbind.toml` file, returning its
    /// overrides along with the path it was found at.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                let overrides = Self::load(&candidate)?;
                return Ok(Some((overrides, candidate)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Capture a complete set of tables in override form, for dumping.
    pub fn from_tables(tables: &RenameTables) -> Self {
        TableOverrides {
            types: tables.types().clone(),
            constants: tables.constants().clone(),
            reserved: ReservedWords {
                words: tables.reserved().iter().cloned().collect(),
            },
        }
    }

    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}
