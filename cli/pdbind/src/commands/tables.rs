//! Renaming table dump command.

use anyhow::{bail, Result};
use pdbind_ffi::{RenameTables, TableOverrides};

/// Run `pdbind tables --format <text|toml|json>`.
pub fn run(tables: &RenameTables, format: &str) -> Result<()> {
    print!("{}", render(tables, format)?);
    Ok(())
}

fn render(tables: &RenameTables, format: &str) -> Result<String> {
    match format {
        "text" => Ok(render_text(tables)),
        "toml" => Ok(TableOverrides::from_tables(tables).to_toml()?),
        "json" => {
            let mut json = serde_json::to_string_pretty(&TableOverrides::from_tables(tables))?;
            json.push('\n');
            Ok(json)
        }
        other => bail!("unknown format '{other}' (expected text, toml, or json)"),
    }
}

fn render_text(tables: &RenameTables) -> String {
    let mut out = String::new();
    let width = tables
        .types()
        .keys()
        .chain(tables.constants().keys())
        .map(String::len)
        .max()
        .unwrap_or(0);

    out.push_str("Types:\n");
    for (from, to) in tables.types() {
        out.push_str(&format!("  {from:<width$}  → {to}\n"));
    }
    out.push_str("\nConstants:\n");
    for (from, to) in tables.constants() {
        out.push_str(&format!("  {from:<width$}  → {to}\n"));
    }
    out.push_str("\nReserved words:\n  ");
    out.push_str(
        &tables
            .reserved()
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" "),
    );
    out.push('\n');
    out
}
