//! Import command implementation

use anyhow::{Context, Result};
use std::path::Path;

use crate::storage::ImportBundle;

use super::open_database;

/// Handle the import command
pub fn handle_import(db_path: Option<&Path>, file: &Path, clear_db: bool) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let bundle: ImportBundle = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", file.display()))?;

    let mut db = open_database(db_path).context("opening database")?;
    if clear_db {
        println!("Clearing all data from database...");
        db.clear_all_data()?;
    }

    let summary = db.import_bundle(&bundle).context("importing bundle")?;
    println!(
        "✓ Imported {} users, {} contests, {} picks, {} stat lines",
        summary.users, summary.contests, summary.picks, summary.stat_lines
    );
    Ok(())
}
