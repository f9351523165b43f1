//! Season standings command

use anyhow::{Context, Result};
use std::path::Path;

use crate::{engine::season_standings, Season, SeasonType};

use super::{common::print_standings, open_database, resolve_season};

/// Handle the season-standings command
pub fn handle_season_standings(
    db_path: Option<&Path>,
    season: Option<Season>,
    season_type: SeasonType,
    as_json: bool,
) -> Result<()> {
    let season = resolve_season(season)?;
    let db = open_database(db_path).context("opening database")?;
    let table = season_standings(&db, season, season_type)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    println!("{season} {season_type} standings");
    print_standings(&table.standings);
    for excluded in &table.excluded {
        eprintln!("⚠ user {} excluded: {}", excluded.user_id, excluded.reason);
    }
    Ok(())
}
