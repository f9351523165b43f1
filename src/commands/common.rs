//! Helpers shared across command handlers.

use std::path::Path;

use crate::{
    cli::PeriodArgs, engine::Standing, error::PickemError, storage::PickemDatabase, Period,
    Result, Season, SEASON_ENV_VAR,
};

/// Resolve the season from an explicit value or the `PICKEM_SEASON` env var
pub fn resolve_season(season: Option<Season>) -> Result<Season> {
    season
        .or_else(|| {
            std::env::var(SEASON_ENV_VAR)
                .ok()
                .and_then(|s| s.parse::<Season>().ok())
        })
        .ok_or_else(|| PickemError::MissingSeason {
            env_var: SEASON_ENV_VAR.to_string(),
        })
}

/// Build a period from CLI arguments
pub fn resolve_period(args: &PeriodArgs) -> Result<Period> {
    Ok(Period::new(
        args.week,
        resolve_season(args.season)?,
        args.season_type,
    ))
}

/// Open the database at an explicit path, or the default location
pub fn open_database(path: Option<&Path>) -> Result<PickemDatabase> {
    match path {
        Some(p) => PickemDatabase::open(p),
        None => PickemDatabase::new(),
    }
}

/// Print a standings table as text lines
pub fn print_standings(rows: &[Standing]) {
    if rows.is_empty() {
        println!("No graded picks yet.");
        return;
    }
    println!("{:>4}  {:>8}  {:>6}  {:>7}  {:>6}", "RANK", "USER", "PTS", "RECORD", "PCT");
    for row in rows {
        println!(
            "{:>4}  {:>8}  {:>6}  {:>7}  {:>6.3}",
            row.rank, row.user.user_id, row.user.points, row.record, row.win_percentage
        );
    }
}
