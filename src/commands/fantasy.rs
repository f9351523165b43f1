//! Fantasy points command

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::{
    engine::{calculate_all_formats_batch, FantasyStatLine, FormatTotals},
    ScoringFormat, Season, Week,
};

use super::{open_database, resolve_season};

/// Parameters for the fantasy points command
#[derive(Debug)]
pub struct FantasyPointsParams {
    pub file: Option<PathBuf>,
    pub season: Option<Season>,
    pub week: Option<Week>,
    pub format: Option<ScoringFormat>,
    pub as_json: bool,
}

#[derive(Debug, Serialize)]
struct PlayerTotals<'a> {
    player_id: u64,
    player_name: &'a str,
    #[serde(flatten)]
    totals: FormatTotals,
}

fn load_stat_lines(db_path: Option<&Path>, params: &FantasyPointsParams) -> Result<Vec<FantasyStatLine>> {
    if let Some(file) = &params.file {
        let raw = std::fs::read_to_string(file)
            .with_context(|| format!("reading {}", file.display()))?;
        return serde_json::from_str(&raw).with_context(|| format!("parsing {}", file.display()));
    }

    let Some(week) = params.week else {
        bail!("either --file or --week is required");
    };
    let season = resolve_season(params.season)?;
    let db = open_database(db_path).context("opening database")?;
    Ok(db.list_stat_lines(season, week)?)
}

/// Handle the fantasy-points command
pub fn handle_fantasy_points(db_path: Option<&Path>, params: FantasyPointsParams) -> Result<()> {
    let lines = load_stat_lines(db_path, &params)?;
    let totals = calculate_all_formats_batch(&lines);

    let mut rows: Vec<PlayerTotals> = lines
        .iter()
        .zip(totals)
        .map(|(line, totals)| PlayerTotals {
            player_id: line.player_id,
            player_name: &line.player_name,
            totals,
        })
        .collect();

    // Sort descending by the requested format (PPR when showing all)
    let sort_format = params.format.unwrap_or(ScoringFormat::Ppr);
    rows.sort_by(|a, b| {
        b.totals
            .get(sort_format)
            .partial_cmp(&a.totals.get(sort_format))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in rows {
        match params.format {
            Some(format) => println!(
                "{} {} [{}] {:.2}",
                row.player_id,
                row.player_name,
                format,
                row.totals.get(format)
            ),
            None => println!(
                "{} {} ppr {:.2} / half_ppr {:.2} / standard {:.2}",
                row.player_id,
                row.player_name,
                row.totals.ppr,
                row.totals.half_ppr,
                row.totals.standard
            ),
        }
    }
    Ok(())
}
