//! Fantasy point totals for raw player stat lines.
//!
//! Six additive categories: passing, rushing, receiving, kicking,
//! defense/special teams and misc. Receptions are the only format-sensitive
//! stat.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cli::types::{ScoringFormat, Season, Week};

#[cfg(test)]
mod tests;

const PASS_YARD: f64 = 0.04;
const PASS_TD: f64 = 4.0;
const INTERCEPTION_THROWN: f64 = -2.0;
const RUSH_YARD: f64 = 0.1;
const RUSH_TD: f64 = 6.0;
const REC_YARD: f64 = 0.1;
const REC_TD: f64 = 6.0;

const FG_0_39: f64 = 3.0;
const FG_40_49: f64 = 4.0;
const FG_50_PLUS: f64 = 5.0;
const FG_MISSED: f64 = -1.0;
const XP_MADE: f64 = 1.0;
const XP_MISSED: f64 = -1.0;

const SACK: f64 = 1.0;
const DEF_INTERCEPTION: f64 = 2.0;
const FUMBLE_RECOVERY: f64 = 2.0;
const SAFETY: f64 = 2.0;
const DEF_TD: f64 = 6.0;
const RETURN_TD: f64 = 6.0;

const FUMBLE_LOST: f64 = -2.0;
const TWO_POINT_CONVERSION: f64 = 2.0;

/// Points-allowed tiers as (inclusive upper bound, points), ascending.
pub const POINTS_ALLOWED_TIERS: [(u32, f64); 7] = [
    (0, 10.0),
    (6, 7.0),
    (13, 4.0),
    (20, 1.0),
    (27, 0.0),
    (34, -1.0),
    (u32::MAX, -4.0),
];

/// Raw counting stats for one player in one week. Read-only to the calculator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FantasyStatLine {
    pub player_id: u64,
    pub player_name: String,
    pub season: Option<Season>,
    pub week: Option<Week>,

    pub passing_yards: i32,
    pub passing_tds: u32,
    pub interceptions: u32,

    pub rushing_yards: i32,
    pub rushing_tds: u32,

    pub receptions: u32,
    pub receiving_yards: i32,
    pub receiving_tds: u32,

    pub fg_made_0_39: u32,
    pub fg_made_40_49: u32,
    pub fg_made_50_plus: u32,
    pub fg_missed: u32,
    pub xp_made: u32,
    pub xp_missed: u32,

    pub sacks: f64,
    pub def_interceptions: u32,
    pub fumbles_recovered: u32,
    pub safeties: u32,
    pub defensive_tds: u32,
    pub return_tds: u32,
    /// Only set for team defenses
    pub points_allowed: Option<u32>,

    pub fumbles_lost: u32,
    pub two_point_conversions: u32,
}

/// Totals for one stat line under every format
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatTotals {
    pub ppr: f64,
    pub half_ppr: f64,
    pub standard: f64,
}

impl FormatTotals {
    pub fn get(&self, format: ScoringFormat) -> f64 {
        match format {
            ScoringFormat::Ppr => self.ppr,
            ScoringFormat::HalfPpr => self.half_ppr,
            ScoringFormat::Standard => self.standard,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Points for a given points-allowed value: first tier whose upper bound
/// covers it.
pub fn points_allowed_score(points_allowed: u32) -> f64 {
    POINTS_ALLOWED_TIERS
        .iter()
        .find(|(upper, _)| points_allowed <= *upper)
        .map(|(_, pts)| *pts)
        .unwrap_or(0.0)
}

fn passing_points(s: &FantasyStatLine) -> f64 {
    f64::from(s.passing_yards) * PASS_YARD
        + f64::from(s.passing_tds) * PASS_TD
        + f64::from(s.interceptions) * INTERCEPTION_THROWN
}

fn rushing_points(s: &FantasyStatLine) -> f64 {
    f64::from(s.rushing_yards) * RUSH_YARD + f64::from(s.rushing_tds) * RUSH_TD
}

/// Receiving points without the reception component
fn receiving_points(s: &FantasyStatLine) -> f64 {
    f64::from(s.receiving_yards) * REC_YARD + f64::from(s.receiving_tds) * REC_TD
}

fn kicking_points(s: &FantasyStatLine) -> f64 {
    f64::from(s.fg_made_0_39) * FG_0_39
        + f64::from(s.fg_made_40_49) * FG_40_49
        + f64::from(s.fg_made_50_plus) * FG_50_PLUS
        + f64::from(s.fg_missed) * FG_MISSED
        + f64::from(s.xp_made) * XP_MADE
        + f64::from(s.xp_missed) * XP_MISSED
}

fn defense_points(s: &FantasyStatLine) -> f64 {
    s.sacks * SACK
        + f64::from(s.def_interceptions) * DEF_INTERCEPTION
        + f64::from(s.fumbles_recovered) * FUMBLE_RECOVERY
        + f64::from(s.safeties) * SAFETY
        + f64::from(s.defensive_tds) * DEF_TD
        + f64::from(s.return_tds) * RETURN_TD
        + s.points_allowed.map(points_allowed_score).unwrap_or(0.0)
}

fn misc_points(s: &FantasyStatLine) -> f64 {
    f64::from(s.fumbles_lost) * FUMBLE_LOST
        + f64::from(s.two_point_conversions) * TWO_POINT_CONVERSION
}

/// Everything except receptions
fn format_independent_points(s: &FantasyStatLine) -> f64 {
    passing_points(s)
        + rushing_points(s)
        + receiving_points(s)
        + kicking_points(s)
        + defense_points(s)
        + misc_points(s)
}

/// Fantasy points for one stat line in one format, rounded to 2 decimals.
pub fn calculate_fantasy_points(stats: &FantasyStatLine, format: ScoringFormat) -> f64 {
    round2(
        format_independent_points(stats)
            + f64::from(stats.receptions) * format.points_per_reception(),
    )
}

/// Totals for all three formats, sharing the format-independent work.
pub fn calculate_all_formats(stats: &FantasyStatLine) -> FormatTotals {
    let base = format_independent_points(stats);
    let receptions = f64::from(stats.receptions);
    let total = |format: ScoringFormat| round2(base + receptions * format.points_per_reception());

    FormatTotals {
        ppr: total(ScoringFormat::Ppr),
        half_ppr: total(ScoringFormat::HalfPpr),
        standard: total(ScoringFormat::Standard),
    }
}

/// [`calculate_all_formats`] over many independent stat lines, in parallel.
/// Output order matches input order.
pub fn calculate_all_formats_batch(lines: &[FantasyStatLine]) -> Vec<FormatTotals> {
    lines.par_iter().map(calculate_all_formats).collect()
}
