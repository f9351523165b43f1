//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{ContestId, ScoringFormat, Season, SeasonType, Week};

/// Period selection shared between weekly commands
#[derive(Debug, Args)]
pub struct PeriodArgs {
    /// Season year (or set `PICKEM_SEASON` env var).
    #[clap(long, short)]
    pub season: Option<Season>,

    /// Week number.
    #[clap(long, short)]
    pub week: Week,

    /// Season type.
    #[clap(long, value_enum, default_value_t = SeasonType::Regular)]
    pub season_type: SeasonType,
}

#[derive(Debug, Parser)]
#[clap(name = "pickem", about = "Pick'em contest scoring engine")]
pub struct Pickem {
    /// Database file (or set `PICKEM_DB_PATH` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load users, contests, picks and stat lines from a JSON file.
    Import {
        /// JSON file with `users`, `contests`, `picks` and `stat_lines` arrays.
        #[clap(long, short)]
        file: PathBuf,

        /// Clear all data from the database before importing.
        #[clap(long)]
        clear_db: bool,
    },

    /// Classify and score every pick on one completed contest.
    ScoreContest {
        #[clap(long)]
        contest_id: ContestId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Score a completed week and persist its awards (no-op if already done).
    ProcessWeek {
        #[clap(flatten)]
        period: PeriodArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show whether a week is pending, completed or processed.
    PeriodStatus {
        #[clap(flatten)]
        period: PeriodArgs,
    },

    /// Live standings for one week.
    Standings {
        #[clap(flatten)]
        period: PeriodArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Cumulative standings for a whole season type.
    SeasonStandings {
        /// Season year (or set `PICKEM_SEASON` env var).
        #[clap(long, short)]
        season: Option<Season>,

        #[clap(long, value_enum, default_value_t = SeasonType::Regular)]
        season_type: SeasonType,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List persisted awards for one week.
    Awards {
        #[clap(flatten)]
        period: PeriodArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Fantasy point totals for player stat lines.
    FantasyPoints {
        /// JSON array of stat lines; without it, stored lines for the week are used.
        #[clap(long, short)]
        file: Option<PathBuf>,

        /// Season year for stored lines (or set `PICKEM_SEASON` env var).
        #[clap(long, short)]
        season: Option<Season>,

        /// Week for stored lines.
        #[clap(long, short)]
        week: Option<Week>,

        /// Single format; all three are shown when omitted.
        #[clap(long, value_enum)]
        format: Option<ScoringFormat>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
