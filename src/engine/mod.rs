//! Scoring engine: rarity classification, pick scoring, tiebreaking,
//! awards processing and fantasy point calculation.
//!
//! Everything here is synchronous computation over data that is already in
//! memory. Storage is reached only through [`store::PickemStore`].

pub mod aggregate;
pub mod awards;
pub mod fantasy;
pub mod processor;
pub mod rarity;
pub mod scoring;
pub mod store;
pub mod tiebreak;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use aggregate::{aggregate_by_user, score_period, AggregationResult, ExcludedUser, PeriodScores};
pub use awards::derive_awards;
pub use fantasy::{
    calculate_all_formats, calculate_all_formats_batch, calculate_fantasy_points,
    FantasyStatLine, FormatTotals,
};
pub use processor::{
    live_standings, period_state, process_period, score_contest, season_standings,
    LiveStandings, PeriodReport, PeriodState, ProcessOutcome,
};
pub use rarity::classify_contest_picks;
pub use scoring::score_pick;
pub use store::{PersistOutcome, PickemStore};
pub use tiebreak::{compare_users, rank_users, standings, Standing};
pub use types::*;
