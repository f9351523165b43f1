//! Data access the engine needs from its host.

use crate::cli::types::{ContestId, Period, Season, SeasonType, Week};
use crate::engine::types::{Award, Contest, Pick, ScoredPick};
use crate::error::Result;

/// Result of an award persistence attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOutcome {
    /// Awards were written; holds the number of rows inserted
    Inserted(usize),
    /// Awards already existed for the period; nothing was written
    AlreadyProcessed,
}

/// Reads and writes consumed by the scoring engine.
///
/// `persist_period_awards` must be atomic: either every award of the period
/// is written or none is, and nothing is written when the period already
/// has awards.
pub trait PickemStore {
    fn get_contest(&self, contest_id: ContestId) -> Result<Contest>;

    fn list_picks_for_contest(&self, contest_id: ContestId) -> Result<Vec<Pick>>;

    fn list_contests_for_period(&self, period: &Period) -> Result<Vec<Contest>>;

    /// Every non-deleted pick on a contest in the period, ordered by pick id
    fn list_picks_for_period(&self, period: &Period) -> Result<Vec<Pick>>;

    fn awards_exist_for_period(&self, period: &Period) -> Result<bool>;

    fn list_awards_for_period(&self, period: &Period) -> Result<Vec<Award>>;

    /// Weeks that have at least one contest, ascending
    fn list_weeks(&self, season: Season, season_type: SeasonType) -> Result<Vec<Week>>;

    /// Write rarity flags and scores back onto the pick records
    fn save_pick_results(&mut self, scored: &[ScoredPick]) -> Result<()>;

    fn persist_period_awards(&mut self, period: &Period, awards: &[Award]) -> Result<PersistOutcome>;
}
