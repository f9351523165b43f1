//! Weekly awards processing and standings over a [`PickemStore`].
//!
//! A period moves through three states:
//!
//! - **Pending**: the period has no contests, or at least one is unfinished
//! - **CompletedUnprocessed**: every contest is completed, no awards yet
//! - **Processed**: awards are persisted
//!
//! [`process_period`] may be invoked any number of times; once a period is
//! processed further calls are no-ops.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use tracing::{info, warn};

use crate::cli::types::{ContestId, Period, Season, SeasonType, UserId};
use crate::engine::aggregate::{aggregate_by_user, score_period, ExcludedUser};
use crate::engine::awards::derive_awards;
use crate::engine::rarity::classify_contest_picks;
use crate::engine::store::{PersistOutcome, PickemStore};
use crate::engine::tiebreak::{rank_users, standings, Standing};
use crate::engine::types::{Award, Contest, ScoredPick, UserAggregate};
use crate::error::Result;


/// Processing state of a period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodState {
    Pending,
    CompletedUnprocessed,
    Processed,
}

impl fmt::Display for PeriodState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodState::Pending => write!(f, "pending"),
            PeriodState::CompletedUnprocessed => write!(f, "completed, not processed"),
            PeriodState::Processed => write!(f, "processed"),
        }
    }
}

/// What a single [`process_period`] call did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessOutcome {
    /// Contests still outstanding; nothing computed
    Pending,
    /// Awards already existed; nothing written
    AlreadyProcessed,
    /// Some users could not be aggregated; awards computed but not persisted
    Incomplete,
    /// Every contest finished but nobody picked; nothing persisted
    NoUsers,
    /// Awards persisted
    Processed,
}

/// Summary of one processing run
#[derive(Debug, Clone, Serialize)]
pub struct PeriodReport {
    pub period: Period,
    pub outcome: ProcessOutcome,
    /// Awards created by this run (or computed but withheld when incomplete)
    pub awards: Vec<Award>,
    pub excluded: Vec<ExcludedUser>,
    pub scored_picks: usize,
}

impl PeriodReport {
    fn empty(period: Period, outcome: ProcessOutcome) -> Self {
        Self {
            period,
            outcome,
            awards: Vec::new(),
            excluded: Vec::new(),
            scored_picks: 0,
        }
    }

    /// State of the period after this run
    pub fn state(&self) -> PeriodState {
        match self.outcome {
            ProcessOutcome::Pending => PeriodState::Pending,
            ProcessOutcome::Incomplete | ProcessOutcome::NoUsers => {
                PeriodState::CompletedUnprocessed
            }
            ProcessOutcome::AlreadyProcessed | ProcessOutcome::Processed => PeriodState::Processed,
        }
    }
}

/// Standings over whatever has been graded so far
#[derive(Debug, Clone, Serialize)]
pub struct LiveStandings {
    pub standings: Vec<Standing>,
    pub excluded: Vec<ExcludedUser>,
    /// Picks on contests that have not finished
    pub pending_picks: usize,
}

fn contests_completed(contests: &[Contest]) -> bool {
    !contests.is_empty() && contests.iter().all(Contest::is_completed)
}

/// Determine where a period is in its lifecycle.
pub fn period_state<S: PickemStore + ?Sized>(store: &S, period: &Period) -> Result<PeriodState> {
    let contests = store.list_contests_for_period(period)?;
    if !contests_completed(&contests) {
        return Ok(PeriodState::Pending);
    }
    if store.awards_exist_for_period(period)? {
        return Ok(PeriodState::Processed);
    }
    Ok(PeriodState::CompletedUnprocessed)
}

/// Classify and score the picks on one completed contest, then write the
/// results back.
pub fn score_contest<S: PickemStore + ?Sized>(
    store: &mut S,
    contest_id: ContestId,
) -> Result<Vec<ScoredPick>> {
    let contest = store.get_contest(contest_id)?;
    let picks = store.list_picks_for_contest(contest_id)?;
    let scored: Vec<ScoredPick> = classify_contest_picks(&contest, &picks)?
        .into_iter()
        .map(|cp| {
            let score = cp.score(contest.period.week);
            ScoredPick {
                pick: cp.pick,
                is_push: cp.is_push,
                score,
            }
        })
        .collect();

    store.save_pick_results(&scored)?;
    info!(%contest_id, picks = scored.len(), "scored contest");
    Ok(scored)
}

/// Move a completed period to Processed.
///
/// Every pick is rescored from scratch, aggregated per user, ranked and
/// turned into awards. Awards are only persisted when every user aggregated
/// cleanly; otherwise the period stays eligible for a later run.
pub fn process_period<S: PickemStore + ?Sized>(store: &mut S, period: Period) -> Result<PeriodReport> {
    let contests = store.list_contests_for_period(&period)?;
    if !contests_completed(&contests) {
        info!(%period, contests = contests.len(), "period not complete, skipping");
        return Ok(PeriodReport::empty(period, ProcessOutcome::Pending));
    }
    if store.awards_exist_for_period(&period)? {
        info!(%period, "awards already exist, skipping");
        return Ok(PeriodReport::empty(period, ProcessOutcome::AlreadyProcessed));
    }

    let picks = store.list_picks_for_period(&period)?;
    let scores = score_period(&contests, &picks)?;
    store.save_pick_results(&scores.scored)?;

    let aggregation = aggregate_by_user(&scores);
    if aggregation.users.is_empty() && aggregation.excluded.is_empty() {
        info!(%period, "no picks to award, leaving period unprocessed");
        return Ok(PeriodReport {
            scored_picks: scores.scored.len(),
            ..PeriodReport::empty(period, ProcessOutcome::NoUsers)
        });
    }
    let ranked = rank_users(aggregation.users.clone());
    let awards = derive_awards(period, &ranked, &aggregation.users);

    let mut report = PeriodReport {
        period,
        outcome: ProcessOutcome::Incomplete,
        awards,
        excluded: aggregation.excluded,
        scored_picks: scores.scored.len(),
    };

    if !report.excluded.is_empty() {
        warn!(
            %period,
            excluded = report.excluded.len(),
            "users excluded from aggregation, awards not persisted"
        );
        return Ok(report);
    }

    match store.persist_period_awards(&period, &report.awards)? {
        PersistOutcome::Inserted(count) => {
            info!(%period, awards = count, users = ranked.len(), "period processed");
            report.outcome = ProcessOutcome::Processed;
        }
        PersistOutcome::AlreadyProcessed => {
            info!(%period, "awards appeared concurrently, skipping");
            report.outcome = ProcessOutcome::AlreadyProcessed;
            report.awards.clear();
        }
    }

    Ok(report)
}

/// Standings for a period, possibly still in progress.
///
/// Uses the same scoring and comparator as [`process_period`], over the
/// contests that have completed so far.
pub fn live_standings<S: PickemStore + ?Sized>(store: &S, period: &Period) -> Result<LiveStandings> {
    let contests = store.list_contests_for_period(period)?;
    let picks = store.list_picks_for_period(period)?;
    let scores = score_period(&contests, &picks)?;
    let aggregation = aggregate_by_user(&scores);

    Ok(LiveStandings {
        standings: standings(aggregation.users),
        excluded: aggregation.excluded,
        pending_picks: scores.pending,
    })
}

/// Cumulative standings across every week of a season type.
///
/// A user excluded in any week is left out of the season table rather than
/// shown with a partial total.
pub fn season_standings<S: PickemStore + ?Sized>(
    store: &S,
    season: Season,
    season_type: SeasonType,
) -> Result<LiveStandings> {
    let mut totals: Vec<UserAggregate> = Vec::new();
    let mut index: HashMap<UserId, usize> = HashMap::new();
    let mut excluded: Vec<ExcludedUser> = Vec::new();
    let mut pending_picks = 0;

    for week in store.list_weeks(season, season_type)? {
        let period = Period::new(week, season, season_type);
        let contests = store.list_contests_for_period(&period)?;
        let picks = store.list_picks_for_period(&period)?;
        let scores = score_period(&contests, &picks)?;
        pending_picks += scores.pending;

        let aggregation = aggregate_by_user(&scores);
        excluded.extend(aggregation.excluded);

        for user in aggregation.users {
            match index.get(&user.user_id) {
                Some(&slot) => {
                    if let Err(e) = totals[slot].absorb(&user) {
                        excluded.push(ExcludedUser {
                            user_id: user.user_id,
                            reason: e.to_string(),
                        });
                    }
                }
                None => {
                    index.insert(user.user_id, totals.len());
                    totals.push(user);
                }
            }
        }
    }

    totals.retain(|u| !excluded.iter().any(|e| e.user_id == u.user_id));

    Ok(LiveStandings {
        standings: standings(totals),
        excluded,
        pending_picks,
    })
}
