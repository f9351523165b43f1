//! Period-wide scoring and per-user aggregation.

use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

use crate::cli::types::{ContestId, UserId};
use crate::engine::rarity::classify_contest_picks;
use crate::engine::types::{Contest, Pick, ScoredPick, UserAggregate};
use crate::error::{PickemError, Result};


/// Every pick of a period, scored against its contest
#[derive(Debug, Clone, Default)]
pub struct PeriodScores {
    /// Scored picks in input order
    pub scored: Vec<ScoredPick>,
    /// Picks whose contest was not among the supplied contests
    pub orphaned: Vec<Pick>,
    /// Picks on contests that have not finished yet
    pub pending: usize,
}

/// A user left out of a run, with the reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExcludedUser {
    pub user_id: UserId,
    pub reason: String,
}

/// Per-user totals plus the users whose totals could not be computed
#[derive(Debug, Clone, Default)]
pub struct AggregationResult {
    /// Aggregates in the order each user was first encountered
    pub users: Vec<UserAggregate>,
    pub excluded: Vec<ExcludedUser>,
}

/// Classify and score every pick of a period.
///
/// Only completed contests are graded; picks on unfinished contests are
/// counted in `pending`. A completed contest that violates its invariants
/// (missing scores) fails the whole call.
pub fn score_period(contests: &[Contest], picks: &[Pick]) -> Result<PeriodScores> {
    let by_id: HashMap<ContestId, &Contest> =
        contests.iter().map(|c| (c.contest_id, c)).collect();

    // Group pick indices by contest, keeping input order within each group
    let mut groups: HashMap<ContestId, Vec<usize>> = HashMap::new();
    let mut orphaned = Vec::new();
    let mut pending = 0;
    for (idx, pick) in picks.iter().enumerate() {
        match by_id.get(&pick.contest_id) {
            Some(contest) if contest.is_completed() => {
                groups.entry(pick.contest_id).or_default().push(idx)
            }
            Some(_) => pending += 1,
            None => orphaned.push(pick.clone()),
        }
    }

    let mut slots: Vec<Option<ScoredPick>> = vec![None; picks.len()];
    // Walk contests in input order so the first broken contest is the one reported
    for contest in contests {
        let Some(indices) = groups.get(&contest.contest_id) else {
            continue;
        };
        let contest_picks: Vec<Pick> = indices.iter().map(|&i| picks[i].clone()).collect();
        let classified = classify_contest_picks(contest, &contest_picks)?;

        for (&idx, cp) in indices.iter().zip(classified) {
            let score = cp.score(contest.period.week);
            slots[idx] = Some(ScoredPick {
                pick: cp.pick,
                is_push: cp.is_push,
                score,
            });
        }
    }

    Ok(PeriodScores {
        scored: slots.into_iter().flatten().collect(),
        orphaned,
        pending,
    })
}

impl UserAggregate {
    /// Add one scored pick. Pushes are not counted.
    pub fn add_pick(&mut self, scored: &ScoredPick) -> Result<()> {
        if scored.is_push {
            return Ok(());
        }
        self.points = self
            .points
            .checked_add(scored.score.total_points)
            .ok_or(PickemError::PointsOverflow {
                user_id: self.user_id,
            })?;
        self.total_count += 1;
        if scored.score.is_correct {
            self.correct_count += 1;
        }
        Ok(())
    }

    /// Fold another aggregate for the same user into this one.
    pub fn absorb(&mut self, other: &UserAggregate) -> Result<()> {
        let user_id = self.user_id;
        let overflow = move || PickemError::PointsOverflow { user_id };
        self.points = self.points.checked_add(other.points).ok_or_else(overflow)?;
        self.correct_count = self
            .correct_count
            .checked_add(other.correct_count)
            .ok_or_else(overflow)?;
        self.total_count = self
            .total_count
            .checked_add(other.total_count)
            .ok_or_else(overflow)?;
        Ok(())
    }
}

/// Sum scored picks per user.
///
/// A failure for one user (overflow, a pick pointing at an unknown contest)
/// drops that user from the result and records why; other users are
/// unaffected.
pub fn aggregate_by_user(scores: &PeriodScores) -> AggregationResult {
    let mut order: Vec<UserAggregate> = Vec::new();
    let mut index: HashMap<UserId, usize> = HashMap::new();
    let mut failed: HashMap<UserId, String> = HashMap::new();

    for pick in &scores.orphaned {
        failed.entry(pick.user_id).or_insert_with(|| {
            PickemError::ContestNotFound {
                contest_id: pick.contest_id,
            }
            .to_string()
        });
    }

    for scored in &scores.scored {
        let user_id = scored.pick.user_id;
        let slot = *index.entry(user_id).or_insert_with(|| {
            order.push(UserAggregate::new(user_id));
            order.len() - 1
        });
        if failed.contains_key(&user_id) {
            continue;
        }
        if let Err(e) = order[slot].add_pick(scored) {
            failed.insert(user_id, e.to_string());
        }
    }

    let mut excluded: Vec<ExcludedUser> = failed
        .into_iter()
        .map(|(user_id, reason)| {
            warn!(%user_id, %reason, "excluding user from aggregation");
            ExcludedUser { user_id, reason }
        })
        .collect();
    excluded.sort_by_key(|e| e.user_id);

    let users = order
        .into_iter()
        .filter(|u| !excluded.iter().any(|e| e.user_id == u.user_id))
        .collect();

    AggregationResult { users, excluded }
}
