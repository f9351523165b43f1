//! Award derivation from ranked period aggregates.

use crate::cli::types::Period;
use crate::engine::types::{Award, AwardType, UserAggregate};

#[cfg(test)]
mod tests;

const PLACEMENTS: [AwardType; 3] = [
    AwardType::FirstPlace,
    AwardType::SecondPlace,
    AwardType::ThirdPlace,
];

fn award(period: Period, award_type: AwardType, user: &UserAggregate) -> Award {
    Award {
        user_id: user.user_id,
        period,
        award_type,
        points: user.points,
        record: user.record(),
    }
}

/// User with the fewest points. Ties go to whoever was encountered first.
pub fn lowest_scorer(encounter_order: &[UserAggregate]) -> Option<&UserAggregate> {
    let mut lowest: Option<&UserAggregate> = None;
    for user in encounter_order {
        if lowest.map_or(true, |l| user.points < l.points) {
            lowest = Some(user);
        }
    }
    lowest
}

/// Derive every award for a period.
///
/// `ranked` must already be sorted with
/// [`compare_users`](crate::engine::tiebreak::compare_users);
/// `encounter_order` holds the same users in the order they were first seen
/// and decides lowest-score ties.
pub fn derive_awards(
    period: Period,
    ranked: &[UserAggregate],
    encounter_order: &[UserAggregate],
) -> Vec<Award> {
    let mut awards: Vec<Award> = PLACEMENTS
        .iter()
        .zip(ranked)
        .map(|(award_type, user)| award(period, *award_type, user))
        .collect();

    if let Some(user) = lowest_scorer(encounter_order) {
        awards.push(award(period, AwardType::LowestScore, user));
    }

    for user in ranked.iter().filter(|u| u.total_count > 0) {
        if user.correct_count == user.total_count {
            awards.push(award(period, AwardType::PerfectWeek, user));
        }
        if user.correct_count == 0 {
            awards.push(award(period, AwardType::ColdWeek, user));
        }
        if user.points < 0 {
            awards.push(award(period, AwardType::NegativePoints, user));
        }
    }

    awards
}
