//! Ranking of user aggregates.
//!
//! [`compare_users`] is the only ordering used for both live standings and
//! award placement. Criteria, first difference wins:
//! 1. points (higher first)
//! 2. win percentage (higher first, 0 when nothing was graded)
//! 3. correct picks (higher first)
//! 4. losses (fewer first)

use serde::Serialize;
use std::cmp::Ordering;

use crate::engine::types::UserAggregate;


/// Compare win percentages exactly, without going through floats.
fn compare_win_percentage(a: &UserAggregate, b: &UserAggregate) -> Ordering {
    match (a.total_count, b.total_count) {
        (0, 0) => Ordering::Equal,
        (0, _) if b.correct_count == 0 => Ordering::Equal,
        (0, _) => Ordering::Less,
        (_, 0) if a.correct_count == 0 => Ordering::Equal,
        (_, 0) => Ordering::Greater,
        (a_total, b_total) => {
            let lhs = u64::from(a.correct_count) * u64::from(b_total);
            let rhs = u64::from(b.correct_count) * u64::from(a_total);
            lhs.cmp(&rhs)
        }
    }
}

/// Ranking order: `Ordering::Less` means `a` ranks ahead of `b`.
///
/// Suitable for `sort_by`; true ties compare `Equal` and keep input order
/// under a stable sort.
pub fn compare_users(a: &UserAggregate, b: &UserAggregate) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| compare_win_percentage(b, a))
        .then_with(|| b.correct_count.cmp(&a.correct_count))
        .then_with(|| a.losses().cmp(&b.losses()))
}

/// Sort aggregates best-first. Stable, so repeated calls on the same input
/// never reshuffle true ties.
pub fn rank_users(mut users: Vec<UserAggregate>) -> Vec<UserAggregate> {
    users.sort_by(compare_users);
    users
}

/// One row of a standings table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standing {
    /// 1-based position
    pub rank: usize,
    #[serde(flatten)]
    pub user: UserAggregate,
    pub record: String,
    pub win_percentage: f64,
}

/// Build a standings table from unsorted aggregates.
pub fn standings(users: Vec<UserAggregate>) -> Vec<Standing> {
    rank_users(users)
        .into_iter()
        .enumerate()
        .map(|(idx, user)| Standing {
            rank: idx + 1,
            record: user.record(),
            win_percentage: user.win_percentage(),
            user,
        })
        .collect()
}
