//! Rarity classification for the picks on one finished contest.
//!
//! Whether a pick is the *only* correct one cannot be known until every pick
//! on the contest has been seen, so classification is a two-pass operation:
//! count correct picks first, then assign flags.

use tracing::debug;

use crate::engine::types::{ClassifiedPick, Contest, Outcome, Pick, RarityFlags};
use crate::error::{PickemError, Result};


/// Compute the rarity flags for a single pick given the contest-wide counts.
pub fn rarity_flags(
    is_correct: bool,
    is_lock: bool,
    correct_picks: usize,
    correct_locks: usize,
) -> RarityFlags {
    let solo_pick = is_correct && correct_picks == 1;
    let solo_lock = is_correct && is_lock && correct_locks == 1;
    RarityFlags {
        solo_pick,
        solo_lock,
        super_bonus: solo_pick && solo_lock,
    }
}

/// Classify every pick on a completed contest.
///
/// Returns one [`ClassifiedPick`] per input pick, in input order, with its
/// rarity flags attached. A tied contest has no winner: every pick is a push
/// and carries no flags. Re-running on the same inputs yields the same flags.
pub fn classify_contest_picks(contest: &Contest, picks: &[Pick]) -> Result<Vec<ClassifiedPick>> {
    let outcome = contest.outcome()?;

    for pick in picks {
        if pick.contest_id != contest.contest_id {
            return Err(PickemError::PickContestMismatch {
                pick_id: pick.pick_id,
                expected: contest.contest_id,
                actual: pick.contest_id,
            });
        }
    }

    let winner = match outcome {
        Outcome::Winner(team) => team,
        Outcome::Tie => {
            debug!(contest_id = %contest.contest_id, picks = picks.len(), "tied contest, no pick graded");
            return Ok(picks
                .iter()
                .map(|pick| ClassifiedPick {
                    pick: Pick {
                        rarity: RarityFlags::default(),
                        score: None,
                        ..pick.clone()
                    },
                    is_correct: false,
                    is_push: true,
                })
                .collect());
        }
    };

    // First pass: contest-wide counts
    let correct_picks = picks.iter().filter(|p| p.team == winner).count();
    let correct_locks = picks
        .iter()
        .filter(|p| p.team == winner && p.is_lock)
        .count();

    debug!(
        contest_id = %contest.contest_id,
        winner,
        correct_picks,
        correct_locks,
        "classified contest"
    );

    // Second pass: per-pick flags
    Ok(picks
        .iter()
        .map(|pick| {
            let is_correct = pick.team == winner;
            ClassifiedPick {
                pick: Pick {
                    rarity: rarity_flags(is_correct, pick.is_lock, correct_picks, correct_locks),
                    score: None,
                    ..pick.clone()
                },
                is_correct,
                is_push: false,
            }
        })
        .collect())
}
