//! Point values for individual picks.

use crate::cli::types::Week;
use crate::engine::types::{ClassifiedPick, PickScore, RarityFlags};


/// Rarity bonuses only apply from this week on.
pub const RARITY_BONUS_START_WEEK: u16 = 3;

pub const CORRECT_POINTS: i32 = 1;
pub const CORRECT_LOCK_POINTS: i32 = 2;
pub const MISSED_LOCK_POINTS: i32 = -2;

pub const SUPER_BONUS_POINTS: i32 = 5;
pub const SOLO_LOCK_BONUS_POINTS: i32 = 2;
pub const SOLO_PICK_BONUS_POINTS: i32 = 2;

/// Base points from correctness and lock status alone.
pub fn base_points(is_correct: bool, is_lock: bool) -> i32 {
    match (is_correct, is_lock) {
        (true, false) => CORRECT_POINTS,
        (true, true) => CORRECT_LOCK_POINTS,
        (false, false) => 0,
        (false, true) => MISSED_LOCK_POINTS,
    }
}

/// Rarity bonus. Incorrect picks and weeks before
/// [`RARITY_BONUS_START_WEEK`] never earn one.
pub fn bonus_points(is_correct: bool, flags: RarityFlags, week: Week) -> i32 {
    if !is_correct || week.as_u16() < RARITY_BONUS_START_WEEK {
        return 0;
    }

    if flags.super_bonus {
        SUPER_BONUS_POINTS
    } else if flags.solo_lock {
        SOLO_LOCK_BONUS_POINTS
    } else if flags.solo_pick {
        SOLO_PICK_BONUS_POINTS
    } else {
        0
    }
}

/// Score one pick. Pure; persisting the result is the caller's job.
pub fn score_pick(is_correct: bool, is_lock: bool, flags: RarityFlags, week: Week) -> PickScore {
    let base = base_points(is_correct, is_lock);
    let bonus = bonus_points(is_correct, flags, week);
    PickScore {
        is_correct,
        base_points: base,
        bonus_points: bonus,
        total_points: base + bonus,
    }
}

impl ClassifiedPick {
    /// Score this pick for the given week. A push scores nothing.
    pub fn score(&self, week: Week) -> PickScore {
        if self.is_push {
            return PickScore::default();
        }
        score_pick(self.is_correct, self.pick.is_lock, self.pick.rarity, week)
    }
}
