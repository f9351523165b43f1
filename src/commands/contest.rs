//! Single-contest scoring command

use anyhow::{Context, Result};
use std::path::Path;

use crate::{engine::score_contest, ContestId};

use super::open_database;

/// Handle the score-contest command
pub fn handle_score_contest(db_path: Option<&Path>, contest_id: ContestId, as_json: bool) -> Result<()> {
    let mut db = open_database(db_path).context("opening database")?;
    let scored = score_contest(&mut db, contest_id)
        .with_context(|| format!("scoring contest {contest_id}"))?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&scored)?);
        return Ok(());
    }

    for sp in &scored {
        let flags = &sp.pick.rarity;
        let tag = if flags.super_bonus {
            " [super bonus]"
        } else if flags.solo_lock {
            " [solo lock]"
        } else if flags.solo_pick {
            " [solo pick]"
        } else {
            ""
        };
        let result = if sp.is_push {
            "push"
        } else if sp.score.is_correct {
            "win"
        } else {
            "loss"
        };
        println!(
            "pick {} user {} {}{} {} {:+} ({:+} base, {:+} bonus){}",
            sp.pick.pick_id,
            sp.pick.user_id,
            sp.pick.team,
            if sp.pick.is_lock { " (lock)" } else { "" },
            result,
            sp.score.total_points,
            sp.score.base_points,
            sp.score.bonus_points,
            tag,
        );
    }
    Ok(())
}
