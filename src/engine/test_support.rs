//! Builders shared by the engine's unit tests

use crate::cli::types::{ContestId, Period, PickId, Season, SeasonType, UserId, Week};
use crate::engine::types::{Contest, GameStatus, Pick, UserAggregate};

pub const HOME: &str = "KC";
pub const AWAY: &str = "BUF";

pub fn period(week: u16) -> Period {
    Period::new(Week::new(week), Season::new(2024), SeasonType::Regular)
}

pub fn final_contest(id: u64, week: u16, home_score: u32, away_score: u32) -> Contest {
    Contest {
        contest_id: ContestId::new(id),
        period: period(week),
        home_team: HOME.to_string(),
        away_team: AWAY.to_string(),
        home_score: Some(home_score),
        away_score: Some(away_score),
        status: GameStatus::Completed,
    }
}

pub fn scheduled_contest(id: u64, week: u16) -> Contest {
    Contest {
        home_score: None,
        away_score: None,
        status: GameStatus::Scheduled,
        ..final_contest(id, week, 0, 0)
    }
}

pub fn pick(id: u64, user: u64, contest: u64, team: &str, is_lock: bool) -> Pick {
    Pick {
        pick_id: PickId::new(id),
        user_id: UserId::new(user),
        contest_id: ContestId::new(contest),
        team: team.to_string(),
        is_lock,
        rarity: Default::default(),
        score: None,
    }
}

pub fn agg(user: u64, points: i32, correct: u32, total: u32) -> UserAggregate {
    UserAggregate {
        user_id: UserId::new(user),
        points,
        correct_count: correct,
        total_count: total,
    }
}
