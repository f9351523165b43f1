//! Domain records consumed and produced by the scoring engine.

use crate::cli::types::{ContestId, Period, PickId, UserId};
use crate::error::{PickemError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a contest as reported by the results provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Scheduled,
    InProgress,
    Completed,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Scheduled => "scheduled",
            GameStatus::InProgress => "in_progress",
            GameStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameStatus {
    type Err = PickemError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "scheduled" => Ok(Self::Scheduled),
            "in_progress" | "inprogress" => Ok(Self::InProgress),
            "completed" | "final" => Ok(Self::Completed),
            _ => Err(PickemError::InvalidGameStatus {
                value: s.to_string(),
            }),
        }
    }
}

/// One matchup within a period. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contest {
    pub contest_id: ContestId,
    #[serde(flatten)]
    pub period: Period,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
    pub status: GameStatus,
}

/// Final result of a completed contest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    Winner(&'a str),
    Tie,
}

impl Contest {
    pub fn is_completed(&self) -> bool {
        self.status == GameStatus::Completed
    }

    /// Winning side of a finished contest.
    ///
    /// Fails instead of guessing when the contest is not completed or its
    /// scores are missing.
    pub fn outcome(&self) -> Result<Outcome<'_>> {
        if !self.is_completed() {
            return Err(PickemError::ContestNotCompleted {
                contest_id: self.contest_id,
                status: self.status.to_string(),
            });
        }

        let (Some(home), Some(away)) = (self.home_score, self.away_score) else {
            return Err(PickemError::MissingScores {
                contest_id: self.contest_id,
            });
        };

        Ok(match home.cmp(&away) {
            std::cmp::Ordering::Greater => Outcome::Winner(&self.home_team),
            std::cmp::Ordering::Less => Outcome::Winner(&self.away_team),
            std::cmp::Ordering::Equal => Outcome::Tie,
        })
    }
}

/// Rarity flags assigned by the classifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RarityFlags {
    /// Only correct pick on the contest
    pub solo_pick: bool,
    /// Only correct locked pick on the contest
    pub solo_lock: bool,
    /// Both of the above
    pub super_bonus: bool,
}

/// Point value of one pick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickScore {
    pub is_correct: bool,
    pub base_points: i32,
    pub bonus_points: i32,
    pub total_points: i32,
}

/// One user's choice of side for one contest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pick {
    pub pick_id: PickId,
    pub user_id: UserId,
    pub contest_id: ContestId,
    /// Team identifier the user picked to win
    pub team: String,
    #[serde(default)]
    pub is_lock: bool,
    #[serde(default)]
    pub rarity: RarityFlags,
    /// Last score written back by the engine, if any
    #[serde(default)]
    pub score: Option<PickScore>,
}

/// A pick after rarity classification against its contest's final result
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedPick {
    pub pick: Pick,
    pub is_correct: bool,
    /// Contest ended in a tie; the pick is neither right nor wrong
    pub is_push: bool,
}

/// A pick with its computed score, ready to be written back
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPick {
    pub pick: Pick,
    pub is_push: bool,
    pub score: PickScore,
}

/// Per-user totals over a period. Rebuilt from scratch on every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAggregate {
    pub user_id: UserId,
    pub points: i32,
    pub correct_count: u32,
    pub total_count: u32,
}

impl UserAggregate {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            points: 0,
            correct_count: 0,
            total_count: 0,
        }
    }

    pub fn losses(&self) -> u32 {
        self.total_count.saturating_sub(self.correct_count)
    }

    /// Win percentage for display; 0.0 when no picks were graded
    pub fn win_percentage(&self) -> f64 {
        if self.total_count == 0 {
            0.0
        } else {
            self.correct_count as f64 / self.total_count as f64
        }
    }

    /// Win/loss record, e.g. `12-4`
    pub fn record(&self) -> String {
        format!("{}-{}", self.correct_count, self.losses())
    }
}

/// Award categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AwardType {
    FirstPlace,
    SecondPlace,
    ThirdPlace,
    LowestScore,
    PerfectWeek,
    ColdWeek,
    NegativePoints,
}

impl AwardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AwardType::FirstPlace => "first_place",
            AwardType::SecondPlace => "second_place",
            AwardType::ThirdPlace => "third_place",
            AwardType::LowestScore => "lowest_score",
            AwardType::PerfectWeek => "perfect_week",
            AwardType::ColdWeek => "cold_week",
            AwardType::NegativePoints => "negative_points",
        }
    }

    /// Condition-triggered awards may go to every qualifying user; the rest
    /// are given at most once per period.
    pub fn is_condition(&self) -> bool {
        matches!(
            self,
            AwardType::PerfectWeek | AwardType::ColdWeek | AwardType::NegativePoints
        )
    }
}

impl fmt::Display for AwardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for AwardType {
    type Err = PickemError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "first_place" => Ok(Self::FirstPlace),
            "second_place" => Ok(Self::SecondPlace),
            "third_place" => Ok(Self::ThirdPlace),
            "lowest_score" => Ok(Self::LowestScore),
            "perfect_week" => Ok(Self::PerfectWeek),
            "cold_week" => Ok(Self::ColdWeek),
            "negative_points" => Ok(Self::NegativePoints),
            _ => Err(PickemError::InvalidAwardType {
                value: s.to_string(),
            }),
        }
    }
}

/// Award given to one user for one period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub user_id: UserId,
    #[serde(flatten)]
    pub period: Period,
    pub award_type: AwardType,
    /// Points at the time the award was computed
    pub points: i32,
    /// Win/loss record, e.g. `12-4`
    pub record: String,
}
