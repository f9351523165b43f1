//! Error types for the pick'em scoring engine

use thiserror::Error;

use crate::cli::types::ids::{ContestId, PickId, UserId};


pub type Result<T> = std::result::Result<T, PickemError>;

#[derive(Error, Debug)]
pub enum PickemError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Contest {contest_id} is not completed (status: {status})")]
    ContestNotCompleted { contest_id: ContestId, status: String },

    #[error("Contest {contest_id} is marked completed but has no final score")]
    MissingScores { contest_id: ContestId },

    #[error("Contest not found: {contest_id}")]
    ContestNotFound { contest_id: ContestId },

    #[error("Pick {pick_id} belongs to contest {actual}, not contest {expected}")]
    PickContestMismatch {
        pick_id: PickId,
        expected: ContestId,
        actual: ContestId,
    },

    #[error("Point total overflowed for user {user_id}")]
    PointsOverflow { user_id: UserId },

    #[error("Invalid season type: {value}")]
    InvalidSeasonType { value: String },

    #[error("Invalid game status: {value}")]
    InvalidGameStatus { value: String },

    #[error("Invalid award type: {value}")]
    InvalidAwardType { value: String },

    #[error("Invalid scoring format: {value}")]
    InvalidScoringFormat { value: String },

    #[error("Season not provided and {env_var} environment variable not set")]
    MissingSeason { env_var: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}
