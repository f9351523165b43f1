//! Pick'em Contest Scoring Engine
//!
//! Turns raw picks and final game scores into point values, strictly ordered
//! standings, and a once-per-week set of awards.
//!
//! ## Features
//!
//! - **Rarity Classification**: Solo pick, solo lock and super bonus detection per contest
//! - **Pick Scoring**: Base points from correctness and lock, rarity bonuses from week 3 on
//! - **Tiebreaking**: One four-tier comparator shared by live standings and awards
//! - **Weekly Awards**: Idempotent processing of completed weeks, persisted exactly once
//! - **Fantasy Points**: PPR, half-PPR and standard totals for raw stat lines
//! - **Database Storage**: SQLite-backed contests, picks and awards
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pickem_engine::{engine::process_period, storage::PickemDatabase};
//! use pickem_engine::{Period, Season, SeasonType, Week};
//!
//! # fn example() -> pickem_engine::Result<()> {
//! let mut db = PickemDatabase::new()?;
//! let period = Period::new(Week::new(3), Season::new(2024), SeasonType::Regular);
//!
//! let report = process_period(&mut db, period)?;
//! for award in &report.awards {
//!     println!("{} -> user {}", award.award_type, award.user_id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export PICKEM_SEASON=2024          # season used when --season is omitted
//! export PICKEM_DB_PATH=./pickem.db  # database location
//! export RUST_LOG=pickem_engine=debug
//! ```

pub mod cli;
pub mod commands;
pub mod engine;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{ContestId, Period, PickId, ScoringFormat, Season, SeasonType, UserId, Week};
pub use error::{PickemError, Result};

pub const SEASON_ENV_VAR: &str = "PICKEM_SEASON";
pub const DB_PATH_ENV_VAR: &str = "PICKEM_DB_PATH";
