//! Database schema and connection management

use crate::error::{PickemError, Result};
use crate::DB_PATH_ENV_VAR;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Database connection manager for contests, picks and awards
pub struct PickemDatabase {
    pub(crate) conn: Connection,
}

impl PickemDatabase {
    /// Open the default database and ensure tables exist
    pub fn new() -> Result<Self> {
        let db_path = Self::database_path()?;
        Self::open(&db_path)
    }

    /// Open (or create) a database file at `path`
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// In-memory database, mainly for tests
    pub fn new_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Path of the database file: `PICKEM_DB_PATH` if set, otherwise under
    /// the user data directory
    pub fn database_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(DB_PATH_ENV_VAR) {
            return Ok(PathBuf::from(path));
        }
        let data_dir = dirs::data_dir().ok_or_else(|| PickemError::Storage {
            message: "Could not determine data directory".to_string(),
        })?;
        Ok(data_dir.join("pickem").join("pickem.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS users (
                user_id INTEGER PRIMARY KEY,
                name TEXT NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS contests (
                contest_id INTEGER PRIMARY KEY,
                season INTEGER NOT NULL,
                week INTEGER NOT NULL,
                season_type TEXT NOT NULL,
                home_team TEXT NOT NULL,
                away_team TEXT NOT NULL,
                home_score INTEGER,
                away_score INTEGER,
                status TEXT NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_contest_period
             ON contests(season, season_type, week)",
            [],
        )?;

        // Rarity flags and point columns are written only by the engine
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS picks (
                pick_id INTEGER PRIMARY KEY,
                user_id INTEGER NOT NULL,
                contest_id INTEGER NOT NULL,
                team TEXT NOT NULL,
                is_lock INTEGER NOT NULL DEFAULT 0,
                solo_pick INTEGER NOT NULL DEFAULT 0,
                solo_lock INTEGER NOT NULL DEFAULT 0,
                super_bonus INTEGER NOT NULL DEFAULT 0,
                is_correct INTEGER,
                base_points INTEGER,
                bonus_points INTEGER,
                total_points INTEGER,
                deleted INTEGER NOT NULL DEFAULT 0,
                FOREIGN KEY (user_id) REFERENCES users(user_id),
                FOREIGN KEY (contest_id) REFERENCES contests(contest_id)
            )",
            [],
        )?;

        // At most one live pick per (user, contest)
        self.conn.execute(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_pick_user_contest
             ON picks(user_id, contest_id) WHERE deleted = 0",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS awards (
                award_id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                season INTEGER NOT NULL,
                week INTEGER NOT NULL,
                season_type TEXT NOT NULL,
                award_type TEXT NOT NULL,
                points INTEGER NOT NULL,
                record TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                FOREIGN KEY (user_id) REFERENCES users(user_id)
            )",
            [],
        )?;

        // Placement and lowest-score awards: one per period
        self.conn.execute(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_award_single
             ON awards(season, week, season_type, award_type)
             WHERE award_type IN ('first_place', 'second_place', 'third_place', 'lowest_score')",
            [],
        )?;

        // Condition awards: one per user per period
        self.conn.execute(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_award_user
             ON awards(season, week, season_type, award_type, user_id)",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS fantasy_stat_lines (
                player_id INTEGER NOT NULL,
                season INTEGER NOT NULL,
                week INTEGER NOT NULL,
                player_name TEXT NOT NULL,
                stats_json TEXT NOT NULL,
                PRIMARY KEY (player_id, season, week)
            )",
            [],
        )?;

        Ok(())
    }
}
