//! Database query operations and the [`PickemStore`] implementation

use super::{models::*, schema::PickemDatabase};
use crate::cli::types::{ContestId, Period, PickId, Season, SeasonType, UserId, Week};
use crate::engine::{
    Award, Contest, FantasyStatLine, PersistOutcome, Pick, PickScore, PickemStore, RarityFlags,
    ScoredPick,
};
use crate::error::{PickemError, Result};
use rusqlite::{params, types::Type, OptionalExtension, Row, TransactionBehavior};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

const CONTEST_COLUMNS: &str = "contest_id, season, week, season_type, home_team, away_team,
     home_score, away_score, status";

const PICK_COLUMNS: &str = "p.pick_id, p.user_id, p.contest_id, p.team, p.is_lock,
     p.solo_pick, p.solo_lock, p.super_bonus,
     p.is_correct, p.base_points, p.bonus_points, p.total_points";

/// Parse a TEXT column through `FromStr`
fn parse_column<T>(row: &Row, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr<Err = PickemError>,
{
    let raw: String = row.get(idx)?;
    raw.parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn now_secs() -> Result<u64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|e| PickemError::Storage {
            message: e.to_string(),
        })
}

impl PickemDatabase {
    fn row_to_contest(row: &Row) -> rusqlite::Result<Contest> {
        Ok(Contest {
            contest_id: ContestId::new(row.get(0)?),
            period: Period::new(
                Week::new(row.get(2)?),
                Season::new(row.get(1)?),
                parse_column(row, 3)?,
            ),
            home_team: row.get(4)?,
            away_team: row.get(5)?,
            home_score: row.get(6)?,
            away_score: row.get(7)?,
            status: parse_column(row, 8)?,
        })
    }

    fn row_to_pick(row: &Row) -> rusqlite::Result<Pick> {
        let is_correct: Option<bool> = row.get(8)?;
        let base_points: Option<i32> = row.get(9)?;
        let bonus_points: Option<i32> = row.get(10)?;
        let total_points: Option<i32> = row.get(11)?;

        let score = match (base_points, bonus_points, total_points) {
            (Some(base_points), Some(bonus_points), Some(total_points)) => Some(PickScore {
                is_correct: is_correct.unwrap_or(false),
                base_points,
                bonus_points,
                total_points,
            }),
            _ => None,
        };

        Ok(Pick {
            pick_id: PickId::new(row.get(0)?),
            user_id: UserId::new(row.get(1)?),
            contest_id: ContestId::new(row.get(2)?),
            team: row.get(3)?,
            is_lock: row.get(4)?,
            rarity: RarityFlags {
                solo_pick: row.get(5)?,
                solo_lock: row.get(6)?,
                super_bonus: row.get(7)?,
            },
            score,
        })
    }

    fn row_to_award(row: &Row) -> rusqlite::Result<Award> {
        Ok(Award {
            user_id: UserId::new(row.get(0)?),
            period: Period::new(
                Week::new(row.get(2)?),
                Season::new(row.get(1)?),
                parse_column(row, 3)?,
            ),
            award_type: parse_column(row, 4)?,
            points: row.get(5)?,
            record: row.get(6)?,
        })
    }

    /// Insert or update a user's display name
    pub fn upsert_user(&mut self, user: &User) -> Result<()> {
        self.conn.execute(
            "INSERT INTO users (user_id, name) VALUES (?, ?)
             ON CONFLICT(user_id) DO UPDATE SET name = excluded.name",
            params![user.user_id.as_u64(), user.name],
        )?;
        Ok(())
    }

    /// Get all users ordered by id
    pub fn list_users(&self) -> Result<Vec<User>> {
        let mut stmt = self
            .conn
            .prepare("SELECT user_id, name FROM users ORDER BY user_id")?;
        let rows = stmt.query_map([], |row| {
            Ok(User {
                user_id: UserId::new(row.get(0)?),
                name: row.get(1)?,
            })
        })?;

        let mut users = Vec::new();
        for row in rows {
            users.push(row?);
        }
        Ok(users)
    }

    /// Insert or update a contest. Results may arrive after the schedule, so
    /// scores and status are overwritten on conflict.
    pub fn upsert_contest(&mut self, contest: &Contest) -> Result<()> {
        self.conn.execute(
            "INSERT INTO contests
             (contest_id, season, week, season_type, home_team, away_team,
              home_score, away_score, status)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(contest_id) DO UPDATE SET
                season = excluded.season,
                week = excluded.week,
                season_type = excluded.season_type,
                home_team = excluded.home_team,
                away_team = excluded.away_team,
                home_score = excluded.home_score,
                away_score = excluded.away_score,
                status = excluded.status",
            params![
                contest.contest_id.as_u64(),
                contest.period.season.as_u16(),
                contest.period.week.as_u16(),
                contest.period.season_type.as_str(),
                contest.home_team,
                contest.away_team,
                contest.home_score,
                contest.away_score,
                contest.status.as_str(),
            ],
        )?;
        Ok(())
    }

    /// Insert or update a pick's side and lock flag.
    ///
    /// Engine-owned columns (rarity flags, points) are left untouched; a user
    /// row is created on the fly if the pick references an unknown user.
    pub fn upsert_pick(&mut self, pick: &Pick) -> Result<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO users (user_id, name) VALUES (?, ?)",
            params![pick.user_id.as_u64(), format!("user-{}", pick.user_id)],
        )?;
        self.conn.execute(
            "INSERT INTO picks (pick_id, user_id, contest_id, team, is_lock)
             VALUES (?, ?, ?, ?, ?)
             ON CONFLICT(pick_id) DO UPDATE SET
                team = excluded.team,
                is_lock = excluded.is_lock,
                deleted = 0",
            params![
                pick.pick_id.as_u64(),
                pick.user_id.as_u64(),
                pick.contest_id.as_u64(),
                pick.team,
                pick.is_lock,
            ],
        )?;
        Ok(())
    }

    /// Soft-delete a pick. Returns true if a live pick was deleted.
    pub fn delete_pick(&mut self, pick_id: PickId) -> Result<bool> {
        let rows = self.conn.execute(
            "UPDATE picks SET deleted = 1 WHERE pick_id = ? AND deleted = 0",
            params![pick_id.as_u64()],
        )?;
        Ok(rows > 0)
    }

    /// Insert or replace a stat line. Season and week are required here.
    pub fn upsert_stat_line(&mut self, line: &FantasyStatLine) -> Result<()> {
        let (Some(season), Some(week)) = (line.season, line.week) else {
            return Err(PickemError::Storage {
                message: format!("stat line for player {} has no season/week", line.player_id),
            });
        };
        self.conn.execute(
            "INSERT OR REPLACE INTO fantasy_stat_lines
             (player_id, season, week, player_name, stats_json)
             VALUES (?, ?, ?, ?, ?)",
            params![
                line.player_id,
                season.as_u16(),
                week.as_u16(),
                line.player_name,
                serde_json::to_string(line)?,
            ],
        )?;
        Ok(())
    }

    /// Get every stat line for one week
    pub fn list_stat_lines(&self, season: Season, week: Week) -> Result<Vec<FantasyStatLine>> {
        let mut stmt = self.conn.prepare(
            "SELECT stats_json FROM fantasy_stat_lines
             WHERE season = ? AND week = ?
             ORDER BY player_id",
        )?;
        let rows = stmt.query_map(params![season.as_u16(), week.as_u16()], |row| {
            row.get::<_, String>(0)
        })?;

        let mut lines = Vec::new();
        for row in rows {
            lines.push(serde_json::from_str(&row?)?);
        }
        Ok(lines)
    }

    /// Load a bundle of users, contests, picks and stat lines in one transaction
    pub fn import_bundle(&mut self, bundle: &ImportBundle) -> Result<ImportSummary> {
        self.conn.execute_batch("BEGIN")?;
        let result = (|| -> Result<ImportSummary> {
            for user in &bundle.users {
                self.upsert_user(user)?;
            }
            for contest in &bundle.contests {
                self.upsert_contest(contest)?;
            }
            for pick in &bundle.picks {
                self.upsert_pick(pick)?;
            }
            for line in &bundle.stat_lines {
                self.upsert_stat_line(line)?;
            }
            Ok(ImportSummary {
                users: bundle.users.len(),
                contests: bundle.contests.len(),
                picks: bundle.picks.len(),
                stat_lines: bundle.stat_lines.len(),
            })
        })();

        match result {
            Ok(summary) => {
                self.conn.execute_batch("COMMIT")?;
                Ok(summary)
            }
            Err(e) => {
                self.conn.execute_batch("ROLLBACK")?;
                Err(e)
            }
        }
    }

    /// Remove all data from the database
    pub fn clear_all_data(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "DELETE FROM awards;
             DELETE FROM picks;
             DELETE FROM contests;
             DELETE FROM users;
             DELETE FROM fantasy_stat_lines;",
        )?;
        Ok(())
    }
}

impl PickemStore for PickemDatabase {
    fn get_contest(&self, contest_id: ContestId) -> Result<Contest> {
        let sql = format!("SELECT {CONTEST_COLUMNS} FROM contests WHERE contest_id = ?");
        self.conn
            .query_row(&sql, params![contest_id.as_u64()], Self::row_to_contest)
            .optional()?
            .ok_or(PickemError::ContestNotFound { contest_id })
    }

    fn list_picks_for_contest(&self, contest_id: ContestId) -> Result<Vec<Pick>> {
        let sql = format!(
            "SELECT {PICK_COLUMNS} FROM picks p
             WHERE p.contest_id = ? AND p.deleted = 0
             ORDER BY p.pick_id"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![contest_id.as_u64()], Self::row_to_pick)?;

        let mut picks = Vec::new();
        for row in rows {
            picks.push(row?);
        }
        Ok(picks)
    }

    fn list_contests_for_period(&self, period: &Period) -> Result<Vec<Contest>> {
        let sql = format!(
            "SELECT {CONTEST_COLUMNS} FROM contests
             WHERE season = ? AND week = ? AND season_type = ?
             ORDER BY contest_id"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(
            params![
                period.season.as_u16(),
                period.week.as_u16(),
                period.season_type.as_str()
            ],
            Self::row_to_contest,
        )?;

        let mut contests = Vec::new();
        for row in rows {
            contests.push(row?);
        }
        Ok(contests)
    }

    fn list_picks_for_period(&self, period: &Period) -> Result<Vec<Pick>> {
        let sql = format!(
            "SELECT {PICK_COLUMNS} FROM picks p
             JOIN contests c ON c.contest_id = p.contest_id
             WHERE c.season = ? AND c.week = ? AND c.season_type = ? AND p.deleted = 0
             ORDER BY p.pick_id"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(
            params![
                period.season.as_u16(),
                period.week.as_u16(),
                period.season_type.as_str()
            ],
            Self::row_to_pick,
        )?;

        let mut picks = Vec::new();
        for row in rows {
            picks.push(row?);
        }
        Ok(picks)
    }

    fn awards_exist_for_period(&self, period: &Period) -> Result<bool> {
        let exists = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM awards
                           WHERE season = ? AND week = ? AND season_type = ?)",
            params![
                period.season.as_u16(),
                period.week.as_u16(),
                period.season_type.as_str()
            ],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    fn list_awards_for_period(&self, period: &Period) -> Result<Vec<Award>> {
        let mut stmt = self.conn.prepare(
            "SELECT user_id, season, week, season_type, award_type, points, record
             FROM awards
             WHERE season = ? AND week = ? AND season_type = ?
             ORDER BY award_id",
        )?;
        let rows = stmt.query_map(
            params![
                period.season.as_u16(),
                period.week.as_u16(),
                period.season_type.as_str()
            ],
            Self::row_to_award,
        )?;

        let mut awards = Vec::new();
        for row in rows {
            awards.push(row?);
        }
        Ok(awards)
    }

    fn list_weeks(&self, season: Season, season_type: SeasonType) -> Result<Vec<Week>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT week FROM contests
             WHERE season = ? AND season_type = ?
             ORDER BY week",
        )?;
        let rows = stmt.query_map(params![season.as_u16(), season_type.as_str()], |row| {
            row.get::<_, u16>(0).map(Week::new)
        })?;

        let mut weeks = Vec::new();
        for row in rows {
            weeks.push(row?);
        }
        Ok(weeks)
    }

    fn save_pick_results(&mut self, scored: &[ScoredPick]) -> Result<()> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "UPDATE picks SET
                    solo_pick = ?, solo_lock = ?, super_bonus = ?,
                    is_correct = ?, base_points = ?, bonus_points = ?, total_points = ?
                 WHERE pick_id = ?",
            )?;
            for sp in scored {
                // Pushes are stored with a NULL correctness
                let is_correct = (!sp.is_push).then_some(sp.score.is_correct);
                stmt.execute(params![
                    sp.pick.rarity.solo_pick,
                    sp.pick.rarity.solo_lock,
                    sp.pick.rarity.super_bonus,
                    is_correct,
                    sp.score.base_points,
                    sp.score.bonus_points,
                    sp.score.total_points,
                    sp.pick.pick_id.as_u64(),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn persist_period_awards(&mut self, period: &Period, awards: &[Award]) -> Result<PersistOutcome> {
        let now = now_secs()?;
        // IMMEDIATE takes the write lock up front, so the existence check and
        // the inserts cannot interleave with another writer
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let exists: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM awards
                           WHERE season = ? AND week = ? AND season_type = ?)",
            params![
                period.season.as_u16(),
                period.week.as_u16(),
                period.season_type.as_str()
            ],
            |row| row.get(0),
        )?;
        if exists {
            return Ok(PersistOutcome::AlreadyProcessed);
        }

        let mut inserted = 0;
        {
            let mut stmt = tx.prepare(
                "INSERT OR IGNORE INTO awards
                 (user_id, season, week, season_type, award_type, points, record, created_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            )?;
            for award in awards {
                inserted += stmt.execute(params![
                    award.user_id.as_u64(),
                    award.period.season.as_u16(),
                    award.period.week.as_u16(),
                    award.period.season_type.as_str(),
                    award.award_type.as_str(),
                    award.points,
                    award.record,
                    now,
                ])?;
            }
        }
        tx.commit()?;
        Ok(PersistOutcome::Inserted(inserted))
    }
}
