//! Unit tests for storage functionality

use super::*;
use crate::cli::types::{ContestId, Period, PickId, Season, SeasonType, UserId, Week};
use crate::engine::{
    process_period, Award, AwardType, Contest, FantasyStatLine, GameStatus, PersistOutcome, Pick,
    PickemStore, ProcessOutcome,
};
use crate::error::PickemError;

fn create_test_db() -> PickemDatabase {
    // Create in-memory database for testing
    let conn = rusqlite::Connection::open_in_memory().unwrap();

    // Enable foreign keys for testing
    conn.execute("PRAGMA foreign_keys = ON", []).unwrap();

    let mut db = PickemDatabase { conn };
    db.initialize_schema().unwrap();
    db
}

fn week(n: u16) -> Period {
    Period::new(Week::new(n), Season::new(2024), SeasonType::Regular)
}

fn contest(id: u64, period: Period, scores: Option<(u32, u32)>) -> Contest {
    Contest {
        contest_id: ContestId::new(id),
        period,
        home_team: "DAL".to_string(),
        away_team: "PHI".to_string(),
        home_score: scores.map(|s| s.0),
        away_score: scores.map(|s| s.1),
        status: if scores.is_some() {
            GameStatus::Completed
        } else {
            GameStatus::Scheduled
        },
    }
}

fn pick(id: u64, user: u64, contest: u64, team: &str, is_lock: bool) -> Pick {
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

fn award(user: u64, period: Period, award_type: AwardType) -> Award {
    Award {
        user_id: UserId::new(user),
        period,
        award_type,
        points: 3,
        record: "1-0".to_string(),
    }
}

/// Week 3 with one finished contest and two picks
fn create_test_db_with_week() -> PickemDatabase {
    let mut db = create_test_db();
    db.upsert_contest(&contest(1, week(3), Some((27, 20)))).unwrap();
    db.upsert_pick(&pick(1, 10, 1, "DAL", true)).unwrap();
    db.upsert_pick(&pick(2, 11, 1, "PHI", false)).unwrap();
    db
}

#[test]
fn test_database_creation() {
    let _db = create_test_db();
    // Should not panic - database creation successful
}

#[test]
fn test_schema_is_reentrant() {
    let mut db = create_test_db();
    assert!(db.initialize_schema().is_ok());
}

#[test]
fn test_upsert_user() {
    let mut db = create_test_db();

    db.upsert_user(&User {
        user_id: UserId::new(1),
        name: "dana".to_string(),
    })
    .unwrap();
    db.upsert_user(&User {
        user_id: UserId::new(1),
        name: "Dana".to_string(),
    })
    .unwrap();

    let users = db.list_users().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Dana");
}

#[test]
fn test_contest_round_trip_and_result_update() {
    let mut db = create_test_db();
    db.upsert_contest(&contest(5, week(2), None)).unwrap();

    let stored = db.get_contest(ContestId::new(5)).unwrap();
    assert_eq!(stored.status, GameStatus::Scheduled);
    assert_eq!(stored.home_score, None);

    db.upsert_contest(&contest(5, week(2), Some((14, 17)))).unwrap();
    let stored = db.get_contest(ContestId::new(5)).unwrap();
    assert_eq!(stored, contest(5, week(2), Some((14, 17))));
}

#[test]
fn test_get_unknown_contest() {
    let db = create_test_db();
    assert!(matches!(
        db.get_contest(ContestId::new(404)),
        Err(PickemError::ContestNotFound { .. })
    ));
}

#[test]
fn test_list_contests_for_period_filters() {
    let mut db = create_test_db();
    db.upsert_contest(&contest(1, week(3), None)).unwrap();
    db.upsert_contest(&contest(2, week(4), None)).unwrap();
    let mut playoff = contest(3, week(3), None);
    playoff.period.season_type = SeasonType::Playoffs;
    db.upsert_contest(&playoff).unwrap();

    let contests = db.list_contests_for_period(&week(3)).unwrap();
    assert_eq!(contests.len(), 1);
    assert_eq!(contests[0].contest_id, ContestId::new(1));

    let weeks = db.list_weeks(Season::new(2024), SeasonType::Regular).unwrap();
    assert_eq!(weeks, vec![Week::new(3), Week::new(4)]);
}

#[test]
fn test_upsert_pick_creates_user() {
    let db = create_test_db_with_week();

    let users = db.list_users().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "user-10");
}

#[test]
fn test_pick_requires_known_contest() {
    let mut db = create_test_db();
    let result = db.upsert_pick(&pick(1, 10, 99, "DAL", false));
    assert!(matches!(result, Err(PickemError::Sqlite(_))));
}

#[test]
fn test_one_live_pick_per_user_and_contest() {
    let mut db = create_test_db_with_week();

    let duplicate = db.upsert_pick(&pick(3, 10, 1, "PHI", false));
    assert!(duplicate.is_err());

    // Once the first pick is deleted the user may pick again
    assert!(db.delete_pick(PickId::new(1)).unwrap());
    db.upsert_pick(&pick(3, 10, 1, "PHI", false)).unwrap();
}

#[test]
fn test_deleted_picks_are_hidden() {
    let mut db = create_test_db_with_week();

    assert!(db.delete_pick(PickId::new(2)).unwrap());
    assert!(!db.delete_pick(PickId::new(2)).unwrap());

    let picks = db.list_picks_for_contest(ContestId::new(1)).unwrap();
    assert_eq!(picks.len(), 1);
    assert_eq!(db.list_picks_for_period(&week(3)).unwrap().len(), 1);
}

#[test]
fn test_pick_results_written_back() {
    let mut db = create_test_db_with_week();

    let report = process_period(&mut db, week(3)).unwrap();
    assert_eq!(report.outcome, ProcessOutcome::Processed);

    let picks = db.list_picks_for_contest(ContestId::new(1)).unwrap();
    let winner = &picks[0];
    assert!(winner.rarity.super_bonus);
    let score = winner.score.unwrap();
    assert!(score.is_correct);
    assert_eq!(score.base_points, 2);
    assert_eq!(score.bonus_points, 5);
    assert_eq!(score.total_points, 7);

    let loser = picks[1].score.unwrap();
    assert!(!loser.is_correct);
    assert_eq!(loser.total_points, 0);
}

#[test]
fn test_pick_upsert_keeps_engine_columns() {
    let mut db = create_test_db_with_week();
    process_period(&mut db, week(3)).unwrap();

    db.upsert_pick(&pick(1, 10, 1, "DAL", true)).unwrap();

    let picks = db.list_picks_for_contest(ContestId::new(1)).unwrap();
    assert_eq!(picks[0].score.unwrap().total_points, 7);
}

#[test]
fn test_tied_contest_stores_push() {
    let mut db = create_test_db();
    db.upsert_contest(&contest(1, week(5), Some((20, 20)))).unwrap();
    db.upsert_pick(&pick(1, 10, 1, "DAL", true)).unwrap();

    process_period(&mut db, week(5)).unwrap();

    let stored: Option<bool> = db
        .conn
        .query_row("SELECT is_correct FROM picks WHERE pick_id = 1", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(stored, None);

    let pick = &db.list_picks_for_contest(ContestId::new(1)).unwrap()[0];
    assert_eq!(pick.score.unwrap().total_points, 0);
}

#[test]
fn test_persist_awards_once() {
    let mut db = create_test_db_with_week();
    let awards = vec![
        award(10, week(3), AwardType::FirstPlace),
        award(11, week(3), AwardType::SecondPlace),
    ];

    assert!(!db.awards_exist_for_period(&week(3)).unwrap());
    let first = db.persist_period_awards(&week(3), &awards).unwrap();
    assert_eq!(first, PersistOutcome::Inserted(2));
    assert!(db.awards_exist_for_period(&week(3)).unwrap());

    let second = db.persist_period_awards(&week(3), &awards).unwrap();
    assert_eq!(second, PersistOutcome::AlreadyProcessed);
    assert_eq!(db.list_awards_for_period(&week(3)).unwrap(), awards);
}

#[test]
fn test_awards_are_scoped_to_period() {
    let mut db = create_test_db_with_week();
    db.persist_period_awards(&week(3), &[award(10, week(3), AwardType::FirstPlace)])
        .unwrap();

    let mut playoffs = week(3);
    playoffs.season_type = SeasonType::Playoffs;
    assert!(!db.awards_exist_for_period(&playoffs).unwrap());
    assert!(!db.awards_exist_for_period(&week(4)).unwrap());
}

#[test]
fn test_single_award_unique_per_period() {
    let mut db = create_test_db_with_week();
    let awards = vec![
        award(10, week(3), AwardType::FirstPlace),
        award(11, week(3), AwardType::FirstPlace),
        award(10, week(3), AwardType::ColdWeek),
        award(11, week(3), AwardType::ColdWeek),
    ];

    let outcome = db.persist_period_awards(&week(3), &awards).unwrap();

    // The second first-place row is ignored; both condition awards stay
    assert_eq!(outcome, PersistOutcome::Inserted(3));
    let stored = db.list_awards_for_period(&week(3)).unwrap();
    assert_eq!(stored[0].user_id, UserId::new(10));
}

#[test]
fn test_stat_lines_round_trip() {
    let mut db = create_test_db();
    let line = FantasyStatLine {
        player_id: 4046,
        player_name: "Test Receiver".to_string(),
        season: Some(Season::new(2024)),
        week: Some(Week::new(6)),
        receptions: 8,
        receiving_yards: 112,
        ..Default::default()
    };

    db.upsert_stat_line(&line).unwrap();
    db.upsert_stat_line(&line).unwrap();

    let lines = db.list_stat_lines(Season::new(2024), Week::new(6)).unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].receptions, 8);
    assert!(db
        .list_stat_lines(Season::new(2024), Week::new(7))
        .unwrap()
        .is_empty());
}

#[test]
fn test_stat_line_requires_week() {
    let mut db = create_test_db();
    let line = FantasyStatLine {
        player_id: 1,
        season: Some(Season::new(2024)),
        ..Default::default()
    };
    assert!(matches!(
        db.upsert_stat_line(&line),
        Err(PickemError::Storage { .. })
    ));
}

#[test]
fn test_import_bundle() {
    let mut db = create_test_db();
    let bundle = ImportBundle {
        users: vec![User {
            user_id: UserId::new(10),
            name: "Avery".to_string(),
        }],
        contests: vec![contest(1, week(1), Some((3, 0)))],
        picks: vec![pick(1, 10, 1, "DAL", false), pick(2, 11, 1, "PHI", false)],
        stat_lines: Vec::new(),
    };

    let summary = db.import_bundle(&bundle).unwrap();

    assert_eq!(summary.contests, 1);
    assert_eq!(summary.picks, 2);
    assert_eq!(db.list_users().unwrap()[0].name, "Avery");
    assert_eq!(db.list_picks_for_period(&week(1)).unwrap().len(), 2);
}

#[test]
fn test_import_bundle_rolls_back_on_error() {
    let mut db = create_test_db();
    let bundle = ImportBundle {
        contests: vec![contest(1, week(1), None)],
        // Contest 2 does not exist
        picks: vec![pick(1, 10, 1, "DAL", false), pick(2, 10, 2, "DAL", false)],
        ..Default::default()
    };

    assert!(db.import_bundle(&bundle).is_err());
    assert!(db.list_contests_for_period(&week(1)).unwrap().is_empty());
    assert!(db.list_users().unwrap().is_empty());
}

#[test]
fn test_clear_all_data() {
    let mut db = create_test_db_with_week();
    process_period(&mut db, week(3)).unwrap();

    db.clear_all_data().unwrap();

    assert!(db.list_users().unwrap().is_empty());
    assert!(db.list_contests_for_period(&week(3)).unwrap().is_empty());
    assert!(!db.awards_exist_for_period(&week(3)).unwrap());
}
