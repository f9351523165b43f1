//! Unit tests for award derivation

use super::*;
use crate::engine::test_support::{agg, period};
use crate::engine::tiebreak::rank_users;

fn awards_of(awards: &[Award], award_type: AwardType) -> Vec<u64> {
    awards
        .iter()
        .filter(|a| a.award_type == award_type)
        .map(|a| a.user_id.as_u64())
        .collect()
}

fn derive(users: Vec<UserAggregate>) -> Vec<Award> {
    let ranked = rank_users(users.clone());
    derive_awards(period(6), &ranked, &users)
}

#[test]
fn test_top_three_placements() {
    let awards = derive(vec![
        agg(1, 4, 4, 8),
        agg(2, 9, 6, 8),
        agg(3, 7, 5, 8),
        agg(4, 8, 5, 8),
    ]);

    assert_eq!(awards_of(&awards, AwardType::FirstPlace), vec![2]);
    assert_eq!(awards_of(&awards, AwardType::SecondPlace), vec![4]);
    assert_eq!(awards_of(&awards, AwardType::ThirdPlace), vec![3]);
    assert_eq!(awards_of(&awards, AwardType::LowestScore), vec![1]);
}

#[test]
fn test_fewer_than_three_users() {
    let awards = derive(vec![agg(1, 3, 2, 3), agg(2, 5, 3, 3)]);

    assert_eq!(awards_of(&awards, AwardType::FirstPlace), vec![2]);
    assert_eq!(awards_of(&awards, AwardType::SecondPlace), vec![1]);
    assert!(awards_of(&awards, AwardType::ThirdPlace).is_empty());
}

#[test]
fn test_no_users_no_awards() {
    assert!(derive(Vec::new()).is_empty());
}

#[test]
fn test_lowest_score_tie_goes_to_first_encountered() {
    let awards = derive(vec![agg(7, 5, 5, 8), agg(3, 1, 3, 8), agg(5, 1, 4, 8)]);
    assert_eq!(awards_of(&awards, AwardType::LowestScore), vec![3]);

    let reordered = derive(vec![agg(5, 1, 4, 8), agg(3, 1, 3, 8), agg(7, 5, 5, 8)]);
    assert_eq!(awards_of(&reordered, AwardType::LowestScore), vec![5]);
}

#[test]
fn test_condition_awards_go_to_every_qualifier() {
    let awards = derive(vec![
        agg(1, 6, 4, 4),
        agg(2, 5, 5, 5),
        agg(3, -3, 0, 3),
        agg(4, 0, 0, 2),
        agg(5, -1, 1, 3),
    ]);

    let mut perfect = awards_of(&awards, AwardType::PerfectWeek);
    perfect.sort();
    assert_eq!(perfect, vec![1, 2]);

    let mut cold = awards_of(&awards, AwardType::ColdWeek);
    cold.sort();
    assert_eq!(cold, vec![3, 4]);

    let mut negative = awards_of(&awards, AwardType::NegativePoints);
    negative.sort();
    assert_eq!(negative, vec![3, 5]);
}

#[test]
fn test_users_without_graded_picks_get_no_condition_awards() {
    let awards = derive(vec![agg(1, 0, 0, 0), agg(2, 1, 1, 2)]);

    assert!(awards_of(&awards, AwardType::PerfectWeek).is_empty());
    assert!(awards_of(&awards, AwardType::ColdWeek).is_empty());
    assert!(awards_of(&awards, AwardType::NegativePoints).is_empty());
}

#[test]
fn test_award_snapshot_fields() {
    let awards = derive(vec![agg(1, 12, 9, 11)]);
    let first = &awards[0];

    assert_eq!(first.award_type, AwardType::FirstPlace);
    assert_eq!(first.points, 12);
    assert_eq!(first.record, "9-2");
    assert_eq!(first.period, period(6));
}

#[test]
fn test_placements_match_standings_order() {
    use crate::engine::tiebreak::standings;

    let users = vec![
        agg(1, 15, 12, 16),
        agg(2, 15, 11, 16),
        agg(3, 15, 2, 4),
        agg(4, 15, 1, 2),
    ];
    let table = standings(users.clone());
    let awards = derive(users);

    let placements: Vec<u64> = [
        AwardType::FirstPlace,
        AwardType::SecondPlace,
        AwardType::ThirdPlace,
    ]
    .iter()
    .flat_map(|t| awards_of(&awards, *t))
    .collect();
    let top3: Vec<u64> = table
        .iter()
        .take(3)
        .map(|s| s.user.user_id.as_u64())
        .collect();

    assert_eq!(placements, top3);
    assert_eq!(placements, vec![1, 2, 3]);
}
