//! Unit tests for fantasy point calculation

use super::*;

fn qb_line() -> FantasyStatLine {
    FantasyStatLine {
        player_id: 1,
        player_name: "Test QB".to_string(),
        passing_yards: 300,
        passing_tds: 3,
        interceptions: 1,
        ..Default::default()
    }
}

fn wr_line() -> FantasyStatLine {
    FantasyStatLine {
        player_id: 2,
        player_name: "Test WR".to_string(),
        receptions: 10,
        receiving_yards: 112,
        receiving_tds: 1,
        ..Default::default()
    }
}

#[cfg(test)]
mod format_tests {
    use super::*;

    #[test]
    fn test_no_receptions_is_format_independent() {
        let totals = calculate_all_formats(&qb_line());
        // 300 * 0.04 + 3 * 4 - 2
        assert_eq!(totals.ppr, 22.0);
        assert_eq!(totals.half_ppr, 22.0);
        assert_eq!(totals.standard, 22.0);
    }

    #[test]
    fn test_receptions_differ_by_format() {
        let totals = calculate_all_formats(&wr_line());
        assert_eq!(totals.standard, 17.2);
        assert_eq!(totals.half_ppr, 22.2);
        assert_eq!(totals.ppr, 27.2);
        assert!((totals.ppr - totals.standard - 10.0).abs() < 1e-9);
        assert!((totals.half_ppr - totals.standard - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_format_matches_all_formats() {
        for line in [qb_line(), wr_line()] {
            let totals = calculate_all_formats(&line);
            for format in ScoringFormat::ALL {
                assert_eq!(calculate_fantasy_points(&line, format), totals.get(format));
            }
        }
    }

    #[test]
    fn test_rounded_to_two_decimals() {
        let line = FantasyStatLine {
            rushing_yards: 7,
            passing_yards: 1,
            ..Default::default()
        };
        // 0.7 + 0.04
        assert_eq!(calculate_fantasy_points(&line, ScoringFormat::Standard), 0.74);
    }

    #[test]
    fn test_empty_line_scores_zero() {
        assert_eq!(
            calculate_all_formats(&FantasyStatLine::default()),
            FormatTotals::default()
        );
    }
}

#[cfg(test)]
mod category_tests {
    use super::*;

    #[test]
    fn test_kicker() {
        let line = FantasyStatLine {
            fg_made_0_39: 2,
            fg_made_40_49: 1,
            fg_made_50_plus: 1,
            fg_missed: 1,
            xp_made: 3,
            xp_missed: 1,
            ..Default::default()
        };
        // 6 + 4 + 5 - 1 + 3 - 1
        assert_eq!(calculate_fantasy_points(&line, ScoringFormat::Ppr), 16.0);
    }

    #[test]
    fn test_defense_with_points_allowed() {
        let line = FantasyStatLine {
            sacks: 3.5,
            def_interceptions: 1,
            fumbles_recovered: 1,
            safeties: 1,
            defensive_tds: 1,
            points_allowed: Some(10),
            ..Default::default()
        };
        // 3.5 + 2 + 2 + 2 + 6 + 4
        assert_eq!(calculate_fantasy_points(&line, ScoringFormat::Standard), 19.5);
    }

    #[test]
    fn test_no_points_allowed_for_individual_players() {
        let line = FantasyStatLine {
            rushing_yards: 50,
            ..Default::default()
        };
        assert_eq!(calculate_fantasy_points(&line, ScoringFormat::Standard), 5.0);
    }

    #[test]
    fn test_misc_turnovers_and_conversions() {
        let line = FantasyStatLine {
            rushing_yards: 40,
            rushing_tds: 1,
            fumbles_lost: 2,
            two_point_conversions: 1,
            return_tds: 1,
            ..Default::default()
        };
        // 4 + 6 - 4 + 2 + 6
        assert_eq!(calculate_fantasy_points(&line, ScoringFormat::Standard), 14.0);
    }

    #[test]
    fn test_negative_yards() {
        let line = FantasyStatLine {
            rushing_yards: -12,
            ..Default::default()
        };
        assert_eq!(calculate_fantasy_points(&line, ScoringFormat::Standard), -1.2);
    }
}

#[cfg(test)]
mod tier_tests {
    use super::*;

    #[test]
    fn test_points_allowed_tier_boundaries() {
        let cases = [
            (0, 10.0),
            (1, 7.0),
            (6, 7.0),
            (7, 4.0),
            (13, 4.0),
            (14, 1.0),
            (20, 1.0),
            (21, 0.0),
            (27, 0.0),
            (28, -1.0),
            (34, -1.0),
            (35, -4.0),
            (70, -4.0),
        ];
        for (allowed, expected) in cases {
            assert_eq!(points_allowed_score(allowed), expected, "allowed {allowed}");
        }
    }

    #[test]
    fn test_tiers_ascending() {
        for pair in POINTS_ALLOWED_TIERS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }
}

#[test]
fn test_batch_preserves_order() {
    let lines = vec![wr_line(), qb_line(), FantasyStatLine::default()];
    let totals = calculate_all_formats_batch(&lines);

    assert_eq!(totals.len(), 3);
    assert_eq!(totals[0], calculate_all_formats(&wr_line()));
    assert_eq!(totals[1].standard, 22.0);
    assert_eq!(totals[2], FormatTotals::default());
}

#[test]
fn test_stat_line_deserializes_with_defaults() {
    let line: FantasyStatLine =
        serde_json::from_str(r#"{"player_id": 9, "player_name": "X", "receptions": 4}"#).unwrap();
    assert_eq!(line.receptions, 4);
    assert_eq!(line.passing_yards, 0);
    assert!(line.points_allowed.is_none());
}
