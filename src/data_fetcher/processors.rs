//! Pure display-ordering helpers: fixture staging, bonus leaderboards and
//! squad grouping. No I/O; everything operates on already-fetched records.

use chrono::DateTime;
use std::collections::HashMap;

use crate::data_fetcher::enricher::BonusTally;
use crate::data_fetcher::models::{CatalogIndex, Fixture, Pick, Position};

/// One row of the bonus leaderboard view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BonusRank {
    pub player_id: u32,
    pub web_name: String,
    pub total_bonus: i64,
}

/// Display stage of a fixture: upcoming sorts before live, live before
/// finished.
fn stage_rank(fixture: &Fixture) -> u8 {
    if fixture.finished {
        2
    } else if fixture.started {
        1
    } else {
        0
    }
}

/// Kickoff timestamp as epoch milliseconds. Missing or unparseable kickoff
/// times sort as time zero, i.e. earliest within their stage.
fn kickoff_millis(fixture: &Fixture) -> i64 {
    fixture
        .kickoff_time
        .as_deref()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0)
}

/// Sorts fixtures for display: upcoming, then live, then finished, and
/// within each stage by kickoff time ascending. Stable total order.
pub fn sort_fixtures_for_display(fixtures: &mut [Fixture]) {
    fixtures.sort_by_key(|fixture| (stage_rank(fixture), kickoff_millis(fixture)));
}

/// Builds the bonus leaderboard from a tally: descending total, with ties
/// keeping the tally's first-seen order (the sort is stable; no further
/// tie-break exists upstream).
pub fn bonus_leaderboard(tally: &BonusTally, index: &CatalogIndex<'_>) -> Vec<BonusRank> {
    let mut rows: Vec<BonusRank> = tally
        .iter()
        .map(|(player_id, total_bonus)| BonusRank {
            player_id,
            web_name: index.player_name(player_id),
            total_bonus,
        })
        .collect();

    rows.sort_by_key(|row| std::cmp::Reverse(row.total_bonus));
    rows
}

/// Groups picks by position, each group sorted by gameweek points
/// descending with pointless picks last
pub fn group_picks_by_position(picks: &[Pick]) -> HashMap<Position, Vec<Pick>> {
    let mut groups: HashMap<Position, Vec<Pick>> = HashMap::new();

    for pick in picks {
        groups.entry(pick.position).or_default().push(pick.clone());
    }

    for group in groups.values_mut() {
        group.sort_by_key(|pick| std::cmp::Reverse(pick.gw_points.unwrap_or(-1)));
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::enricher::build_bonus_tally;
    use crate::data_fetcher::models::{
        Element, FixtureStat, ReferenceCatalog, StatEntry,
    };

    fn fixture(id: u64, started: bool, finished: bool, kickoff: Option<&str>) -> Fixture {
        Fixture {
            id,
            event: Some(1),
            team_h: 1,
            team_a: 2,
            team_h_score: None,
            team_a_score: None,
            kickoff_time: kickoff.map(str::to_string),
            started,
            finished,
            finished_provisional: finished,
            team_h_difficulty: None,
            team_a_difficulty: None,
            stats: vec![],
        }
    }

    #[test]
    fn test_sort_upcoming_then_live_then_finished() {
        let mut fixtures = vec![
            fixture(1, true, true, Some("2025-09-13T11:30:00Z")),
            fixture(2, true, false, Some("2025-09-13T14:00:00Z")),
            fixture(3, false, false, Some("2025-09-14T15:30:00Z")),
        ];

        sort_fixtures_for_display(&mut fixtures);
        let ids: Vec<u64> = fixtures.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_within_stage_by_kickoff() {
        let mut fixtures = vec![
            fixture(1, false, false, Some("2025-09-14T15:30:00Z")),
            fixture(2, false, false, Some("2025-09-13T11:30:00Z")),
            fixture(3, false, false, Some("2025-09-13T14:00:00Z")),
        ];

        sort_fixtures_for_display(&mut fixtures);
        let ids: Vec<u64> = fixtures.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_missing_kickoff_first_within_stage() {
        let mut fixtures = vec![
            fixture(1, false, false, Some("2025-09-13T11:30:00Z")),
            fixture(2, false, false, None),
        ];

        sort_fixtures_for_display(&mut fixtures);
        assert_eq!(fixtures[0].id, 2);
    }

    #[test]
    fn test_sort_unparseable_kickoff_treated_as_time_zero() {
        let mut fixtures = vec![
            fixture(1, false, false, Some("2025-09-13T11:30:00Z")),
            fixture(2, false, false, Some("next tuesday-ish")),
        ];

        sort_fixtures_for_display(&mut fixtures);
        assert_eq!(fixtures[0].id, 2);
    }

    fn catalog_with_players(players: &[(u32, &str)]) -> ReferenceCatalog {
        ReferenceCatalog {
            events: vec![],
            teams: vec![],
            elements: players
                .iter()
                .map(|(id, name)| Element {
                    id: *id,
                    web_name: name.to_string(),
                    team: 1,
                    element_type: 3,
                })
                .collect(),
        }
    }

    #[test]
    fn test_bonus_leaderboard_descending_with_names() {
        let fixtures = vec![Fixture {
            stats: vec![FixtureStat {
                identifier: "bonus".to_string(),
                h: vec![
                    StatEntry {
                        element: 1,
                        value: 1,
                    },
                    StatEntry {
                        element: 2,
                        value: 3,
                    },
                ],
                a: vec![StatEntry {
                    element: 3,
                    value: 2,
                }],
            }],
            ..fixture(1, true, true, None)
        }];

        let catalog = catalog_with_players(&[(1, "One"), (2, "Two")]);
        let index = catalog.index();
        let tally = build_bonus_tally(&fixtures);
        let rows = bonus_leaderboard(&tally, &index);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].web_name, "Two");
        assert_eq!(rows[0].total_bonus, 3);
        assert_eq!(rows[1].player_id, 3);
        // Player 3 is absent from the catalog: placeholder label, not a failure
        assert_eq!(rows[1].web_name, "Player 3");
        assert_eq!(rows[2].total_bonus, 1);
    }

    #[test]
    fn test_bonus_leaderboard_ties_keep_first_seen_order() {
        let fixtures = vec![
            Fixture {
                stats: vec![FixtureStat {
                    identifier: "bonus".to_string(),
                    h: vec![StatEntry {
                        element: 10,
                        value: 2,
                    }],
                    a: vec![],
                }],
                ..fixture(1, true, true, None)
            },
            Fixture {
                stats: vec![FixtureStat {
                    identifier: "bonus".to_string(),
                    h: vec![StatEntry {
                        element: 20,
                        value: 2,
                    }],
                    a: vec![],
                }],
                ..fixture(2, true, true, None)
            },
        ];

        let catalog = catalog_with_players(&[]);
        let index = catalog.index();
        let rows = bonus_leaderboard(&build_bonus_tally(&fixtures), &index);

        assert_eq!(rows[0].player_id, 10);
        assert_eq!(rows[1].player_id, 20);
    }

    fn pick(id: u32, position: Position, gw_points: Option<i64>) -> Pick {
        Pick {
            id,
            web_name: format!("Player {id}"),
            position,
            team: None,
            gw_points,
            is_captain: false,
            multiplier: 1,
        }
    }

    #[test]
    fn test_group_picks_by_position_sorted_by_points() {
        let picks = vec![
            pick(1, Position::Midfielder, Some(2)),
            pick(2, Position::Midfielder, Some(9)),
            pick(3, Position::Goalkeeper, Some(6)),
            pick(4, Position::Midfielder, None),
        ];

        let groups = group_picks_by_position(&picks);

        let mids = &groups[&Position::Midfielder];
        assert_eq!(mids.len(), 3);
        assert_eq!(mids[0].id, 2);
        assert_eq!(mids[1].id, 1);
        // A pick without points sorts after every scored pick
        assert_eq!(mids[2].id, 4);

        assert_eq!(groups[&Position::Goalkeeper].len(), 1);
        assert!(!groups.contains_key(&Position::Forward));
    }
}
