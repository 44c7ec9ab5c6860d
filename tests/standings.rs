//! Integration tests for the team registry and the standings calculator.

use foosball_tournament_web::{
    compute_standings, GroupMatch, GroupSide, MatchStatus, Team, TeamRegistry,
};

fn team(id: u32, name: &str) -> Team {
    Team {
        id,
        name: name.to_string(),
        player1: format!("P{id}a"),
        player2: format!("P{id}b"),
    }
}

fn played(a: u32, ga: u32, b: u32, gb: u32) -> GroupMatch {
    GroupMatch {
        team1: GroupSide { id: a, goals: ga },
        team2: GroupSide { id: b, goals: gb },
        status: MatchStatus::Played,
    }
}

fn scheduled(a: u32, b: u32) -> GroupMatch {
    GroupMatch {
        team1: GroupSide { id: a, goals: 0 },
        team2: GroupSide { id: b, goals: 0 },
        status: MatchStatus::Scheduled,
    }
}

#[test]
fn registry_lookup_present_and_absent() {
    let teams = vec![team(1, "Alpha"), team(2, "Beta")];
    let registry = TeamRegistry::new(&teams);
    assert_eq!(registry.lookup(1).map(|t| t.name.as_str()), Some("Alpha"));
    assert!(registry.lookup(99).is_none());
    assert_eq!(registry.len(), 2);
}

#[test]
fn registry_duplicate_id_last_write_wins() {
    let teams = vec![team(1, "First"), team(1, "Second")];
    let registry = TeamRegistry::new(&teams);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.lookup(1).map(|t| t.name.as_str()), Some("Second"));
}

#[test]
fn basic_standings_scenario() {
    // A beats B 3:1, C draws D 2:2, A beats C 1:0, B beats D 2:0.
    let teams = vec![team(1, "A"), team(2, "B"), team(3, "C"), team(4, "D")];
    let registry = TeamRegistry::new(&teams);
    let matches = vec![
        played(1, 3, 2, 1),
        played(3, 2, 4, 2),
        played(1, 1, 3, 0),
        played(2, 2, 4, 0),
    ];

    let ranking = compute_standings(&registry, &matches);

    let top = &ranking[0];
    assert_eq!(top.name, "A");
    assert_eq!(top.played, 2);
    assert_eq!(top.wins, 2);
    assert_eq!(top.draws, 0);
    assert_eq!(top.losses, 0);
    assert_eq!(top.points, 6);

    let names: Vec<&str> = ranking.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C", "D"]);
}

#[test]
fn teams_without_matches_appear_zeroed() {
    let teams = vec![team(1, "Active"), team(2, "Idle"), team(3, "AlsoIdle")];
    let registry = TeamRegistry::new(&teams);
    let ranking = compute_standings(&registry, &[played(1, 2, 2, 0)]);

    assert_eq!(ranking.len(), 3);
    let idle = ranking.iter().find(|r| r.name == "AlsoIdle").unwrap();
    assert_eq!(
        (idle.played, idle.wins, idle.draws, idle.losses),
        (0, 0, 0, 0)
    );
    assert_eq!((idle.goals_for, idle.goals_against, idle.points), (0, 0, 0));
    assert_eq!(idle.goal_diff, 0);
}

#[test]
fn scheduled_matches_do_not_count() {
    let teams = vec![team(1, "A"), team(2, "B")];
    let registry = TeamRegistry::new(&teams);
    let ranking = compute_standings(&registry, &[scheduled(1, 2)]);
    assert!(ranking.iter().all(|r| r.played == 0 && r.points == 0));
}

#[test]
fn match_with_unregistered_team_is_dropped() {
    let teams = vec![team(1, "A"), team(2, "B")];
    let registry = TeamRegistry::new(&teams);
    // Team 99 never registered: the match must not credit team 1 either.
    let ranking = compute_standings(&registry, &[played(1, 5, 99, 0)]);
    let a = ranking.iter().find(|r| r.id == 1).unwrap();
    assert_eq!(a.played, 0);
    assert_eq!(a.goals_for, 0);
    assert_eq!(a.points, 0);
}

#[test]
fn tiebreak_by_goal_difference() {
    let teams = vec![team(1, "Wide"), team(2, "Narrow"), team(3, "C"), team(4, "D")];
    let registry = TeamRegistry::new(&teams);
    // Both winners on 3 points; Wide has the better goal difference.
    let matches = vec![played(1, 4, 3, 0), played(2, 1, 4, 0)];
    let ranking = compute_standings(&registry, &matches);
    assert_eq!(ranking[0].name, "Wide");
    assert_eq!(ranking[1].name, "Narrow");
}

#[test]
fn tiebreak_by_goals_for() {
    let teams = vec![team(1, "Shooty"), team(2, "Frugal"), team(3, "C"), team(4, "D")];
    let registry = TeamRegistry::new(&teams);
    // Equal points and goal difference; Shooty scored more.
    let matches = vec![played(1, 3, 3, 2), played(2, 1, 4, 0)];
    let ranking = compute_standings(&registry, &matches);
    assert_eq!(ranking[0].name, "Shooty");
    assert_eq!(ranking[1].name, "Frugal");
}

#[test]
fn tiebreak_by_name_alphabetical() {
    // Identical records; Alpha ranks above Zeta despite the higher id.
    let teams = vec![team(9, "Alpha"), team(1, "Zeta"), team(3, "C"), team(4, "D")];
    let registry = TeamRegistry::new(&teams);
    let matches = vec![played(9, 2, 3, 0), played(1, 2, 4, 0)];
    let ranking = compute_standings(&registry, &matches);
    assert_eq!(ranking[0].name, "Alpha");
    assert_eq!(ranking[1].name, "Zeta");
}

#[test]
fn tiebreak_by_id_for_identical_names() {
    let teams = vec![team(7, "Twins"), team(3, "Twins")];
    let registry = TeamRegistry::new(&teams);
    let ranking = compute_standings(&registry, &[]);
    assert_eq!(ranking[0].id, 3);
    assert_eq!(ranking[1].id, 7);
}

#[test]
fn points_conservation() {
    let teams = vec![team(1, "A"), team(2, "B"), team(3, "C"), team(4, "D")];
    let registry = TeamRegistry::new(&teams);
    let matches = vec![
        played(1, 3, 2, 1),
        played(3, 2, 4, 2),
        played(1, 1, 3, 0),
        played(2, 2, 4, 0),
        played(2, 1, 3, 1),
    ];
    let decisive = 3;
    let drawn = 2;

    let ranking = compute_standings(&registry, &matches);
    let total: u32 = ranking.iter().map(|r| r.points).sum();
    assert_eq!(total, 3 * decisive + 2 * drawn);
}

#[test]
fn goal_symmetry() {
    let teams = vec![team(1, "A"), team(2, "B"), team(3, "C")];
    let registry = TeamRegistry::new(&teams);
    let matches = vec![played(1, 3, 2, 1), played(2, 2, 3, 2), played(3, 0, 1, 4)];
    let ranking = compute_standings(&registry, &matches);

    let row = |id: u32| ranking.iter().find(|r| r.id == id).unwrap();
    assert_eq!((row(1).goals_for, row(1).goals_against), (7, 1));
    assert_eq!((row(2).goals_for, row(2).goals_against), (3, 5));
    assert_eq!((row(3).goals_for, row(3).goals_against), (2, 6));
    for r in &ranking {
        assert_eq!(r.goal_diff, r.goals_for as i32 - r.goals_against as i32);
    }

    let scored: u32 = ranking.iter().map(|r| r.goals_for).sum();
    let conceded: u32 = ranking.iter().map(|r| r.goals_against).sum();
    assert_eq!(scored, conceded);
}

#[test]
fn ranking_is_deterministic_regardless_of_team_order() {
    let matches = vec![played(1, 2, 2, 2), played(3, 1, 4, 1)];
    let forward = vec![team(1, "A"), team(2, "B"), team(3, "C"), team(4, "D")];
    let mut reversed = forward.clone();
    reversed.reverse();

    let first = compute_standings(&TeamRegistry::new(&forward), &matches);
    let second = compute_standings(&TeamRegistry::new(&reversed), &matches);
    assert_eq!(first, second);

    // And identical inputs always give the identical sequence.
    let again = compute_standings(&TeamRegistry::new(&forward), &matches);
    assert_eq!(first, again);
}

#[test]
fn goals_default_to_zero_when_absent() {
    let raw = r#"{ "team1": { "id": 1 }, "team2": { "id": 2, "goals": 2 }, "status": "played" }"#;
    let m: GroupMatch = serde_json::from_str(raw).unwrap();
    assert_eq!(m.team1.goals, 0);
    assert_eq!(m.team2.goals, 2);
}
