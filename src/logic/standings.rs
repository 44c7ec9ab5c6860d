//! Group stage standings: aggregation and deterministic ranking.

use crate::models::{GroupMatch, MatchStatus, TeamId, TeamRegistry};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// One row of the standings table.
///
/// Rank is positional in the sequence returned by [`compute_standings`];
/// it is not stored on the row.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub id: TeamId,
    pub name: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_diff: i32,
    pub points: u32,
}

impl StandingsRow {
    fn zeroed(id: TeamId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_diff: 0,
            points: 0,
        }
    }
}

/// Compute the ranked standings table from group-stage results.
///
/// Every registered team gets a row, zeroed if it has not played. Matches
/// only count when played; a match naming a team id the registry does not
/// know is dropped without touching either row. Points follow 3/1/0.
///
/// The ranking is a total order: points, then goal difference, then goals
/// scored (all descending), then name (case-insensitive ascending), then
/// team id, so identical inputs always produce the identical sequence.
pub fn compute_standings<'a, I>(registry: &TeamRegistry, matches: I) -> Vec<StandingsRow>
where
    I: IntoIterator<Item = &'a GroupMatch>,
{
    let mut rows: HashMap<TeamId, StandingsRow> = registry
        .teams()
        .map(|t| (t.id, StandingsRow::zeroed(t.id, &t.name)))
        .collect();

    for m in matches {
        if m.status != MatchStatus::Played {
            continue;
        }
        // Both sides must be registered, otherwise neither side is credited.
        if !(registry.contains(m.team1.id) && registry.contains(m.team2.id)) {
            continue;
        }
        if let Some(row) = rows.get_mut(&m.team1.id) {
            credit_side(row, m.team1.goals, m.team2.goals);
        }
        if let Some(row) = rows.get_mut(&m.team2.id) {
            credit_side(row, m.team2.goals, m.team1.goals);
        }
    }

    let mut table: Vec<StandingsRow> = rows.into_values().collect();
    for row in &mut table {
        row.goal_diff = row.goals_for as i32 - row.goals_against as i32;
    }
    table.sort_by(compare_rows);
    table
}

/// Credit one side of a played match: appearance, goals, and outcome.
fn credit_side(row: &mut StandingsRow, scored: u32, conceded: u32) {
    row.played += 1;
    row.goals_for += scored;
    row.goals_against += conceded;
    match scored.cmp(&conceded) {
        Ordering::Greater => {
            row.wins += 1;
            row.points += 3;
        }
        Ordering::Less => {
            row.losses += 1;
        }
        Ordering::Equal => {
            row.draws += 1;
            row.points += 1;
        }
    }
}

fn compare_rows(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.points
        .cmp(&a.points)
        .then(b.goal_diff.cmp(&a.goal_diff))
        .then(b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then(a.id.cmp(&b.id))
}
