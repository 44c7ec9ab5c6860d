//! Team data and the id-indexed registry.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for a team (stable for the tournament's duration).
pub type TeamId = u32;

/// A team: display name and its two players.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub player1: String,
    pub player2: String,
}

/// Shape of `teams.json`: the registered team list.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamList {
    pub teams: Vec<Team>,
}

/// Id-indexed team lookup, built once from the team list.
///
/// Duplicate ids in the input are a data-integrity error upstream; the
/// registry keeps the last occurrence (last write wins).
#[derive(Clone, Debug, Default)]
pub struct TeamRegistry {
    by_id: HashMap<TeamId, Team>,
}

impl TeamRegistry {
    pub fn new(teams: &[Team]) -> Self {
        Self {
            by_id: teams.iter().map(|t| (t.id, t.clone())).collect(),
        }
    }

    /// Team with the given id, if registered.
    pub fn lookup(&self, id: TeamId) -> Option<&Team> {
        self.by_id.get(&id)
    }

    pub fn contains(&self, id: TeamId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// All registered teams (iteration order unspecified).
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.by_id.values()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
