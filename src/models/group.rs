//! Group stage: match records and matchday grouping.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Whether a match has a result yet.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Played,
    Scheduled,
}

/// One side of a group match. Goals default to 0 when absent in the data.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupSide {
    pub id: TeamId,
    #[serde(default)]
    pub goals: u32,
}

/// A group-stage match. Contributes to the standings only when played.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupMatch {
    pub team1: GroupSide,
    pub team2: GroupSide,
    pub status: MatchStatus,
}

/// Matches grouped by matchday label. A BTreeMap keeps matchday iteration
/// order deterministic across runs.
pub type GroupStage = BTreeMap<String, Vec<GroupMatch>>;
