//! Knockout bracket resolution: symbolic references to concrete teams,
//! winner decision, and propagation from the semi-finals into the final.

use crate::logic::placements::PlacementMap;
use crate::models::{
    KnockoutMatch, KnockoutStage, MatchStatus, Reference, Team, TeamId, TeamRegistry,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which side of a match won it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchWinner {
    Team1,
    Team2,
}

/// Resolution progress of a knockout match.
///
/// A match counts as played only once both participants are known, even if
/// the record already carries goals.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionState {
    /// At least one participant reference has no concrete team yet.
    UnresolvedParticipants,
    /// Both participants known; result pending.
    ParticipantsKnown,
    /// Both participants known and the match has been played.
    Played,
}

/// Winners of decided knockout matches, keyed by slot (case-insensitive).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WinnerMap {
    winners: HashMap<String, TeamId>,
}

impl WinnerMap {
    pub fn record(&mut self, slot: &str, team: TeamId) {
        self.winners.insert(slot.to_lowercase(), team);
    }

    pub fn get(&self, slot: &str) -> Option<TeamId> {
        self.winners.get(&slot.to_lowercase()).copied()
    }
}

/// Resolve a participant reference to a team id, if the underlying placement
/// or prior result is known yet.
pub fn resolve_reference(
    reference: &Reference,
    placements: &PlacementMap,
    winners: &WinnerMap,
) -> Option<TeamId> {
    match reference {
        Reference::Placement(rank) => placements.get(*rank),
        Reference::KnockoutWinner(slot) => winners.get(slot),
    }
}

/// Decide a knockout match on goals alone: strictly more goals wins.
/// Equal goals leave the match undecided (no extra-time or penalty model).
pub fn decide_winner(goals1: u32, goals2: u32) -> Option<MatchWinner> {
    match goals1.cmp(&goals2) {
        std::cmp::Ordering::Greater => Some(MatchWinner::Team1),
        std::cmp::Ordering::Less => Some(MatchWinner::Team2),
        std::cmp::Ordering::Equal => None,
    }
}

/// One side of a resolved knockout match. `team` is absent while the
/// underlying reference cannot be resolved.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSide {
    pub team: Option<Team>,
    pub goals: u32,
}

/// A knockout match with references replaced by concrete teams where known.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ResolvedKnockoutMatch {
    pub slot: String,
    pub matchup: String,
    pub team1: ResolvedSide,
    pub team2: ResolvedSide,
    pub state: ResolutionState,
    /// Winning team id; None while undecided (unplayed, unresolved, or drawn).
    pub winner: Option<TeamId>,
}

/// The fully resolved bracket.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ResolvedKnockout {
    pub semi_finals: Vec<ResolvedKnockoutMatch>,
    #[serde(rename = "final")]
    pub final_match: ResolvedKnockoutMatch,
}

/// Resolve the whole bracket against the group placements.
///
/// The semi-finals resolve first (order between them does not matter: no
/// semi-final references another). Each decided semi-final records its
/// winner under `winner_<slot>` before the final is touched; the final then
/// resolves against the winner map exclusively, so a `place_*` reference in
/// the final never resolves.
pub fn resolve_knockout(
    knockout: &KnockoutStage,
    placements: &PlacementMap,
    registry: &TeamRegistry,
) -> ResolvedKnockout {
    let mut winners = WinnerMap::default();

    let semi_finals: Vec<ResolvedKnockoutMatch> = knockout
        .semi_finals
        .iter()
        .map(|m| resolve_match(m, placements, &winners, registry))
        .collect();

    for semi in &semi_finals {
        if let Some(winner) = semi.winner {
            winners.record(&semi.slot, winner);
        }
    }

    let final_match = resolve_match(
        &knockout.final_match,
        &PlacementMap::default(),
        &winners,
        registry,
    );

    ResolvedKnockout {
        semi_finals,
        final_match,
    }
}

/// Resolve a single match: participants, state, and (when played) winner.
fn resolve_match(
    m: &KnockoutMatch,
    placements: &PlacementMap,
    winners: &WinnerMap,
    registry: &TeamRegistry,
) -> ResolvedKnockoutMatch {
    let id1 = resolve_reference(&m.team1.source, placements, winners);
    let id2 = resolve_reference(&m.team2.source, placements, winners);

    let state = match (id1, id2) {
        (Some(_), Some(_)) if m.status == MatchStatus::Played => ResolutionState::Played,
        (Some(_), Some(_)) => ResolutionState::ParticipantsKnown,
        _ => ResolutionState::UnresolvedParticipants,
    };

    let winner = match state {
        ResolutionState::Played => match decide_winner(m.team1.goals, m.team2.goals) {
            Some(MatchWinner::Team1) => id1,
            Some(MatchWinner::Team2) => id2,
            None => None,
        },
        _ => None,
    };

    ResolvedKnockoutMatch {
        slot: m.slot.clone(),
        matchup: m.matchup.clone(),
        team1: ResolvedSide {
            team: id1.and_then(|id| registry.lookup(id).cloned()),
            goals: m.team1.goals,
        },
        team2: ResolvedSide {
            team: id2.and_then(|id| registry.lookup(id).cloned()),
            goals: m.team2.goals,
        },
        state,
        winner,
    }
}
