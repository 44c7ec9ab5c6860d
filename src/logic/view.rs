//! Presentation-ready view of the whole tournament: standings, matchdays
//! with team names substituted, the resolved bracket, and a list of
//! non-fatal resolution warnings.

use crate::logic::bracket::{
    resolve_knockout, ResolutionState, ResolvedKnockoutMatch, ResolvedSide,
};
use crate::logic::placements::resolve_placements;
use crate::logic::standings::{compute_standings, StandingsRow};
use crate::models::{
    GroupMatch, GroupStage, KnockoutStage, MatchStatus, Reference, Team, TeamId, TeamRegistry,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown for a knockout participant that is not known yet.
pub const TBD: &str = "TBD";

/// One side of a match, ready for display: name and players substituted
/// for the team id, plus the scoreline contribution.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SideView {
    pub name: String,
    pub player1: Option<String>,
    pub player2: Option<String>,
    pub goals: u32,
}

/// A group match with team names substituted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupMatchView {
    pub team1: SideView,
    pub team2: SideView,
    pub status: MatchStatus,
}

/// All matches of one matchday. `title` is the label with underscores
/// replaced for headings ("matchday_1" -> "matchday 1").
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchdayView {
    pub label: String,
    pub title: String,
    pub matches: Vec<GroupMatchView>,
}

/// A knockout match ready for display; unresolved sides carry the
/// [`TBD`] placeholder name.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct KnockoutMatchView {
    pub slot: String,
    pub matchup: String,
    pub team1: SideView,
    pub team2: SideView,
    pub state: ResolutionState,
    pub winner: Option<TeamId>,
}

/// The resolved bracket for display.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct KnockoutView {
    pub semi_finals: Vec<KnockoutMatchView>,
    #[serde(rename = "final")]
    pub final_match: KnockoutMatchView,
}

/// Non-fatal findings from a resolution pass. The view is always produced;
/// these let a stricter caller notice degraded data.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ResolutionWarning {
    /// A played group match names a team id the registry does not know.
    UnknownTeam { matchday: String, team: TeamId },
    /// A knockout participant reference did not resolve to a team.
    UnresolvedReference { slot: String, reference: Reference },
    /// The final referenced a group placement; finals resolve from
    /// semi-final winners only.
    PlacementInFinal { reference: Reference },
}

impl fmt::Display for ResolutionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionWarning::UnknownTeam { matchday, team } => {
                write!(f, "{}: team {} is not registered", matchday, team)
            }
            ResolutionWarning::UnresolvedReference { slot, reference } => {
                write!(f, "knockout {}: {} is unresolved", slot, reference)
            }
            ResolutionWarning::PlacementInFinal { reference } => {
                write!(f, "final: {} cannot seed the final", reference)
            }
        }
    }
}

/// Everything the presentation layer needs, derived in one pass.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentView {
    pub teams: Vec<Team>,
    pub standings: Vec<StandingsRow>,
    pub matchdays: Vec<MatchdayView>,
    pub knockout: KnockoutView,
    pub warnings: Vec<ResolutionWarning>,
}

/// Derive the full competitive state from scratch.
///
/// Pure function of its inputs: standings, placements, and the bracket are
/// recomputed on every call; nothing is cached between invocations.
pub fn build_tournament_view(
    teams: &[Team],
    group_stage: &GroupStage,
    knockout: &KnockoutStage,
) -> TournamentView {
    let registry = TeamRegistry::new(teams);
    let standings = compute_standings(&registry, group_stage.values().flatten());
    let placements = resolve_placements(&standings);
    let resolved = resolve_knockout(knockout, &placements, &registry);

    let mut warnings = Vec::new();

    let matchdays = group_stage
        .iter()
        .map(|(label, matches)| MatchdayView {
            label: label.clone(),
            title: label.replace('_', " "),
            matches: matches
                .iter()
                .map(|m| group_match_view(m, &registry, label, &mut warnings))
                .collect(),
        })
        .collect();

    let semi_finals = knockout
        .semi_finals
        .iter()
        .zip(&resolved.semi_finals)
        .map(|(m, r)| {
            warn_unresolved(&r.team1, &m.team1.source, &m.slot, &mut warnings);
            warn_unresolved(&r.team2, &m.team2.source, &m.slot, &mut warnings);
            knockout_match_view(r)
        })
        .collect();

    for side in [&knockout.final_match.team1, &knockout.final_match.team2] {
        if let Reference::Placement(_) = side.source {
            warnings.push(ResolutionWarning::PlacementInFinal {
                reference: side.source.clone(),
            });
        }
    }
    let fm = &knockout.final_match;
    warn_unresolved(&resolved.final_match.team1, &fm.team1.source, &fm.slot, &mut warnings);
    warn_unresolved(&resolved.final_match.team2, &fm.team2.source, &fm.slot, &mut warnings);

    TournamentView {
        teams: teams.to_vec(),
        standings,
        matchdays,
        knockout: KnockoutView {
            semi_finals,
            final_match: knockout_match_view(&resolved.final_match),
        },
        warnings,
    }
}

/// Substitute names and players for one group match. An unregistered id is
/// shown as the raw id; a played match with one also gets a warning.
fn group_match_view(
    m: &GroupMatch,
    registry: &TeamRegistry,
    matchday: &str,
    warnings: &mut Vec<ResolutionWarning>,
) -> GroupMatchView {
    let mut side = |id: TeamId, goals: u32| match registry.lookup(id) {
        Some(team) => SideView {
            name: team.name.clone(),
            player1: Some(team.player1.clone()),
            player2: Some(team.player2.clone()),
            goals,
        },
        None => {
            if m.status == MatchStatus::Played {
                warnings.push(ResolutionWarning::UnknownTeam {
                    matchday: matchday.to_string(),
                    team: id,
                });
            }
            SideView {
                name: id.to_string(),
                player1: None,
                player2: None,
                goals,
            }
        }
    };
    GroupMatchView {
        team1: side(m.team1.id, m.team1.goals),
        team2: side(m.team2.id, m.team2.goals),
        status: m.status,
    }
}

fn knockout_match_view(resolved: &ResolvedKnockoutMatch) -> KnockoutMatchView {
    KnockoutMatchView {
        slot: resolved.slot.clone(),
        matchup: resolved.matchup.clone(),
        team1: knockout_side_view(&resolved.team1),
        team2: knockout_side_view(&resolved.team2),
        state: resolved.state,
        winner: resolved.winner,
    }
}

fn knockout_side_view(side: &ResolvedSide) -> SideView {
    match &side.team {
        Some(team) => SideView {
            name: team.name.clone(),
            player1: Some(team.player1.clone()),
            player2: Some(team.player2.clone()),
            goals: side.goals,
        },
        None => SideView {
            name: TBD.to_string(),
            player1: None,
            player2: None,
            goals: side.goals,
        },
    }
}

fn warn_unresolved(
    side: &ResolvedSide,
    source: &Reference,
    slot: &str,
    warnings: &mut Vec<ResolutionWarning>,
) {
    if side.team.is_none() {
        warnings.push(ResolutionWarning::UnresolvedReference {
            slot: slot.to_string(),
            reference: source.clone(),
        });
    }
}
