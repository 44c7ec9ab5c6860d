//! Foosball tournament viewer: library with models and the standings /
//! bracket resolution engine.

pub mod logic;
pub mod models;

pub use logic::{
    build_tournament_view, compute_standings, decide_winner, resolve_knockout,
    resolve_placements, resolve_reference, GroupMatchView, KnockoutMatchView, KnockoutView,
    MatchWinner, MatchdayView, PlacementMap, ResolutionState, ResolutionWarning, ResolvedKnockout,
    ResolvedKnockoutMatch, ResolvedSide, SideView, StandingsRow, TBD, TournamentView, WinnerMap,
};
pub use models::{
    GroupMatch, GroupSide, GroupStage, KnockoutMatch, KnockoutSide, KnockoutStage, MatchStatus,
    ParseReferenceError, Reference, Team, TeamId, TeamList, TeamRegistry, Tournament,
};
