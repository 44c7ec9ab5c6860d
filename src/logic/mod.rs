//! Tournament resolution logic: standings, placements, bracket, view.

mod bracket;
mod placements;
mod standings;
mod view;

pub use bracket::{
    decide_winner, resolve_knockout, resolve_reference, MatchWinner, ResolutionState,
    ResolvedKnockout, ResolvedKnockoutMatch, ResolvedSide, WinnerMap,
};
pub use placements::{resolve_placements, PlacementMap};
pub use standings::{compute_standings, StandingsRow};
pub use view::{
    build_tournament_view, GroupMatchView, KnockoutMatchView, KnockoutView, MatchdayView,
    ResolutionWarning, SideView, TBD, TournamentView,
};
