//! Data structures for the tournament: teams, group stage, knockout bracket.

mod group;
mod knockout;
mod team;
mod tournament;

pub use group::{GroupMatch, GroupSide, GroupStage, MatchStatus};
pub use knockout::{KnockoutMatch, KnockoutSide, KnockoutStage, ParseReferenceError, Reference};
pub use team::{Team, TeamId, TeamList, TeamRegistry};
pub use tournament::Tournament;
