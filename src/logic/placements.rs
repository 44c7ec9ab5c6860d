//! Placement resolution: group-stage ranks to team ids for the bracket.

use crate::logic::standings::StandingsRow;
use crate::models::TeamId;

/// The top four group placements feeding the knockout stage.
///
/// Ranks beyond the number of ranked teams are simply absent.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PlacementMap {
    places: [Option<TeamId>; 4],
}

impl PlacementMap {
    /// Team occupying the 1-indexed `rank`, if the ranking reached that deep.
    /// Ranks outside 1..=4 are always absent.
    pub fn get(&self, rank: u8) -> Option<TeamId> {
        match rank {
            1..=4 => self.places[rank as usize - 1],
            _ => None,
        }
    }
}

/// Map the first four ranking positions to team ids.
///
/// Purely positional: ties are already broken by the total order of
/// [`compute_standings`](crate::logic::compute_standings) before this runs.
pub fn resolve_placements(ranking: &[StandingsRow]) -> PlacementMap {
    let mut places = [None; 4];
    for (place, row) in places.iter_mut().zip(ranking) {
        *place = Some(row.id);
    }
    PlacementMap { places }
}
