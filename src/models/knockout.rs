//! Knockout stage: symbolic participant references and bracket definition.

use crate::models::group::MatchStatus;
use serde::de::{Deserializer, Error as DeError};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Where a knockout participant comes from: a group-stage placement
/// (`place_N`) or the winner of an earlier knockout match (`winner_<slot>`).
///
/// Parsed once from the wire token at load time, so a typo in a reference
/// fails deserialization instead of silently never resolving.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Reference {
    /// `place_N`: the team finishing N-th in the group stage (1-indexed).
    Placement(u8),
    /// `winner_<slot>`: the winner of the knockout match with that slot.
    /// The slot is stored lower-cased; lookups are case-insensitive.
    KnockoutWinner(String),
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Placement(n) => write!(f, "place_{}", n),
            Reference::KnockoutWinner(slot) => write!(f, "winner_{}", slot),
        }
    }
}

/// A participant reference token that is neither `place_N` nor `winner_<slot>`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseReferenceError {
    token: String,
}

impl ParseReferenceError {
    /// The token that failed to parse.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for ParseReferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a participant reference: {:?}", self.token)
    }
}

impl std::error::Error for ParseReferenceError {}

impl FromStr for Reference {
    type Err = ParseReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rank) = s.strip_prefix("place_") {
            if let Ok(rank) = rank.parse::<u8>() {
                if rank >= 1 {
                    return Ok(Reference::Placement(rank));
                }
            }
        } else if let Some(slot) = s.strip_prefix("winner_") {
            if !slot.is_empty() {
                return Ok(Reference::KnockoutWinner(slot.to_lowercase()));
            }
        }
        Err(ParseReferenceError {
            token: s.to_string(),
        })
    }
}

impl Serialize for Reference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Reference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(DeError::custom)
    }
}

/// One side of a knockout match: who plays here (once resolvable) and the
/// goals scored. Goals default to 0 when absent in the data.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct KnockoutSide {
    #[serde(rename = "ref")]
    pub source: Reference,
    #[serde(default)]
    pub goals: u32,
}

/// A knockout match. `slot` names the match for `winner_<slot>` references
/// from later rounds; the final needs no slot (nothing references it).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct KnockoutMatch {
    #[serde(default)]
    pub slot: String,
    /// Human pairing label from the source data, e.g. "1st vs 4th".
    #[serde(default)]
    pub matchup: String,
    pub team1: KnockoutSide,
    pub team2: KnockoutSide,
    pub status: MatchStatus,
}

/// Bracket definition: the semi-finals plus the final. The final's
/// references are `winner_*` tokens; it never draws from group placements.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct KnockoutStage {
    pub semi_finals: Vec<KnockoutMatch>,
    #[serde(rename = "final")]
    pub final_match: KnockoutMatch,
}
