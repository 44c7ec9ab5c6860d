//! Full tournament definition as loaded from the data files.

use crate::models::group::GroupStage;
use crate::models::knockout::KnockoutStage;
use serde::{Deserialize, Serialize};

/// Shape of `tournament.json`: group-stage results by matchday plus the
/// knockout bracket.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub group_stage: GroupStage,
    pub knockout_stage: KnockoutStage,
}
