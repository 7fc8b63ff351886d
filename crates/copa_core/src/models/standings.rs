use serde::{Deserialize, Serialize};

use super::Group;

/// One derived row of a group table.
///
/// Rows are never authored directly; the aggregator recomputes the whole
/// table from the match set on every call and the previous table is
/// discarded wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StandingsRow {
    pub group: Group,
    pub team: String,
    /// 1-based rank, dense and contiguous within the group.
    pub position: u32,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    /// goals_for - goals_against.
    pub goal_difference: i32,
    /// 3 per win plus 1 per draw.
    pub points: u32,
}

impl StandingsRow {
    /// Row for a team with no eligible matches yet.
    pub fn zeroed(group: Group, team: impl Into<String>) -> Self {
        Self {
            group,
            team: team.into(),
            position: 0,
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }
}
