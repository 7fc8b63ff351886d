use std::fmt;

use uuid::Uuid;

use crate::models::Group;

/// Data-integrity failures the aggregator refuses to compute through.
///
/// These signal a caller configuration problem upstream, never a transient
/// condition; retrying without fixing the input will fail identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StandingsError {
    /// A match of the requested group references a team that is neither on
    /// the roster nor the BYE sentinel.
    UnknownTeam { group: Group, team: String, match_id: Uuid },
    /// The supplied roster lists the same team twice.
    DuplicateTeam { group: Group, team: String },
}

impl fmt::Display for StandingsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StandingsError::UnknownTeam { group, team, match_id } => {
                write!(
                    f,
                    "Match {} references team \"{}\" absent from the group {} roster",
                    match_id,
                    team,
                    group.code()
                )
            }
            StandingsError::DuplicateTeam { group, team } => {
                write!(f, "Team \"{}\" appears twice in the group {} roster", team, group.code())
            }
        }
    }
}

impl std::error::Error for StandingsError {}

pub type Result<T> = std::result::Result<T, StandingsError>;
