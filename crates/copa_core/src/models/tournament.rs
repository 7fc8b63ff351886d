use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Group;

/// Tournament master data: name plus the authoritative roster of each group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub name: String,
    /// Roster per group, in the order the organizers registered the teams.
    pub groups: BTreeMap<Group, Vec<String>>,
}

impl TournamentConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), groups: BTreeMap::new() }
    }

    pub fn with_group(mut self, group: Group, teams: Vec<String>) -> Self {
        self.groups.insert(group, teams);
        self
    }

    /// Roster of a group. A group without registered teams is an empty
    /// roster, not an error.
    pub fn roster(&self, group: Group) -> &[String] {
        self.groups.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }
}
