use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Fixed sub-division of the tournament. Teams play only within their group
/// for standings purposes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Group {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C")]
    C,
}

impl Group {
    pub const ALL: [Group; 3] = [Group::A, Group::B, Group::C];

    /// Canonical group code string (e.g., "A").
    pub fn code(&self) -> &'static str {
        match self {
            Group::A => "A",
            Group::B => "B",
            Group::C => "C",
        }
    }

    pub fn from_code(code: &str) -> Option<Group> {
        match code {
            "A" => Some(Group::A),
            "B" => Some(Group::B),
            "C" => Some(Group::C),
            _ => None,
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Group {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Group::from_code(s).ok_or_else(|| format!("unknown group code: {s:?} (expected A, B or C)"))
    }
}
