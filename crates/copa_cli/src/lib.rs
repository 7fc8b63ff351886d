//! Copa CLI Library
//!
//! Tournament snapshot loading and plain-text table rendering for the
//! `copa` command-line tool.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use copa_core::{compute_standings, Group, MatchRecord, StandingsRow, TournamentConfig};

/// On-disk tournament snapshot: master data plus the full match calendar.
#[derive(Debug, Serialize, Deserialize)]
pub struct TournamentSnapshot {
    pub config: TournamentConfig,
    pub matches: Vec<MatchRecord>,
}

/// Read and parse a snapshot JSON file.
pub fn load_snapshot(path: &Path) -> Result<TournamentSnapshot> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot file: {}", path.display()))?;
    let snapshot: TournamentSnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse snapshot file: {}", path.display()))?;
    Ok(snapshot)
}

/// Compute the ranked table of one group from a snapshot.
pub fn group_table(snapshot: &TournamentSnapshot, group: Group) -> Result<Vec<StandingsRow>> {
    let rows = compute_standings(&snapshot.matches, snapshot.config.roster(group), group)?;
    Ok(rows)
}

/// Plain-text rendering of a group table, one line per roster team.
pub fn render_table(group: Group, rows: &[StandingsRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Group {}\n", group.code()));
    out.push_str("Pos  Team                  Pts    P    W    D    L   GF   GA    GD\n");
    for row in rows {
        out.push_str(&format!(
            "{:>3}  {:<20} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>+5}\n",
            row.position,
            row.team,
            row.points,
            row.played,
            row.wins,
            row.draws,
            row.losses,
            row.goals_for,
            row.goals_against,
            row.goal_difference,
        ));
    }
    out
}

/// Recompute every group, collecting consistency problems instead of
/// stopping at the first one.
pub fn check_snapshot(snapshot: &TournamentSnapshot) -> Vec<String> {
    let mut problems = Vec::new();
    for group in Group::ALL {
        if let Err(err) = compute_standings(&snapshot.matches, snapshot.config.roster(group), group)
        {
            problems.push(format!("group {}: {}", group.code(), err));
        }
    }
    problems
}
