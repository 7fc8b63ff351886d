//! Standings aggregation.
//!
//! The table of a group is always recomputed wholesale from the full match
//! set; nothing is patched incrementally. The computation is pure and
//! idempotent, so callers retry by simply invoking it again and serialize
//! concurrent commits at their write boundary.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::{Result, StandingsError};
use crate::models::{Group, MatchRecord, StandingsRow};
use crate::rules::{POINTS_DRAW, POINTS_WIN};

#[derive(Debug, Default, Clone, Copy)]
struct TeamTotals {
    played: u32,
    wins: u32,
    draws: u32,
    losses: u32,
    goals_for: u32,
    goals_against: u32,
}

impl TeamTotals {
    fn credit(&mut self, scored: u8, conceded: u8, outcome: Ordering) {
        self.played += 1;
        self.goals_for += u32::from(scored);
        self.goals_against += u32::from(conceded);
        match outcome {
            Ordering::Greater => self.wins += 1,
            Ordering::Equal => self.draws += 1,
            Ordering::Less => self.losses += 1,
        }
    }
}

/// Recompute the ranked table for `group` from scratch.
///
/// Returns exactly one row per roster team, ranked 1..=N by the tie-break
/// chain points desc, goal difference desc, goals for desc, team name asc.
/// Matches of other groups are ignored; matches of this group must only
/// reference roster teams (or the BYE sentinel), whatever their played
/// state. Anything else is a caller configuration error and fails the
/// whole call.
pub fn compute_standings(
    matches: &[MatchRecord],
    roster: &[String],
    group: Group,
) -> Result<Vec<StandingsRow>> {
    let mut totals: HashMap<&str, TeamTotals> = HashMap::with_capacity(roster.len());
    for team in roster {
        if totals.insert(team.as_str(), TeamTotals::default()).is_some() {
            return Err(StandingsError::DuplicateTeam { group, team: team.clone() });
        }
    }

    for record in matches.iter().filter(|m| m.group == group) {
        if record.involves_bye() {
            continue;
        }
        for team in [&record.home_team, &record.away_team] {
            if !totals.contains_key(team.as_str()) {
                return Err(StandingsError::UnknownTeam {
                    group,
                    team: team.clone(),
                    match_id: record.id,
                });
            }
        }
        if !record.counts_for_standings(group) {
            continue;
        }
        let Some(score) = record.score else {
            continue;
        };

        // Both sides are credited from the same comparison, so a draw on
        // one side is necessarily a draw on the other.
        let outcome = score.home.cmp(&score.away);
        if let Some(entry) = totals.get_mut(record.home_team.as_str()) {
            entry.credit(score.home, score.away, outcome);
        }
        if let Some(entry) = totals.get_mut(record.away_team.as_str()) {
            entry.credit(score.away, score.home, outcome.reverse());
        }
    }

    let mut rows: Vec<StandingsRow> = roster
        .iter()
        .map(|team| {
            let totals = totals.get(team.as_str()).copied().unwrap_or_default();
            StandingsRow {
                group,
                team: team.clone(),
                position: 0,
                played: totals.played,
                wins: totals.wins,
                draws: totals.draws,
                losses: totals.losses,
                goals_for: totals.goals_for,
                goals_against: totals.goals_against,
                goal_difference: totals.goals_for as i32 - totals.goals_against as i32,
                points: POINTS_WIN * totals.wins + POINTS_DRAW * totals.draws,
            }
        })
        .collect();

    rows.sort_by(compare_rows);
    for (index, row) in rows.iter_mut().enumerate() {
        row.position = index as u32 + 1;
    }
    Ok(rows)
}

/// Tie-break chain mandated by the competition rules: points, goal
/// difference and goals for, all descending, with the team name as the
/// final ascending key. Distinct teams never compare equal, so the order
/// is total and rank assignment is unique.
pub fn compare_rows(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.team.cmp(&b.team))
}
