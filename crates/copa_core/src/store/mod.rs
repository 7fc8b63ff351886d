//! Persistence seam.
//!
//! The engine owns no storage. These traits are the contracts the
//! surrounding application implements; [`MemoryStore`] is the reference
//! implementation used by tests and the CLI.

pub mod service;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Group, MatchRecord, Score, StandingsRow, TournamentConfig};

pub use service::{ServiceError, StandingsService};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Match not found: {id}")]
    MatchNotFound { id: Uuid },

    #[error("Rejected result: {0}")]
    RejectedResult(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Supplies the complete current match set of a group and accepts the
/// replacement standings table.
///
/// Standings rows are keyed (group, team) with last-write-wins upsert
/// semantics: persisting a recomputed table fully replaces every row of
/// that group.
pub trait MatchStore {
    fn matches_for_group(&self, group: Group) -> Result<Vec<MatchRecord>, StoreError>;

    /// Enter a validated result for a match and mark it played.
    fn enter_result(&mut self, id: Uuid, score: Score, at: DateTime<Utc>)
        -> Result<(), StoreError>;

    /// Resolve a match administratively without play.
    fn enter_walkover(&mut self, id: Uuid, at: DateTime<Utc>) -> Result<(), StoreError>;

    fn upsert_standings(&mut self, rows: &[StandingsRow]) -> Result<(), StoreError>;

    /// Persisted rows of a group, ordered by position.
    fn standings_for_group(&self, group: Group) -> Result<Vec<StandingsRow>, StoreError>;
}

/// Supplies the authoritative ordered roster of each group.
pub trait RosterProvider {
    fn roster(&self, group: Group) -> Result<Vec<String>, StoreError>;
}

impl RosterProvider for TournamentConfig {
    fn roster(&self, group: Group) -> Result<Vec<String>, StoreError> {
        Ok(TournamentConfig::roster(self, group).to_vec())
    }
}

/// Invoked after a group's standings were recomputed and persisted. The
/// push transport itself (websocket, channel, ...) lives outside the core;
/// this is only the hook it attaches to.
pub trait ChangeListener {
    fn standings_changed(&mut self, group: Group, rows: &[StandingsRow]);
}

/// In-memory store with the same upsert semantics production storage
/// provides.
#[derive(Debug, Default)]
pub struct MemoryStore {
    matches: Vec<MatchRecord>,
    standings: HashMap<(Group, String), StandingsRow>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_matches(matches: Vec<MatchRecord>) -> Self {
        Self { matches, standings: HashMap::new() }
    }

    pub fn insert_match(&mut self, record: MatchRecord) {
        self.matches.push(record);
    }

    fn match_mut(&mut self, id: Uuid) -> Result<&mut MatchRecord, StoreError> {
        self.matches.iter_mut().find(|m| m.id == id).ok_or(StoreError::MatchNotFound { id })
    }
}

impl MatchStore for MemoryStore {
    fn matches_for_group(&self, group: Group) -> Result<Vec<MatchRecord>, StoreError> {
        Ok(self.matches.iter().filter(|m| m.group == group).cloned().collect())
    }

    fn enter_result(
        &mut self,
        id: Uuid,
        score: Score,
        at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        self.match_mut(id)?.record_result(score, at).map_err(StoreError::RejectedResult)
    }

    fn enter_walkover(&mut self, id: Uuid, at: DateTime<Utc>) -> Result<(), StoreError> {
        self.match_mut(id)?.record_walkover(at);
        Ok(())
    }

    fn upsert_standings(&mut self, rows: &[StandingsRow]) -> Result<(), StoreError> {
        for row in rows {
            self.standings.insert((row.group, row.team.clone()), row.clone());
        }
        Ok(())
    }

    fn standings_for_group(&self, group: Group) -> Result<Vec<StandingsRow>, StoreError> {
        let mut rows: Vec<StandingsRow> =
            self.standings.values().filter(|r| r.group == group).cloned().collect();
        rows.sort_by_key(|r| r.position);
        Ok(rows)
    }
}
