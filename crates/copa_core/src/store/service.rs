//! Caller-side orchestration of the validate, store, recompute, persist
//! flow that every score edit triggers.

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use super::{ChangeListener, MatchStore, RosterProvider, StoreError};
use crate::engine::{compute_standings, ScoreError, ScoreValidator};
use crate::error::StandingsError;
use crate::models::{Group, Score, StandingsRow};

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid score: {0}")]
    Score(#[from] ScoreError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Standings error: {0}")]
    Standings(#[from] StandingsError),
}

/// Orchestrates score entry and table recomputation for one tournament.
///
/// Methods take `&mut self`, so a single service instance never runs two
/// recomputation commits concurrently. Callers that reach the same storage
/// through several instances must serialize writes per group themselves;
/// the computation itself is idempotent either way.
pub struct StandingsService<S, R> {
    store: S,
    rosters: R,
    listeners: Vec<Box<dyn ChangeListener>>,
}

impl<S: MatchStore, R: RosterProvider> StandingsService<S, R> {
    pub fn new(store: S, rosters: R) -> Self {
        Self { store, rosters, listeners: Vec::new() }
    }

    /// Register a hook to run after each persisted recomputation.
    pub fn subscribe(&mut self, listener: Box<dyn ChangeListener>) {
        self.listeners.push(listener);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate and enter a result, then recompute and persist the group
    /// table. A validation rejection leaves the store untouched.
    pub fn record_result(
        &mut self,
        group: Group,
        id: Uuid,
        home_raw: &str,
        away_raw: &str,
    ) -> Result<Vec<StandingsRow>, ServiceError> {
        let home = ScoreValidator::validate(home_raw)?;
        let away = ScoreValidator::validate(away_raw)?;

        self.store.enter_result(id, Score { home, away }, Utc::now())?;
        log::info!("result {}-{} entered for match {}", home, away, id);
        self.refresh_group(group)
    }

    /// Resolve a match administratively, then recompute the table it no
    /// longer counts toward.
    pub fn record_walkover(
        &mut self,
        group: Group,
        id: Uuid,
    ) -> Result<Vec<StandingsRow>, ServiceError> {
        self.store.enter_walkover(id, Utc::now())?;
        log::info!("walkover recorded for match {}", id);
        self.refresh_group(group)
    }

    /// Recompute the group table from the store's current match set and
    /// persist it wholesale. Invoked directly when an external change
    /// notification arrives.
    pub fn refresh_group(&mut self, group: Group) -> Result<Vec<StandingsRow>, ServiceError> {
        let matches = self.store.matches_for_group(group)?;
        let roster = self.rosters.roster(group)?;
        let rows = compute_standings(&matches, &roster, group)?;

        self.store.upsert_standings(&rows)?;
        for listener in &mut self.listeners {
            listener.standings_changed(group, &rows);
        }
        log::debug!("standings refreshed for group {}", group.code());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MatchRecord, TournamentConfig};
    use crate::store::MemoryStore;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn fixture() -> (MemoryStore, TournamentConfig, Uuid, Uuid) {
        let first = MatchRecord::new(Group::A, 1, 1, "Alfa", "Beta");
        let second = MatchRecord::new(Group::A, 1, 2, "Gamma", "Alfa");
        let ids = (first.id, second.id);
        let store = MemoryStore::with_matches(vec![first, second]);
        let config = TournamentConfig::new("Copa Dorada").with_group(
            Group::A,
            vec!["Alfa".into(), "Beta".into(), "Gamma".into()],
        );
        (store, config, ids.0, ids.1)
    }

    struct CountingListener(Arc<AtomicUsize>);

    impl ChangeListener for CountingListener {
        fn standings_changed(&mut self, _group: Group, _rows: &[StandingsRow]) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_record_result_recomputes_and_persists() {
        let (store, config, first_id, _) = fixture();
        let mut service = StandingsService::new(store, config);

        let rows = service.record_result(Group::A, first_id, "2", "1").unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].team, "Alfa");
        assert_eq!(rows[0].points, 3);

        let persisted = service.store().standings_for_group(Group::A).unwrap();
        assert_eq!(persisted, rows);
    }

    #[test]
    fn test_invalid_score_leaves_store_untouched() {
        let (store, config, first_id, _) = fixture();
        let mut service = StandingsService::new(store, config);

        let err = service.record_result(Group::A, first_id, "2", "12a").unwrap_err();
        assert!(matches!(err, ServiceError::Score(ScoreError::NotANumber(_))));

        let matches = service.store().matches_for_group(Group::A).unwrap();
        assert!(matches.iter().all(|m| !m.played && m.score.is_none()));
        assert!(service.store().standings_for_group(Group::A).unwrap().is_empty());
    }

    #[test]
    fn test_walkover_drops_match_from_table() {
        let (store, config, first_id, _) = fixture();
        let mut service = StandingsService::new(store, config);

        service.record_result(Group::A, first_id, "3", "0").unwrap();
        let rows = service.record_walkover(Group::A, first_id).unwrap();
        assert!(rows.iter().all(|r| r.played == 0 && r.points == 0));
    }

    #[test]
    fn test_listeners_fire_per_refresh() {
        let (store, config, first_id, second_id) = fixture();
        let mut service = StandingsService::new(store, config);
        let count = Arc::new(AtomicUsize::new(0));
        service.subscribe(Box::new(CountingListener(Arc::clone(&count))));

        service.record_result(Group::A, first_id, "1", "1").unwrap();
        service.record_result(Group::A, second_id, "0", "2").unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_successive_edits_are_last_write_wins() {
        let (store, config, first_id, _) = fixture();
        let mut service = StandingsService::new(store, config);

        service.record_result(Group::A, first_id, "0", "5").unwrap();
        let rows = service.record_result(Group::A, first_id, "4", "0").unwrap();

        let alfa = rows.iter().find(|r| r.team == "Alfa").unwrap();
        // Only the latest edit of the match counts.
        assert_eq!((alfa.played, alfa.points, alfa.goal_difference), (1, 3, 4));
        let persisted = service.store().standings_for_group(Group::A).unwrap();
        assert_eq!(persisted, rows);
    }
}
