//! # copa_core - Tournament Standings & Score Validation Engine
//!
//! This library provides the scoring core of a multi-group round-robin
//! tournament tracker: admission validation for reported scores and
//! deterministic, from-scratch recomputation of ranked group tables.
//!
//! ## Features
//! - 100% deterministic aggregation (same match set = same table)
//! - Strict total ordering via the points / goal difference / goals for /
//!   team name tie-break chain
//! - JSON API for easy integration with UI layers
//! - Storage-agnostic persistence seam with last-write-wins upsert contract

pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod rules;
pub mod store;

// Re-export main API functions
pub use api::{
    compute_standings_json, validate_score_json, ScoreCheckResponse, StandingsRequest,
    StandingsResponse,
};
pub use engine::{compare_rows, compute_standings, ScoreError, ScoreValidator};
pub use error::{Result, StandingsError};

// Re-export model types
pub use models::{Group, MatchRecord, Score, StandingsRow, TournamentConfig};

// Re-export the persistence seam
pub use store::{
    ChangeListener, MatchStore, MemoryStore, RosterProvider, ServiceError, StandingsService,
    StoreError,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
