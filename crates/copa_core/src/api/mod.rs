pub mod standings_json;

pub use standings_json::{
    compute_standings_json, validate_score_json, ScoreCheckResponse, StandingsRequest,
    StandingsResponse,
};
