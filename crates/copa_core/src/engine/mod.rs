pub mod score_validator;
pub mod standings;

pub use score_validator::{ScoreError, ScoreValidator};
pub use standings::{compare_rows, compute_standings};
