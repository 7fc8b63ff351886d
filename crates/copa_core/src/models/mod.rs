pub mod group;
pub mod match_record;
pub mod standings;
pub mod tournament;

pub use group::Group;
pub use match_record::{MatchRecord, Score};
pub use standings::StandingsRow;
pub use tournament::TournamentConfig;
