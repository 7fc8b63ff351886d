use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Group;
use crate::rules;

/// Final score of a played match. Both sides travel together, so a
/// half-entered result is unrepresentable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}

/// One fixture of the round-robin calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: Uuid,
    pub group: Group,
    /// Round of the calendar this fixture belongs to (1-based).
    pub round: u8,
    /// Position of the fixture within its round (1-based).
    pub number: u8,
    /// Roster team, or the BYE sentinel for a rest week.
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub score: Option<Score>,
    #[serde(default)]
    pub played: bool,
    /// Administratively resolved without play. Never counts for statistics,
    /// independent of the played flag.
    #[serde(default)]
    pub walkover: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl MatchRecord {
    /// Create an unplayed fixture.
    pub fn new(
        group: Group,
        round: u8,
        number: u8,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            group,
            round,
            number,
            home_team: home_team.into(),
            away_team: away_team.into(),
            score: None,
            played: false,
            walkover: false,
            updated_at: None,
        }
    }

    /// Enter a final result and mark the match played.
    ///
    /// Values are expected to have passed `ScoreValidator::validate`
    /// already; out-of-range values are refused rather than clamped.
    pub fn record_result(&mut self, score: Score, at: DateTime<Utc>) -> Result<(), String> {
        if !rules::is_valid_score_value(score.home) || !rules::is_valid_score_value(score.away) {
            return Err(format!(
                "Score out of range: {}-{} (limit {})",
                score.home,
                score.away,
                rules::MAX_SCORE
            ));
        }
        self.score = Some(score);
        self.played = true;
        self.updated_at = Some(at);
        Ok(())
    }

    /// Resolve the match administratively without play.
    pub fn record_walkover(&mut self, at: DateTime<Utc>) {
        self.walkover = true;
        self.updated_at = Some(at);
    }

    pub fn involves_bye(&self) -> bool {
        rules::is_bye(&self.home_team) || rules::is_bye(&self.away_team)
    }

    /// Eligibility gate for aggregation: the match must belong to the
    /// requested group, be played, not be a walkover, not involve the BYE
    /// sentinel, and carry a result. Each condition applies independently.
    pub fn counts_for_standings(&self, group: Group) -> bool {
        self.group == group
            && self.played
            && !self.walkover
            && !self.involves_bye()
            && self.score.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played_match(group: Group, home: &str, away: &str, score: (u8, u8)) -> MatchRecord {
        let mut record = MatchRecord::new(group, 1, 1, home, away);
        record.record_result(Score { home: score.0, away: score.1 }, Utc::now()).unwrap();
        record
    }

    #[test]
    fn test_record_result_marks_played() {
        let mut record = MatchRecord::new(Group::A, 1, 1, "Alfa", "Beta");
        assert!(!record.played);
        record.record_result(Score { home: 2, away: 1 }, Utc::now()).unwrap();
        assert!(record.played);
        assert_eq!(record.score, Some(Score { home: 2, away: 1 }));
        assert!(record.updated_at.is_some());
    }

    #[test]
    fn test_record_result_refuses_out_of_range() {
        let mut record = MatchRecord::new(Group::A, 1, 1, "Alfa", "Beta");
        assert!(record.record_result(Score { home: 100, away: 0 }, Utc::now()).is_err());
        assert!(record.score.is_none());
        assert!(!record.played);
    }

    #[test]
    fn test_eligibility_gate() {
        let record = played_match(Group::A, "Alfa", "Beta", (2, 1));
        assert!(record.counts_for_standings(Group::A));
        // Wrong group.
        assert!(!record.counts_for_standings(Group::B));

        // Not played.
        let unplayed = MatchRecord::new(Group::A, 1, 1, "Alfa", "Beta");
        assert!(!unplayed.counts_for_standings(Group::A));

        // Walkover excluded even when played with scores present.
        let mut walkover = played_match(Group::A, "Alfa", "Beta", (3, 0));
        walkover.record_walkover(Utc::now());
        assert!(!walkover.counts_for_standings(Group::A));

        // BYE excluded even when played with scores present.
        let bye = played_match(Group::A, "Alfa", crate::rules::BYE_TEAM, (1, 0));
        assert!(bye.involves_bye());
        assert!(!bye.counts_for_standings(Group::A));
    }

    #[test]
    fn test_score_pairing_survives_serde() {
        let record = played_match(Group::B, "Gamma", "Delta", (0, 0));
        let json = serde_json::to_string(&record).unwrap();
        let back: MatchRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.score, Some(Score { home: 0, away: 0 }));
        assert!(back.played);
    }
}
