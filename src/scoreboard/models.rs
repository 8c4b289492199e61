use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a match: the ordered (home, away) team pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchKey {
    pub home_team: String,
    pub away_team: String,
}

impl MatchKey {
    pub fn new(home_team: &str, away_team: &str) -> Self {
        MatchKey {
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
        }
    }

    /// Whether `team` plays in this match on either side.
    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }
}

/// Mutable registry-side state of an in-progress match.
#[derive(Debug, Clone)]
pub(crate) struct LiveMatch {
    pub key: MatchKey,
    pub home_score: i32,
    pub away_score: i32,
    pub started_at: DateTime<Utc>,
    /// Start order within the owning registry
    pub sequence: u64,
}

impl LiveMatch {
    pub fn total_score(&self) -> i64 {
        i64::from(self.home_score) + i64::from(self.away_score)
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            home_team: self.key.home_team.clone(),
            away_team: self.key.away_team.clone(),
            home_score: self.home_score,
            away_score: self.away_score,
            started_at: self.started_at,
        }
    }
}

/// Read-only snapshot of a match as reported by the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub home_team: String,
    pub away_team: String,
    pub home_score: i32,
    pub away_score: i32,
    pub started_at: DateTime<Utc>,
}

impl MatchSummary {
    pub fn total_score(&self) -> i64 {
        i64::from(self.home_score) + i64::from(self.away_score)
    }
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.home_score, self.away_score, self.away_team
        )
    }
}

/// How matches with equal total scores are ordered in the summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TieBreak {
    /// Most recently started match first
    #[default]
    MostRecentFirst,
    /// Earliest started match first
    InsertionOrder,
}

/// Kind of scoreline change applied by an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreChange {
    Unchanged,
    HomeGoal,
    AwayGoal,
    /// Anything else: a score lowered, both sides moved, or a jump of several goals
    Correction,
}

impl ScoreChange {
    /// Classify the move from `prev` to `curr`, both given as (home, away).
    pub fn classify(prev: (i32, i32), curr: (i32, i32)) -> Self {
        let home_delta = curr.0 - prev.0;
        let away_delta = curr.1 - prev.1;
        match (home_delta, away_delta) {
            (0, 0) => ScoreChange::Unchanged,
            (1, 0) => ScoreChange::HomeGoal,
            (0, 1) => ScoreChange::AwayGoal,
            _ => ScoreChange::Correction,
        }
    }
}

impl fmt::Display for ScoreChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScoreChange::Unchanged => "unchanged",
            ScoreChange::HomeGoal => "goal_home",
            ScoreChange::AwayGoal => "goal_away",
            ScoreChange::Correction => "correction",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_no_change() {
        assert_eq!(ScoreChange::classify((1, 0), (1, 0)), ScoreChange::Unchanged);
    }

    #[test]
    fn test_classify_home_goal() {
        assert_eq!(ScoreChange::classify((0, 0), (1, 0)), ScoreChange::HomeGoal);
    }

    #[test]
    fn test_classify_away_goal() {
        assert_eq!(ScoreChange::classify((2, 2), (2, 3)), ScoreChange::AwayGoal);
    }

    #[test]
    fn test_classify_correction() {
        assert_eq!(ScoreChange::classify((1, 0), (0, 0)), ScoreChange::Correction);
        assert_eq!(ScoreChange::classify((0, 0), (1, 1)), ScoreChange::Correction);
        assert_eq!(ScoreChange::classify((0, 0), (3, 0)), ScoreChange::Correction);
    }

    #[test]
    fn test_key_involves_either_side() {
        let key = MatchKey::new("Spain", "Portugal");
        assert!(key.involves("Spain"));
        assert!(key.involves("Portugal"));
        assert!(!key.involves("spain"));
    }

    #[test]
    fn test_summary_display() {
        let s = MatchSummary {
            home_team: "Austria".into(),
            away_team: "Switzerland".into(),
            home_score: 1,
            away_score: 3,
            started_at: Utc::now(),
        };
        assert_eq!(s.to_string(), "Austria 1 - 3 Switzerland");
        assert_eq!(s.total_score(), 4);
    }
}
