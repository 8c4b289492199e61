pub mod error;
pub mod models;
pub mod shared;

pub use error::{ErrorKind, Result, ScoreboardError};
pub use models::{MatchKey, MatchSummary, ScoreChange, TieBreak};
pub use shared::SharedScoreboard;

use chrono::Utc;
use std::collections::HashMap;
use tracing::{debug, info};

use models::LiveMatch;

/// In-memory registry of in-progress matches.
///
/// Matches are keyed by their exact (home, away) pair. A team can play in at
/// most one active match, whichever side it is on. Every operation validates
/// its input before touching state, so a failed call never changes the
/// registry.
///
/// `Scoreboard` is not synchronised; wrap it in a [`SharedScoreboard`] to use
/// it from several threads.
#[derive(Debug, Default)]
pub struct Scoreboard {
    matches: HashMap<MatchKey, LiveMatch>,
    next_sequence: u64,
    tie_break: TieBreak,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry that orders equal-score matches with `tie_break`.
    pub fn with_tie_break(tie_break: TieBreak) -> Self {
        Scoreboard {
            tie_break,
            ..Self::default()
        }
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Start a new 0-0 match between `home_team` and `away_team`.
    pub fn start_match(&mut self, home_team: &str, away_team: &str) -> Result<()> {
        validate_teams(home_team, away_team)?;
        if home_team == away_team {
            return Err(ScoreboardError::InvalidInput(format!(
                "a team cannot play itself: '{}'",
                home_team
            )));
        }
        for team in [home_team, away_team] {
            if self.matches.keys().any(|k| k.involves(team)) {
                return Err(ScoreboardError::Conflict {
                    team: team.to_string(),
                });
            }
        }

        let key = MatchKey::new(home_team, away_team);
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.matches.insert(
            key.clone(),
            LiveMatch {
                key,
                home_score: 0,
                away_score: 0,
                started_at: Utc::now(),
                sequence,
            },
        );
        debug!("Match started: {} vs {} (#{})", home_team, away_team, sequence);
        Ok(())
    }

    /// Overwrite the scoreline of the match played by exactly this pair.
    pub fn update_score(
        &mut self,
        home_team: &str,
        away_team: &str,
        home_score: i32,
        away_score: i32,
    ) -> Result<()> {
        validate_teams(home_team, away_team)?;
        if home_score < 0 || away_score < 0 {
            return Err(ScoreboardError::InvalidInput(format!(
                "scores must be non-negative, got {}-{}",
                home_score, away_score
            )));
        }

        let m = self
            .matches
            .get_mut(&MatchKey::new(home_team, away_team))
            .ok_or_else(|| not_found(home_team, away_team))?;

        let change = ScoreChange::classify(
            (m.home_score, m.away_score),
            (home_score, away_score),
        );
        m.home_score = home_score;
        m.away_score = away_score;

        if change == ScoreChange::Unchanged {
            debug!("Score unchanged: {} {}-{} {}", home_team, home_score, away_score, away_team);
        } else {
            info!(
                "Score update ({}): {} {}-{} {}",
                change, home_team, home_score, away_score, away_team
            );
        }
        Ok(())
    }

    /// Remove the match played by exactly this pair.
    pub fn finish_match(&mut self, home_team: &str, away_team: &str) -> Result<()> {
        validate_teams(home_team, away_team)?;
        let finished = self
            .matches
            .remove(&MatchKey::new(home_team, away_team))
            .ok_or_else(|| not_found(home_team, away_team))?;
        debug!(
            "Match finished: {} {}-{} {}",
            home_team, finished.home_score, finished.away_score, away_team
        );
        Ok(())
    }

    /// Snapshot of all active matches, highest total score first.
    ///
    /// Matches with equal totals are ordered by the registry's [`TieBreak`]
    /// policy; by default the most recently started match comes first.
    pub fn summary(&self) -> Vec<MatchSummary> {
        let mut live: Vec<&LiveMatch> = self.matches.values().collect();
        live.sort_by(|a, b| {
            b.total_score()
                .cmp(&a.total_score())
                .then_with(|| match self.tie_break {
                    TieBreak::MostRecentFirst => b.sequence.cmp(&a.sequence),
                    TieBreak::InsertionOrder => a.sequence.cmp(&b.sequence),
                })
        });
        live.into_iter().map(LiveMatch::summary).collect()
    }

    /// Look up the match played by exactly this pair.
    pub fn get(&self, home_team: &str, away_team: &str) -> Option<MatchSummary> {
        self.matches
            .get(&MatchKey::new(home_team, away_team))
            .map(LiveMatch::summary)
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

fn validate_teams(home_team: &str, away_team: &str) -> Result<()> {
    for (side, name) in [("home", home_team), ("away", away_team)] {
        if name.trim().is_empty() {
            return Err(ScoreboardError::InvalidInput(format!(
                "{} team name must not be blank",
                side
            )));
        }
    }
    Ok(())
}

fn not_found(home_team: &str, away_team: &str) -> ScoreboardError {
    ScoreboardError::NotFound {
        home_team: home_team.to_string(),
        away_team: away_team.to_string(),
    }
}
