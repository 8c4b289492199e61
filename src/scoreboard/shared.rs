use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{MatchSummary, Result, Scoreboard, TieBreak};

/// Thread-safe scoreboard handle (single registry behind a mutex).
///
/// Each operation holds the lock for its whole duration, so the uniqueness
/// check in `start_match` and the insertion that follows are atomic with
/// respect to every other call on any clone of the handle.
#[derive(Debug, Clone, Default)]
pub struct SharedScoreboard {
    inner: Arc<Mutex<Scoreboard>>,
}

impl SharedScoreboard {
    pub fn new(board: Scoreboard) -> Self {
        SharedScoreboard {
            inner: Arc::new(Mutex::new(board)),
        }
    }

    pub fn with_tie_break(tie_break: TieBreak) -> Self {
        Self::new(Scoreboard::with_tie_break(tie_break))
    }

    // Operations validate before mutating, so a poisoned registry is still consistent.
    fn lock(&self) -> MutexGuard<'_, Scoreboard> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn start_match(&self, home_team: &str, away_team: &str) -> Result<()> {
        self.lock().start_match(home_team, away_team)
    }

    pub fn update_score(
        &self,
        home_team: &str,
        away_team: &str,
        home_score: i32,
        away_score: i32,
    ) -> Result<()> {
        self.lock()
            .update_score(home_team, away_team, home_score, away_score)
    }

    pub fn finish_match(&self, home_team: &str, away_team: &str) -> Result<()> {
        self.lock().finish_match(home_team, away_team)
    }

    pub fn summary(&self) -> Vec<MatchSummary> {
        self.lock().summary()
    }

    pub fn get(&self, home_team: &str, away_team: &str) -> Option<MatchSummary> {
        self.lock().get(home_team, away_team)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
