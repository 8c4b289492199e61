use thiserror::Error;

/// Errors returned by the match registry. Every one of them leaves the
/// registry untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScoreboardError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("team '{team}' already has a match in progress")]
    Conflict { team: String },

    #[error("no match in progress for {home_team} vs {away_team}")]
    NotFound { home_team: String, away_team: String },
}

/// Coarse classification of a [`ScoreboardError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    Conflict,
    NotFound,
}

impl ScoreboardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScoreboardError::InvalidInput(_) => ErrorKind::InvalidInput,
            ScoreboardError::Conflict { .. } => ErrorKind::Conflict,
            ScoreboardError::NotFound { .. } => ErrorKind::NotFound,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreboardError>;
