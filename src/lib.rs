//! Live match scoreboard.
//!
//! - [`Scoreboard`]: in-memory registry of in-progress matches with an
//!   ordered summary
//! - [`SharedScoreboard`]: mutex-guarded handle for multi-threaded callers
//! - [`feed`]: line-oriented command format and replayer driving a registry

pub mod feed;
pub mod scoreboard;

pub use scoreboard::{
    ErrorKind, MatchKey, MatchSummary, ScoreChange, Scoreboard, ScoreboardError,
    SharedScoreboard, TieBreak,
};
