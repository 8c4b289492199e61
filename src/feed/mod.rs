pub mod command;

pub use command::{parse_line, Command, FeedError};

use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{debug, warn};

use crate::scoreboard::{MatchSummary, Scoreboard, ScoreboardError};

/// Fatal replay failures.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read feed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Parse(#[from] FeedError),

    #[error("line {line}: {source}")]
    Rejected {
        line: usize,
        #[source]
        source: ScoreboardError,
    },
}

/// Outcome counters for a replayed feed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayReport {
    pub applied: usize,
    pub rejected: usize,
    pub summaries: usize,
}

/// Apply one command to the registry.
pub fn apply(board: &mut Scoreboard, cmd: &Command) -> Result<(), ScoreboardError> {
    match cmd {
        Command::Start {
            home_team,
            away_team,
        } => board.start_match(home_team, away_team),
        Command::Update {
            home_team,
            away_team,
            home_score,
            away_score,
        } => board.update_score(home_team, away_team, *home_score, *away_score),
        Command::Finish {
            home_team,
            away_team,
        } => board.finish_match(home_team, away_team),
        Command::Summary => Ok(()),
    }
}

/// Replay a feed line by line against `board`.
///
/// Every `summary` command hands the current summary to `on_summary`.
/// Unparseable lines and commands the registry refuses are logged and counted;
/// with `strict` the first one aborts the replay instead.
pub fn replay<R, F>(
    board: &mut Scoreboard,
    reader: R,
    strict: bool,
    mut on_summary: F,
) -> Result<ReplayReport, ReplayError>
where
    R: BufRead,
    F: FnMut(&[MatchSummary]) -> io::Result<()>,
{
    let mut report = ReplayReport::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        let cmd = match parse_line(&line, line_no) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) if strict => return Err(e.into()),
            Err(e) => {
                warn!("Skipping feed line: {}", e);
                report.rejected += 1;
                continue;
            }
        };

        if cmd == Command::Summary {
            on_summary(&board.summary())?;
            report.summaries += 1;
            continue;
        }

        match apply(board, &cmd) {
            Ok(()) => {
                debug!("line {}: applied {:?}", line_no, cmd);
                report.applied += 1;
            }
            Err(source) if strict => {
                return Err(ReplayError::Rejected {
                    line: line_no,
                    source,
                })
            }
            Err(e) => {
                warn!("line {}: command rejected: {}", line_no, e);
                report.rejected += 1;
            }
        }
    }

    Ok(report)
}
