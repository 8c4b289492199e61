use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use scoreboard::TieBreak;

/// How summaries are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Replay a live match feed against an in-memory scoreboard
#[derive(Parser, Debug, Clone)]
#[command(name = "scoreboard", version, about)]
pub struct Config {
    /// Feed file to replay (reads stdin when omitted)
    #[arg(long, env = "SCOREBOARD_FEED")]
    pub feed: Option<PathBuf>,

    /// Ordering of matches with equal total score
    #[arg(
        long,
        env = "SCOREBOARD_TIE_BREAK",
        value_enum,
        default_value = "most-recent-first"
    )]
    pub tie_break: TieBreak,

    /// Summary output format
    #[arg(long, env = "SCOREBOARD_FORMAT", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Abort on the first rejected or unparseable feed line
    #[arg(long, env = "SCOREBOARD_STRICT", default_value = "false")]
    pub strict: bool,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(path) = &self.feed {
            if !path.is_file() {
                anyhow::bail!("feed file not found: {}", path.display());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["scoreboard"]).unwrap();
        assert!(config.feed.is_none());
        assert_eq!(config.tie_break, TieBreak::MostRecentFirst);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.strict);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_flags() {
        let config = Config::try_parse_from([
            "scoreboard",
            "--tie-break",
            "insertion-order",
            "--format",
            "json",
            "--strict",
        ])
        .unwrap();
        assert_eq!(config.tie_break, TieBreak::InsertionOrder);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.strict);
    }

    #[test]
    fn test_missing_feed_file_rejected() {
        let config =
            Config::try_parse_from(["scoreboard", "--feed", "/nonexistent/feed.txt"]).unwrap();
        assert!(config.validate().is_err());
    }
}
