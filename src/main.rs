use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use tracing::{info, warn};

mod config;

use config::{Config, OutputFormat};
use scoreboard::feed;
use scoreboard::{MatchSummary, Scoreboard};

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries summaries
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    let reader: Box<dyn BufRead> = match &config.feed {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open feed {}", path.display()))?;
            info!("Replaying feed: {}", path.display());
            Box::new(BufReader::new(file))
        }
        None => {
            info!("Replaying feed from stdin");
            Box::new(io::stdin().lock())
        }
    };

    let mut board = Scoreboard::with_tie_break(config.tie_break);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let report = feed::replay(&mut board, reader, config.strict, |summary| {
        write_summary(&mut out, summary, config.format)
    })?;

    info!(
        "Feed done: {} applied, {} rejected, {} summaries, {} match(es) still live",
        report.applied,
        report.rejected,
        report.summaries,
        board.len()
    );
    if report.rejected > 0 {
        warn!("{} feed line(s) were rejected", report.rejected);
    }
    Ok(())
}

fn write_summary<W: Write>(
    out: &mut W,
    summary: &[MatchSummary],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            if summary.is_empty() {
                writeln!(out, "(no matches in progress)")?;
            }
            for (i, m) in summary.iter().enumerate() {
                writeln!(out, "{}. {}", i + 1, m)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, summary)?;
            writeln!(out)?;
        }
    }
    out.flush()
}
