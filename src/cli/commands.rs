// file: src/cli/commands.rs
// version: 1.0.0
// guid: ac66103d-595c-49c9-829f-5b33e803bc99

//! Command implementations for the CLI

use crate::{
    cli::args::Cli,
    config::ConfigLoader,
    history::HistoryParser,
    input::{InputSource, LineReader},
    tracker::{ProcessTracker, Tracker},
    BackfillError, Result,
};
use std::io::Write;
use tracing::{debug, info};

/// First line of the diagnostic printed when the tracker fails
pub const FAILURE_MESSAGE: &str = "Executing command failed";

/// Counters for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackfillSummary {
    pub lines_read: usize,
    pub tracked: usize,
}

impl BackfillSummary {
    /// Lines that did not look like history entries
    pub fn skipped(&self) -> usize {
        self.lines_read - self.tracked
    }
}

/// Track every history entry read from `reader`, echoing each one to `out`
/// once the tracker accepts it. Stops at the first tracker error.
pub async fn backfill<T, W>(
    reader: &mut LineReader,
    parser: &HistoryParser,
    tracker: &mut T,
    out: &mut W,
) -> Result<BackfillSummary>
where
    T: Tracker + ?Sized,
    W: Write + Send,
{
    let mut summary = BackfillSummary::default();

    while let Some(line) = reader.next_line().await? {
        summary.lines_read += 1;

        let Some(entry) = parser.parse_line(&line) else {
            continue;
        };

        debug!(
            ordinal = %entry.ordinal,
            timestamp = %entry.timestamp,
            recorded_at = ?entry.recorded_at(),
            modified = entry.is_modified(),
            "Parsed history entry"
        );

        tracker.track(&entry).await?;

        entry.write_echo(out)?;
        out.flush()?;
        summary.tracked += 1;
    }

    Ok(summary)
}

/// Print the two-line tracker failure diagnostic
pub fn report_failure<W: Write>(out: &mut W, err: &BackfillError) -> std::io::Result<()> {
    writeln!(out, "{}", FAILURE_MESSAGE)?;
    writeln!(out, "{:?}", err.tracker_args())?;
    out.flush()
}

/// Run the backfill described by the command line
pub async fn backfill_command(cli: &Cli) -> Result<BackfillSummary> {
    let loader = ConfigLoader::new();
    let settings = loader.resolve(cli.config.as_deref(), cli.tracker_overrides())?;

    let mut tracker = ProcessTracker::new(settings).with_dry_run(cli.dry_run);
    let parser = HistoryParser::new()?;
    let mut reader = LineReader::new(InputSource::from_args(&cli.files));
    let mut stdout = std::io::stdout();

    let result = match tracker.preflight() {
        Ok(()) => backfill(&mut reader, &parser, &mut tracker, &mut stdout).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(summary) => {
            info!(
                "Backfill complete: {} entries tracked, {} lines skipped",
                summary.tracked,
                summary.skipped()
            );
            Ok(summary)
        }
        Err(e) => {
            if e.is_tracker_failure() {
                report_failure(&mut stdout, &e)?;
            }
            Err(e)
        }
    }
}
