// file: tests/integration_test.rs
// version: 1.0.0
// guid: 0e8f3b6c-2a71-4d95-b8c4-7f19e2d5a364

//! Integration tests for the history backfill

use cmdtrack_backfill::{
    cli::commands::{backfill, BackfillSummary},
    history::{HistoryEntry, HistoryParser},
    input::{InputSource, LineReader},
    tracker::{ProcessTracker, Tracker, TrackerSettings},
    BackfillError, Result,
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const HISTORY: &str = "\
    1  1699999990  cd /tmp
    2* 1699999995  vim notes.txt
this line is not history
    3  1699999999  echo 'a  b' | wc -c
";

/// Tracker that only remembers what it was asked to track
#[derive(Default)]
struct MemoryTracker {
    entries: Vec<HistoryEntry>,
}

#[async_trait::async_trait]
impl Tracker for MemoryTracker {
    async fn track(&mut self, entry: &HistoryEntry) -> Result<()> {
        self.entries.push(entry.clone());
        Ok(())
    }
}

async fn write_history(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    tokio::fs::write(&path, content).await.unwrap();
    path
}

#[tokio::test]
async fn test_backfill_from_multiple_files() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let first = write_history(temp_dir.path(), "a.hist", HISTORY).await;
    let second = write_history(temp_dir.path(), "b.hist", "   10  1700000000  make\n").await;

    let mut reader = LineReader::new(InputSource::from_args(&[first, second]));
    let parser = HistoryParser::new()?;
    let mut tracker = MemoryTracker::default();
    let mut out = Vec::new();

    let summary = backfill(&mut reader, &parser, &mut tracker, &mut out).await?;

    assert_eq!(summary, BackfillSummary { lines_read: 5, tracked: 4 });
    let commands: Vec<&str> = tracker.entries.iter().map(|e| e.command.as_str()).collect();
    assert_eq!(commands, ["cd /tmp", "vim notes.txt", "echo 'a  b' | wc -c", "make"]);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "1 1699999990 cd /tmp\n\
         2* 1699999995 vim notes.txt\n\
         3 1699999999 echo 'a  b' | wc -c\n\
         10 1700000000 make\n"
    );

    Ok(())
}

#[tokio::test]
async fn test_missing_second_file_fails_after_first() {
    let temp_dir = TempDir::new().unwrap();
    let first = write_history(temp_dir.path(), "a.hist", HISTORY).await;
    let missing = temp_dir.path().join("missing.hist");

    let mut reader = LineReader::new(InputSource::from_args(&[first, missing]));
    let parser = HistoryParser::new().unwrap();
    let mut tracker = MemoryTracker::default();
    let mut out = Vec::new();

    let err = backfill(&mut reader, &parser, &mut tracker, &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, BackfillError::Input { .. }));
    assert!(!err.is_tracker_failure());
    assert_eq!(tracker.entries.len(), 3);
}

#[cfg(unix)]
mod process {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    /// Shell tracker that logs its arguments and rejects the command `fail`
    async fn recording_tracker(dir: &Path) -> (PathBuf, PathBuf) {
        let log = dir.join("calls.log");
        let script = dir.join("fake-cmdtrack");
        let body = format!(
            "#!/bin/sh\nprintf '%s|' \"$@\" >> '{}'\necho >> '{}'\n[ \"$3\" != \"fail\" ]\n",
            log.display(),
            log.display()
        );
        tokio::fs::write(&script, body).await.unwrap();
        let mut perms = std::fs::metadata(&script).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&script, perms).unwrap();
        (script, log)
    }

    #[tokio::test]
    async fn test_invocation_arguments_reach_tracker() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let (script, log) = recording_tracker(temp_dir.path()).await;
        let input = write_history(temp_dir.path(), "h", " 12  1699999999  echo hi\n").await;

        let settings = TrackerSettings {
            program: script.display().to_string(),
            url: Some("http://localhost:8080/".to_string()),
            ..TrackerSettings::default()
        };
        let mut tracker = ProcessTracker::new(settings);
        tracker.preflight()?;

        let mut reader = LineReader::new(vec![InputSource::File(input)]);
        let parser = HistoryParser::new()?;
        let mut out = Vec::new();

        backfill(&mut reader, &parser, &mut tracker, &mut out).await?;

        let calls = tokio::fs::read_to_string(&log).await?;
        assert_eq!(
            calls,
            "track|--command|echo hi|--timestamp|1699999999|--workdir|~|--url|http://localhost:8080/|\n"
        );
        assert_eq!(String::from_utf8(out).unwrap(), "12 1699999999 echo hi\n");
        Ok(())
    }

    #[tokio::test]
    async fn test_raw_bytes_and_empty_commands_reach_tracker() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let (script, log) = recording_tracker(temp_dir.path()).await;
        let input = temp_dir.path().join("h");
        tokio::fs::write(&input, b"7 1699999990 cat caf\xe9.txt\r\n8 1699999995\n").await?;

        let settings = TrackerSettings {
            program: script.display().to_string(),
            ..TrackerSettings::default()
        };
        let mut tracker = ProcessTracker::new(settings);
        let mut reader = LineReader::new(vec![InputSource::File(input)]);
        let parser = HistoryParser::new()?;
        let mut out = Vec::new();

        backfill(&mut reader, &parser, &mut tracker, &mut out).await?;

        let calls = tokio::fs::read(&log).await?;
        assert_eq!(
            calls,
            b"track|--command|cat caf\xe9.txt|--timestamp|1699999990|--workdir|~|\n\
              track|--command||--timestamp|1699999995|--workdir|~|\n"
        );
        assert_eq!(out, b"7 1699999990 cat caf\xe9.txt\n8 1699999995 \n");
        Ok(())
    }

    #[tokio::test]
    async fn test_non_zero_exit_halts_run() {
        let temp_dir = TempDir::new().unwrap();
        let (script, log) = recording_tracker(temp_dir.path()).await;
        let input = write_history(
            temp_dir.path(),
            "h",
            "1 1699999991 ok\n2 1699999992 fail\n3 1699999993 never\n",
        )
        .await;

        let settings = TrackerSettings {
            program: script.display().to_string(),
            ..TrackerSettings::default()
        };
        let mut tracker = ProcessTracker::new(settings);
        let mut reader = LineReader::new(vec![InputSource::File(input)]);
        let parser = HistoryParser::new().unwrap();
        let mut out = Vec::new();

        let err = backfill(&mut reader, &parser, &mut tracker, &mut out)
            .await
            .unwrap_err();

        match &err {
            BackfillError::TrackerFailed { args, code } => {
                assert_eq!(*code, Some(1));
                assert_eq!(args[3], "fail");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let calls = tokio::fs::read_to_string(&log).await.unwrap();
        assert_eq!(calls.lines().count(), 2);
        assert!(!calls.contains("never"));
        assert_eq!(String::from_utf8(out).unwrap(), "1 1699999991 ok\n");
    }
}
