// file: src/cli/args.rs
// version: 1.0.0
// guid: d01daef4-0228-4fb0-9e41-c5c1849dab47

//! Command line argument definitions

use crate::config::TrackerSection;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cmdtrack-backfill")]
#[command(about = "Replay shell history into cmdtrack, one `cmdtrack track` call per entry")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(after_help = "Example:\n  fc -t %s -l 1 10 | cmdtrack-backfill")]
pub struct Cli {
    /// History files to read; stdin when none are given or for `-`
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    #[arg(short, long, help = "Config file (default: <config dir>/cmdtrack-backfill/config.toml)")]
    pub config: Option<String>,

    #[arg(short, long, value_name = "PROG", help = "Tracker program to invoke")]
    pub tracker: Option<String>,

    #[arg(short = 'd', long, value_name = "DIR", help = "Working directory recorded for each command")]
    pub workdir: Option<String>,

    #[arg(long, help = "Tracker server URL, forwarded as --url")]
    pub url: Option<String>,

    #[arg(short = 'n', long, help = "Hostname forwarded as --hostname")]
    pub hostname: Option<String>,

    #[arg(long, help = "Show what would be run without invoking the tracker")]
    pub dry_run: bool,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Tracker overrides given on the command line
    pub fn tracker_overrides(&self) -> TrackerSection {
        TrackerSection {
            program: self.tracker.clone(),
            workdir: self.workdir.clone(),
            url: self.url.clone(),
            hostname: self.hostname.clone(),
        }
    }
}
