// file: src/main.rs
// version: 1.0.0
// guid: 5c1e7a20-8d43-4b6f-a9f2-3e7d1c0b6a95

//! cmdtrack-backfill - Main entry point

use clap::Parser;
use cmdtrack_backfill::{
    cli::{args::Cli, commands::backfill_command},
    logging::logger,
};
use std::process::ExitCode;
use tokio::signal;
use tracing::{error, warn};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    if let Err(e) = logger::init_logger(cli.verbose, cli.quiet) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    let command_future =
        logger::with_async_operation_span("backfill", || backfill_command(&cli));

    // Run command with signal handling
    tokio::select! {
        result = command_future => match result {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) if e.is_tracker_failure() => {
                error!("{}", e);
                std::process::exit(-1);
            }
            Err(e) => {
                error!("{}", e);
                ExitCode::FAILURE
            }
        },
        _ = signal::ctrl_c() => {
            warn!("Application interrupted by user");
            std::process::exit(130); // Standard exit code for Ctrl+C
        }
    }
}
