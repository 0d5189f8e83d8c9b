//! Command implementations for the SLCSP calculator CLI
//!
//! This module contains the main command execution logic. The determination
//! workflow lives in [`determine`]; logging setup and the run summary in
//! [`shared`].

pub mod determine;
pub mod shared;

pub use determine::{RunOutput, run_determine};
pub use shared::RunSummary;

use crate::Result;
use crate::cli::args::Args;
use tracing::debug;

/// Main command runner for the SLCSP calculator
///
/// Sets up logging, builds the run configuration from the arguments and runs
/// the determination with answers printed to standard output.
pub fn run(args: Args) -> Result<RunSummary> {
    shared::setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    let config = args.to_config();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    run_determine(&config, &mut out).map(|output| output.summary)
}
