//! Shared components for CLI commands
//!
//! This module contains the logging setup and the run summary reported at the
//! end of a run.

use crate::app::services::batch_driver::BatchStats;
use crate::cli::args::Args;
use crate::Result;
use std::path::PathBuf;
use tracing::{debug, info};

/// Summary of one run, logged when the run completes
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Rows read from the ZIP table
    pub zip_rows: usize,
    /// Distinct ZIP codes in the ZIP table
    pub known_zips: usize,
    /// ZIP codes resolving to exactly one rate area
    pub unique_zips: usize,
    /// ZIP codes spanning several rate areas
    pub ambiguous_zips: usize,
    /// Plan table rows of the selected metal level
    pub plan_rows: usize,
    /// Distinct price points of the selected metal level
    pub price_points: usize,
    /// How the requests were answered
    pub batch: BatchStats,
    /// Output table written, if any
    pub output_written: Option<PathBuf>,
    /// Self-test verdict, if the self-test ran
    pub self_test_passed: Option<bool>,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

impl RunSummary {
    /// Log the summary at info level
    pub fn log(&self) {
        info!(
            "ZIP table: {} rows, {} ZIP codes ({} unique, {} ambiguous)",
            self.zip_rows, self.known_zips, self.unique_zips, self.ambiguous_zips
        );
        info!(
            "Plan table: {} rows, {} distinct price points",
            self.plan_rows, self.price_points
        );
        info!("Requests: {}", self.batch.summary());

        match &self.output_written {
            Some(path) => info!("Answers written to {}", path.display()),
            None => info!("Answers not persisted (single ZIP code mode)"),
        }

        if let Some(passed) = self.self_test_passed {
            info!("Self-test {}", if passed { "passed" } else { "failed" });
        }

        info!("Completed in {:.2?}", self.processing_time);
    }
}

/// Set up structured logging on standard error
///
/// Standard output carries only the answer table.
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("slcsp={}", log_level)));

    // Quiet runs only surface errors, which need no uptime stamp
    let timed_layer = (!args.quiet).then(|| {
        fmt::layer()
            .with_target(false)
            .with_timer(fmt::time::uptime())
            .with_writer(std::io::stderr)
    });
    let compact_layer = args.quiet.then(|| {
        fmt::layer()
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr)
            .compact()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(timed_layer)
        .with(compact_layer)
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
