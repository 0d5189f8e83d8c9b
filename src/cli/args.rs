//! Command-line argument definitions for the SLCSP calculator
//!
//! This module defines the CLI interface using the clap derive API. A run
//! either answers the whole request table or, when a ZIP code is given as
//! the positional argument, that single ZIP code.

use crate::config::SlcspConfig;
use crate::constants::{METAL_LEVEL, PLANS_CSV_PATH, SLCSP_CSV_PATH, SOLUTION_CSV_PATH, ZIPS_CSV_PATH};
use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;

/// CLI arguments for the SLCSP calculator
///
/// Determines the second lowest cost silver plan rate for each requested ZIP
/// code and writes the answers back to the request table.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "slcsp",
    version,
    about = "Determine the second lowest cost silver plan (SLCSP) rate for US ZIP codes",
    long_about = "Reads ZIP code to rate area mappings and health plan rates, then answers each \
                  requested ZIP code with the second lowest distinct silver plan rate in its rate \
                  area. ZIP codes that span several rate areas, are unknown, or whose area offers \
                  fewer than two distinct rates are left blank.\n\n\
                  Without a ZIP code argument every row of the request table is answered and the \
                  table is rewritten. With a ZIP code argument only that ZIP code is answered and \
                  nothing is written."
)]
pub struct Args {
    /// Answer a single ZIP code instead of the request table
    ///
    /// The answer is printed only; the output table is not written.
    #[arg(value_name = "ZIPCODE")]
    pub zip_code: Option<String>,

    /// ZIP code to rate area table
    #[arg(
        long = "zips",
        value_name = "FILE",
        default_value = ZIPS_CSV_PATH,
        help = "ZIP code to rate area table (zipcode,state,county_code,name,rate_area)"
    )]
    pub zips_path: PathBuf,

    /// Health plan table
    #[arg(
        long = "plans",
        value_name = "FILE",
        default_value = PLANS_CSV_PATH,
        help = "Health plan table (plan_id,state,metal_level,rate,rate_area)"
    )]
    pub plans_path: PathBuf,

    /// Request table
    #[arg(
        long = "requests",
        value_name = "FILE",
        default_value = SLCSP_CSV_PATH,
        help = "Requested ZIP codes (zipcode,rate)"
    )]
    pub requests_path: PathBuf,

    /// Output table
    ///
    /// Defaults to the request table, which is rewritten with the answers.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Where to write the answers (defaults to the request table)"
    )]
    pub output_path: Option<PathBuf>,

    /// Metal level whose second lowest rate is reported
    #[arg(
        long = "metal-level",
        value_name = "LEVEL",
        default_value = METAL_LEVEL,
        help = "Metal level to select, matched case-sensitively"
    )]
    pub metal_level: String,

    /// Compare the written answers against the golden answer table
    #[arg(long = "self-test", help = "Compare the written answers against the solution table")]
    pub self_test: bool,

    /// Golden answer table used by --self-test
    #[arg(
        long = "solution",
        value_name = "FILE",
        default_value = SOLUTION_CSV_PATH,
        help = "Golden answer table used by --self-test"
    )]
    pub solution_path: PathBuf,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress all logging except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Build the run configuration from the parsed arguments
    pub fn to_config(&self) -> SlcspConfig {
        let mut config = SlcspConfig::default()
            .with_zips_path(&self.zips_path)
            .with_plans_path(&self.plans_path)
            .with_requests_path(&self.requests_path)
            .with_output_path(self.output_path.as_ref().unwrap_or(&self.requests_path))
            .with_solution_path(&self.solution_path)
            .with_metal_level(self.metal_level.clone());

        if self.self_test {
            config = config.with_self_test();
        }
        if let Some(zip_code) = &self.zip_code {
            config = config.with_single_zip(zip_code.clone());
        }

        config
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => crate::constants::DEFAULT_LOG_LEVEL,
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

/// Whether clap stopped on a usage error rather than on `--help` or `--version`
pub fn is_usage_error(error: &clap::Error) -> bool {
    !matches!(
        error.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}
