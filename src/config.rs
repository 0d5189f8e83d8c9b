//! Configuration management and validation.
//!
//! Provides the run configuration: where the three input tables live, where
//! answers are written, which metal level is selected, and whether the run
//! answers a single ad-hoc ZIP code or the whole request table.

use crate::constants;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Which requests a run answers
///
/// This single value decides both where the requests come from and whether
/// the answers are persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RunMode {
    /// Answer every row of the request table and write the output table
    #[default]
    RequestFile,
    /// Answer one ZIP code given on the command line; print only
    SingleZip(String),
}

impl RunMode {
    /// Whether answers are written to the output table
    pub fn persists_output(&self) -> bool {
        matches!(self, RunMode::RequestFile)
    }
}

/// Configuration for one SLCSP run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlcspConfig {
    /// ZIP code to rate area table
    pub zips_path: PathBuf,

    /// Health plan table
    pub plans_path: PathBuf,

    /// Request table (zipcode,rate)
    pub requests_path: PathBuf,

    /// Destination of the answers in request-file mode
    pub output_path: PathBuf,

    /// Golden answers compared against the output in self-test mode
    pub solution_path: PathBuf,

    /// Metal level to select (case-sensitive)
    pub metal_level: String,

    /// Compare the written output against the golden answers
    pub self_test: bool,

    /// Request source and persistence behaviour
    pub mode: RunMode,
}

impl Default for SlcspConfig {
    fn default() -> Self {
        Self {
            zips_path: PathBuf::from(constants::ZIPS_CSV_PATH),
            plans_path: PathBuf::from(constants::PLANS_CSV_PATH),
            requests_path: PathBuf::from(constants::SLCSP_CSV_PATH),
            output_path: PathBuf::from(constants::SLCSP_CSV_PATH),
            solution_path: PathBuf::from(constants::SOLUTION_CSV_PATH),
            metal_level: constants::METAL_LEVEL.to_string(),
            self_test: false,
            mode: RunMode::RequestFile,
        }
    }
}

impl SlcspConfig {
    /// Read all tables from one directory using the standard file names
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.zips_path = dir.join("zips.csv");
        self.plans_path = dir.join("plans.csv");
        self.requests_path = dir.join("slcsp.csv");
        self.output_path = dir.join("slcsp.csv");
        self
    }

    pub fn with_zips_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.zips_path = path.into();
        self
    }

    pub fn with_plans_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.plans_path = path.into();
        self
    }

    pub fn with_requests_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.requests_path = path.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_solution_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.solution_path = path.into();
        self
    }

    pub fn with_metal_level(mut self, metal_level: impl Into<String>) -> Self {
        self.metal_level = metal_level.into();
        self
    }

    /// Enable comparison against the golden answers after writing
    pub fn with_self_test(mut self) -> Self {
        self.self_test = true;
        self
    }

    /// Answer a single ZIP code instead of the request table
    pub fn with_single_zip(mut self, zip_code: impl Into<String>) -> Self {
        self.mode = RunMode::SingleZip(zip_code.into());
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.metal_level.trim().is_empty() {
            return Err(Error::configuration("Metal level must not be empty"));
        }

        if self.self_test && !self.mode.persists_output() {
            return Err(Error::configuration(
                "Self-test compares the written output table and requires request-file mode",
            ));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}
