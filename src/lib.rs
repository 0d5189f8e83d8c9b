//! SLCSP Library
//!
//! A Rust library for determining the second lowest cost silver plan (SLCSP)
//! rate for a list of US ZIP codes.
//!
//! This library provides tools for:
//! - Reading the ZIP, plan and request tables from CSV
//! - Resolving ZIP codes to a single rate area, flagging ambiguous ones
//! - Reducing the plan table to distinct rates for one metal level
//! - Selecting the second lowest distinct rate per rate area
//! - Writing the answers in request order and checking them against a golden table

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod batch_driver;
        pub mod plan_filter;
        pub mod rate_selector;
        pub mod result_writer;
        pub mod self_test;
        pub mod table_reader;
        pub mod zip_resolver;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Outcome, PlanKey, PlanRecord, RateArea, SlcspResult, ZipRecord};
pub use config::{RunMode, SlcspConfig};

/// Result type alias for SLCSP operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for SLCSP operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An input table could not be opened or read
    #[error("Cannot read input file '{path}': {source}")]
    InputUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// A requested ZIP code is not five decimal digits
    #[error(
        "ZIP code must be a sequence of {len} digits. You are trying to use ZIP code: '{zip_code}'",
        len = crate::constants::ZIP_CODE_LENGTH
    )]
    MalformedZipCode { zip_code: String },

    /// The output table could not be written
    #[error("Cannot write output file '{path}' (check/close the file): {source}")]
    OutputWriteFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an input error for the given path
    pub fn input_unreadable(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::InputUnreadable {
            path: path.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a malformed ZIP code error
    pub fn malformed_zip_code(zip_code: impl Into<String>) -> Self {
        Self::MalformedZipCode {
            zip_code: zip_code.into(),
        }
    }

    /// Create an output write error for the given path
    pub fn output_write_failure(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::OutputWriteFailure {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Process exit status reported for this error
    pub fn exit_code(&self) -> i32 {
        use crate::constants::exit_codes;

        match self {
            Self::InputUnreadable { .. } | Self::CsvParsing { .. } | Self::Configuration { .. } => {
                exit_codes::INPUT_UNREADABLE
            }
            Self::MalformedZipCode { .. } => exit_codes::MALFORMED_ZIP_CODE,
            Self::OutputWriteFailure { .. } => exit_codes::OUTPUT_WRITE_FAILURE,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV processing failed".to_string(),
            source: Some(error),
        }
    }
}

/// Usage errors from argument parsing are invalid run configuration, so they
/// never share an exit status with a malformed ZIP code
impl From<clap::Error> for Error {
    fn from(error: clap::Error) -> Self {
        let rendered = error.to_string();
        let first_line = rendered.lines().next().unwrap_or_default();
        Self::configuration(first_line.trim_start_matches("error: ").trim())
    }
}
