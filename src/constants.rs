//! Application constants for the SLCSP calculator
//!
//! This module contains the default file locations, table layouts and exit
//! statuses used throughout the application.

// =============================================================================
// File Locations
// =============================================================================

/// ZIP code to rate area table
pub const ZIPS_CSV_PATH: &str = "slcsp/zips.csv";

/// Health plan table
pub const PLANS_CSV_PATH: &str = "slcsp/plans.csv";

/// Requested ZIP codes; also the destination of the answers
pub const SLCSP_CSV_PATH: &str = "slcsp/slcsp.csv";

/// Golden answers used by the self-test
pub const SOLUTION_CSV_PATH: &str = "testing/solution.csv";

// =============================================================================
// Plan Selection
// =============================================================================

/// Metal level whose second lowest rate is reported
pub const METAL_LEVEL: &str = "Silver";

/// Position of the reported rate among the sorted distinct rates (zero-based)
pub const SELECTED_RATE_INDEX: usize = 1;

/// Decimal places used when formatting a rate
pub const RATE_DECIMAL_PLACES: u32 = 2;

/// Number of digits in a valid ZIP code
pub const ZIP_CODE_LENGTH: usize = 5;

// =============================================================================
// Table Layouts
// =============================================================================

/// Output table headings
pub const HEADINGS: [&str; 2] = ["zipcode", "rate"];

/// Column positions in the ZIP table (zipcode,state,county_code,name,rate_area)
pub mod zip_columns {
    pub const ZIP_CODE: usize = 0;
    pub const STATE: usize = 1;
    pub const COUNTY_CODE: usize = 2;
    pub const NAME: usize = 3;
    pub const RATE_AREA: usize = 4;
}

/// Column positions in the plan table (plan_id,state,metal_level,rate,rate_area)
pub mod plan_columns {
    pub const PLAN_ID: usize = 0;
    pub const STATE: usize = 1;
    pub const METAL_LEVEL: usize = 2;
    pub const RATE: usize = 3;
    pub const RATE_AREA: usize = 4;
}

/// Column positions in the request table (zipcode,rate)
pub mod request_columns {
    pub const ZIP_CODE: usize = 0;
}

// =============================================================================
// Exit Statuses
// =============================================================================

pub mod exit_codes {
    pub const SUCCESS: i32 = 0;

    /// An input table is missing, unreadable or malformed
    pub const INPUT_UNREADABLE: i32 = 1;

    /// A requested ZIP code is not five decimal digits
    pub const MALFORMED_ZIP_CODE: i32 = 2;

    /// The output table could not be written
    pub const OUTPUT_WRITE_FAILURE: i32 = 3;
}

// =============================================================================
// Logging
// =============================================================================

/// Default log level when no verbosity flag is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";
