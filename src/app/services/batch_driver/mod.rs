//! Batch answering of requested ZIP codes
//!
//! The driver owns nothing but references to the resolver and the filtered
//! plans, which are built once per run. It validates every request up front,
//! so a single malformed ZIP code aborts the whole batch before any answer is
//! produced, then answers requests in their original order.
//!
//! # Example Usage
//!
//! ```rust
//! use slcsp::app::models::{PlanRecord, ZipRecord};
//! use slcsp::app::services::batch_driver::BatchDriver;
//! use slcsp::app::services::plan_filter::PlanFilter;
//! use slcsp::app::services::zip_resolver::ZipResolver;
//! use rust_decimal::Decimal;
//!
//! # fn example() -> slcsp::Result<()> {
//! let resolver = ZipResolver::from_records(&[ZipRecord::new("64148", "MO", "29095", "Jackson", "3")]);
//! let plans = PlanFilter::new("Silver").filter(&[
//!     PlanRecord::new("a", "MO", "Silver", Decimal::new(24520, 2), "3"),
//!     PlanRecord::new("b", "MO", "Silver", Decimal::new(25000, 2), "3"),
//! ]);
//!
//! let driver = BatchDriver::new(&resolver, &plans);
//! let results = driver.run(&["64148".to_string()])?;
//! assert_eq!(results[0].rate_text(), "250.00");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod stats;

#[cfg(test)]
pub mod tests;

pub use stats::BatchStats;

use crate::app::models::{Outcome, SlcspResult};
use crate::app::services::plan_filter::FilteredPlans;
use crate::app::services::rate_selector::RateSelector;
use crate::app::services::zip_resolver::ZipResolver;
use crate::constants::ZIP_CODE_LENGTH;
use crate::{Error, Result};
use tracing::{debug, error, info};

/// Answers a list of requested ZIP codes
#[derive(Debug, Clone, Copy)]
pub struct BatchDriver<'a> {
    resolver: &'a ZipResolver,
    selector: RateSelector<'a>,
}

impl<'a> BatchDriver<'a> {
    pub fn new(resolver: &'a ZipResolver, plans: &'a FilteredPlans) -> Self {
        Self {
            resolver,
            selector: RateSelector::new(resolver, plans),
        }
    }

    /// Answer every request, preserving request order
    ///
    /// Fails with `MalformedZipCode` on the first request that is not five
    /// decimal digits; no answers are returned in that case.
    pub fn run(&self, requests: &[String]) -> Result<Vec<SlcspResult>> {
        validate_requests(requests)?;

        let results: Vec<SlcspResult> = requests
            .iter()
            .map(|zip_code| SlcspResult::new(zip_code.as_str(), self.answer(zip_code)))
            .collect();

        let stats = BatchStats::from_results(&results);
        info!("Batch complete: {}", stats.summary());

        Ok(results)
    }

    /// Answer one already-validated ZIP code
    ///
    /// ZIP codes absent from the ZIP table are answered without consulting
    /// the selector.
    pub fn answer(&self, zip_code: &str) -> Outcome {
        if !self.resolver.is_known(zip_code) {
            debug!("ZIP {}: not in ZIP table", zip_code);
            return Outcome::UnknownZip;
        }
        self.selector.answer(zip_code)
    }
}

/// Check that every request is a well-formed ZIP code
pub fn validate_requests(requests: &[String]) -> Result<()> {
    for zip_code in requests {
        if let Err(e) = validate_zip_code(zip_code) {
            error!("Rejecting batch: {}", e);
            return Err(e);
        }
    }
    Ok(())
}

/// A ZIP code is exactly five ASCII decimal digits
pub fn validate_zip_code(zip_code: &str) -> Result<()> {
    if zip_code.len() == ZIP_CODE_LENGTH && zip_code.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(Error::malformed_zip_code(zip_code))
    }
}
