//! Second lowest cost rate selection
//!
//! For a ZIP code with a single rate area, the answer is the second entry of
//! the area's distinct rates sorted ascending. Duplicates were collapsed by the
//! plan filter, so a tie at the lowest price never hides a genuine second
//! price point and never counts as one either.

use crate::app::models::Outcome;
use crate::app::services::plan_filter::FilteredPlans;
use crate::app::services::zip_resolver::ZipResolver;
use crate::constants::SELECTED_RATE_INDEX;
use rust_decimal::Decimal;
use tracing::debug;


/// Picks the second lowest distinct rate for a ZIP code
#[derive(Debug, Clone, Copy)]
pub struct RateSelector<'a> {
    resolver: &'a ZipResolver,
    plans: &'a FilteredPlans,
}

impl<'a> RateSelector<'a> {
    pub fn new(resolver: &'a ZipResolver, plans: &'a FilteredPlans) -> Self {
        Self { resolver, plans }
    }

    /// Determine the outcome for one ZIP code
    ///
    /// Ambiguous ZIP codes are rejected before any rate lookup. A ZIP code
    /// with no rate area at all is reported as unknown.
    pub fn answer(&self, zip_code: &str) -> Outcome {
        if self.resolver.is_ambiguous(zip_code) {
            debug!("ZIP {}: ambiguous rate area", zip_code);
            return Outcome::AmbiguousRateArea;
        }

        let Some(area) = self.resolver.rate_area(zip_code) else {
            debug!("ZIP {}: not in ZIP table", zip_code);
            return Outcome::UnknownZip;
        };

        let rates = self.plans.rates_for(area);
        let outcome = select_second_lowest(&rates)
            .map(Outcome::Determined)
            .unwrap_or(Outcome::InsufficientRates {
                available: rates.len(),
            });

        debug!(
            "ZIP {} in rate area {}: {} distinct rate(s), {}",
            zip_code,
            area,
            rates.len(),
            outcome
        );

        outcome
    }

    /// The second lowest distinct rate, if one exists
    pub fn select(&self, zip_code: &str) -> Option<Decimal> {
        self.answer(zip_code).rate()
    }
}

/// Second lowest value of a set of distinct rates
///
/// The input need not be sorted but must not contain duplicates.
pub fn select_second_lowest(rates: &[Decimal]) -> Option<Decimal> {
    if rates.len() <= SELECTED_RATE_INDEX {
        return None;
    }

    let mut sorted = rates.to_vec();
    sorted.sort();
    sorted.get(SELECTED_RATE_INDEX).copied()
}
