//! Data models for SLCSP processing
//!
//! This module contains the core data structures for representing rows of the
//! ZIP and plan tables, the keys they are deduplicated on, and the per-request
//! answers produced by the batch driver.

use crate::constants::RATE_DECIMAL_PLACES;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Rate Area
// =============================================================================

/// A rating area qualified by its state
///
/// Rate area numbers are only unique within a state, so the pair is the unit
/// both ZIP codes and plans are matched on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct RateArea {
    /// Two-letter state code (e.g., "MO")
    pub state: String,

    /// Rating area number within the state, kept as text (e.g., "3")
    pub rating_area: String,
}

impl RateArea {
    pub fn new(state: impl Into<String>, rating_area: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            rating_area: rating_area.into(),
        }
    }
}

impl std::fmt::Display for RateArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.state, self.rating_area)
    }
}

// =============================================================================
// Source Rows
// =============================================================================

/// One row of the ZIP table
///
/// The same ZIP code may appear on several rows when it spans counties, and
/// those rows may disagree on the rate area.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ZipRecord {
    pub zip_code: String,
    pub state: String,
    pub county_code: String,
    pub name: String,
    pub rating_area: String,
}

impl ZipRecord {
    pub fn new(
        zip_code: impl Into<String>,
        state: impl Into<String>,
        county_code: impl Into<String>,
        name: impl Into<String>,
        rating_area: impl Into<String>,
    ) -> Self {
        Self {
            zip_code: zip_code.into(),
            state: state.into(),
            county_code: county_code.into(),
            name: name.into(),
            rating_area: rating_area.into(),
        }
    }

    /// The (state, rate area) pair this row assigns to its ZIP code
    pub fn rate_area(&self) -> RateArea {
        RateArea::new(self.state.clone(), self.rating_area.clone())
    }
}

/// One row of the plan table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlanRecord {
    pub plan_id: String,
    pub state: String,
    /// Metal level as written in the source (e.g., "Silver", "Gold")
    pub metal_level: String,
    pub rate: Decimal,
    pub rating_area: String,
}

impl PlanRecord {
    pub fn new(
        plan_id: impl Into<String>,
        state: impl Into<String>,
        metal_level: impl Into<String>,
        rate: Decimal,
        rating_area: impl Into<String>,
    ) -> Self {
        Self {
            plan_id: plan_id.into(),
            state: state.into(),
            metal_level: metal_level.into(),
            rate,
            rating_area: rating_area.into(),
        }
    }

    /// The deduplication key for this plan, ignoring its identity
    pub fn key(&self) -> PlanKey {
        PlanKey {
            state: self.state.clone(),
            rating_area: self.rating_area.clone(),
            rate: self.rate,
        }
    }
}

/// A distinct price point: (state, rate, rate area)
///
/// Plans are compared only by this triple, so several plans sharing a price in
/// one area count once. Fields are ordered so that keys sort by area first and
/// by ascending rate within an area. `Decimal` compares numerically, so
/// `245.2` and `245.20` are the same key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct PlanKey {
    pub state: String,
    pub rating_area: String,
    pub rate: Decimal,
}

// =============================================================================
// Answers
// =============================================================================

/// How a single request was answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The second lowest distinct rate in the ZIP code's rate area
    Determined(Decimal),
    /// The ZIP code does not appear in the ZIP table
    UnknownZip,
    /// The ZIP code maps to more than one rate area
    AmbiguousRateArea,
    /// The rate area offers fewer than two distinct rates
    InsufficientRates { available: usize },
}

impl Outcome {
    pub fn rate(&self) -> Option<Decimal> {
        match self {
            Outcome::Determined(rate) => Some(*rate),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Determined(rate) => write!(f, "{}", format_rate(*rate)),
            Outcome::UnknownZip => write!(f, "unknown ZIP code"),
            Outcome::AmbiguousRateArea => write!(f, "ambiguous rate area"),
            Outcome::InsufficientRates { available } => {
                write!(f, "only {} distinct rate(s) available", available)
            }
        }
    }
}

/// Answer for one requested ZIP code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlcspResult {
    pub zip_code: String,
    pub outcome: Outcome,
}

impl SlcspResult {
    pub fn new(zip_code: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            zip_code: zip_code.into(),
            outcome,
        }
    }

    /// The rate column as written to the output: two decimals, or empty when
    /// no single answer exists
    pub fn rate_text(&self) -> String {
        self.outcome.rate().map(format_rate).unwrap_or_default()
    }
}

/// Format a rate with exactly two decimal places
pub fn format_rate(rate: Decimal) -> String {
    format!(
        "{:.prec$}",
        rate.round_dp(RATE_DECIMAL_PLACES),
        prec = RATE_DECIMAL_PLACES as usize
    )
}
