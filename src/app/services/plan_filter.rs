//! Plan table reduction to distinct price points
//!
//! Only plans of the target metal level take part in rate selection, and they
//! take part only through their (state, rate, rate area) triple. Several plans
//! sharing one price in one area are a single price point.

use crate::app::models::{PlanKey, PlanRecord, RateArea};
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use tracing::info;

/// Selects plans of one metal level
#[derive(Debug, Clone)]
pub struct PlanFilter {
    metal_level: String,
}

impl PlanFilter {
    /// Create a filter for an exact, case-sensitive metal level
    pub fn new(metal_level: impl Into<String>) -> Self {
        Self {
            metal_level: metal_level.into(),
        }
    }

    pub fn metal_level(&self) -> &str {
        &self.metal_level
    }

    /// Whether a plan of this metal level takes part
    pub fn accepts(&self, metal_level: &str) -> bool {
        metal_level == self.metal_level
    }

    /// Reduce plan rows to the distinct price points of the metal level
    pub fn filter(&self, plans: &[PlanRecord]) -> FilteredPlans {
        let keys: BTreeSet<PlanKey> = plans
            .iter()
            .filter(|plan| self.accepts(&plan.metal_level))
            .map(PlanRecord::key)
            .collect();

        info!(
            "Filtered {} plans to {} distinct {} price points",
            plans.len(),
            keys.len(),
            self.metal_level
        );

        FilteredPlans { keys }
    }
}

/// Distinct price points of one metal level
#[derive(Debug, Clone, Default)]
pub struct FilteredPlans {
    keys: BTreeSet<PlanKey>,
}

impl FilteredPlans {
    /// Distinct rates offered in a rate area, in ascending order
    pub fn rates_for(&self, area: &RateArea) -> Vec<Decimal> {
        let lower = PlanKey {
            state: area.state.clone(),
            rating_area: area.rating_area.clone(),
            rate: Decimal::MIN,
        };
        let upper = PlanKey {
            state: area.state.clone(),
            rating_area: area.rating_area.clone(),
            rate: Decimal::MAX,
        };

        self.keys.range(lower..=upper).map(|key| key.rate).collect()
    }

    pub fn contains(&self, key: &PlanKey) -> bool {
        self.keys.contains(key)
    }

    /// Number of distinct price points
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
