//! Statistics for a batch of answered requests

use crate::app::models::{Outcome, SlcspResult};

/// Breakdown of how a batch of requests was answered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Total number of requests
    pub requests: usize,
    /// Requests answered with a rate
    pub determined: usize,
    /// Requests whose ZIP code is not in the ZIP table
    pub unknown: usize,
    /// Requests whose ZIP code spans several rate areas
    pub ambiguous: usize,
    /// Requests whose rate area has fewer than two distinct rates
    pub insufficient_rates: usize,
}

impl BatchStats {
    pub fn from_results(results: &[SlcspResult]) -> Self {
        let mut stats = Self {
            requests: results.len(),
            ..Self::default()
        };

        for result in results {
            match result.outcome {
                Outcome::Determined(_) => stats.determined += 1,
                Outcome::UnknownZip => stats.unknown += 1,
                Outcome::AmbiguousRateArea => stats.ambiguous += 1,
                Outcome::InsufficientRates { .. } => stats.insufficient_rates += 1,
            }
        }

        stats
    }

    /// Requests left with an empty rate
    pub fn empty(&self) -> usize {
        self.requests - self.determined
    }

    /// Percentage of requests answered with a rate
    pub fn answer_rate(&self) -> f64 {
        if self.requests == 0 {
            0.0
        } else {
            (self.determined as f64 / self.requests as f64) * 100.0
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{} requests, {} answered ({:.1}%), {} unknown, {} ambiguous, {} with fewer than two rates",
            self.requests,
            self.determined,
            self.answer_rate(),
            self.unknown,
            self.ambiguous,
            self.insufficient_rates
        )
    }
}
