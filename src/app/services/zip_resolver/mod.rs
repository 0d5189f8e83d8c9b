//! ZIP code to rate area resolution
//!
//! A ZIP code can span several counties, and those counties may sit in
//! different rate areas. The resolver records every distinct (state, rate
//! area) pair seen for each ZIP code in a single pass. A ZIP code resolves only
//! when exactly one pair was seen; otherwise it is ambiguous. Identical
//! repeated rows collapse before counting and never cause ambiguity.

use crate::app::models::{RateArea, ZipRecord};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};


/// Lookup from ZIP code to its rate area(s)
#[derive(Debug, Clone, Default)]
pub struct ZipResolver {
    /// Every distinct rate area observed for each known ZIP code
    pub(crate) areas: BTreeMap<String, BTreeSet<RateArea>>,
}

impl ZipResolver {
    /// Build the resolver from raw ZIP table rows
    pub fn from_records(records: &[ZipRecord]) -> Self {
        let mut areas: BTreeMap<String, BTreeSet<RateArea>> = BTreeMap::new();

        for record in records {
            areas
                .entry(record.zip_code.clone())
                .or_default()
                .insert(record.rate_area());
        }

        let resolver = Self { areas };

        info!(
            "Resolved ZIP table: {} known, {} unique, {} ambiguous",
            resolver.known_count(),
            resolver.unique_count(),
            resolver.ambiguous_count()
        );

        resolver
    }

    /// Whether the ZIP code appears anywhere in the ZIP table
    pub fn is_known(&self, zip_code: &str) -> bool {
        self.areas.contains_key(zip_code)
    }

    /// Whether the ZIP code appears with more than one rate area
    pub fn is_ambiguous(&self, zip_code: &str) -> bool {
        self.areas
            .get(zip_code)
            .is_some_and(|areas| areas.len() > 1)
    }

    /// The single rate area of a ZIP code
    ///
    /// Returns `None` for unknown and for ambiguous ZIP codes.
    pub fn rate_area(&self, zip_code: &str) -> Option<&RateArea> {
        let areas = self.areas.get(zip_code)?;
        if areas.len() != 1 {
            debug!(
                "ZIP {} spans {} rate areas: {:?}",
                zip_code,
                areas.len(),
                areas
            );
            return None;
        }
        areas.first()
    }

    /// All rate areas observed for a ZIP code
    pub fn candidate_areas(&self, zip_code: &str) -> Option<&BTreeSet<RateArea>> {
        self.areas.get(zip_code)
    }

    /// Number of distinct ZIP codes in the table
    pub fn known_count(&self) -> usize {
        self.areas.len()
    }

    /// Number of ZIP codes with exactly one rate area
    pub fn unique_count(&self) -> usize {
        self.areas.values().filter(|areas| areas.len() == 1).count()
    }

    /// Number of ZIP codes with conflicting rate areas
    pub fn ambiguous_count(&self) -> usize {
        self.known_count() - self.unique_count()
    }

    /// The resolvable ZIP codes and their rate areas
    pub fn unique_zips(&self) -> impl Iterator<Item = (&str, &RateArea)> {
        self.areas.iter().filter_map(|(zip, areas)| {
            if areas.len() == 1 {
                areas.first().map(|area| (zip.as_str(), area))
            } else {
                None
            }
        })
    }

    /// The ZIP codes that cannot be resolved to a single rate area
    pub fn ambiguous_zips(&self) -> impl Iterator<Item = &str> {
        self.areas
            .iter()
            .filter(|(_, areas)| areas.len() > 1)
            .map(|(zip, _)| zip.as_str())
    }
}
