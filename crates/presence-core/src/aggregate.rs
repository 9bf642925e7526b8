//! Per-state aggregation of presence records.
//!
//! One sequential pass over the record stream builds a `StateSummary` for
//! every distinct state. The first record seen for a state seeds its
//! presence and contact; later records only take over when their presence
//! is strictly higher in the priority order, so on a tie the earlier
//! contact sticks. Records that also name a city are additionally listed,
//! in encounter order, regardless of how they compare to the state's
//! current level.

use std::collections::HashMap;

use serde::Serialize;

use crate::presence::Presence;
use crate::record::CityRecord;

/// One city listed under a state, in record order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityEntry {
    pub city: String,
    pub presence: Presence,
    pub contact: String,
}

/// Aggregated presence for one state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateSummary {
    /// Highest presence level observed among the state's records.
    pub presence: Presence,
    /// Contact from the record that established `presence`.
    pub contact: String,
    /// Every record with both a state and a city, in input order.
    pub cities: Vec<CityEntry>,
}

impl StateSummary {
    fn seed(record: &CityRecord) -> Self {
        StateSummary {
            presence: Presence::parse(&record.presence),
            contact: record.contact.clone(),
            cities: Vec::new(),
        }
    }
}

/// Build the per-state summaries from the record stream.
///
/// Pure and infallible: records without a state are skipped, missing
/// fields degrade to `Presence::None` / empty contact.
pub fn aggregate(records: &[CityRecord]) -> HashMap<String, StateSummary> {
    let mut states: HashMap<String, StateSummary> = HashMap::new();

    for record in records {
        if record.state.is_empty() {
            continue;
        }

        let summary = states
            .entry(record.state.clone())
            .or_insert_with(|| StateSummary::seed(record));

        if !record.city.is_empty() {
            summary.cities.push(CityEntry {
                city: record.city.clone(),
                presence: Presence::parse(&record.presence),
                contact: record.contact.clone(),
            });
        }

        // Strictly higher presence takes over the state; ties keep the
        // earlier contact.
        let level = Presence::parse(&record.presence);
        if level > summary.presence {
            summary.presence = level;
            summary.contact = record.contact.clone();
        }
    }

    states
}
