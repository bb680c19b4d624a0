//! Read-only holder for the loaded dataset

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::{AlumniRecord, BatchDistributionEntry, StateDistributionEntry, SummaryStats};

/// Records plus the aggregates shipped with them.
///
/// Built once by the loader and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataStore {
    pub records: Vec<AlumniRecord>,
    pub batch_distribution: Vec<BatchDistributionEntry>,
    pub state_distribution: Vec<StateDistributionEntry>,
    pub summary: SummaryStats,
}

impl DataStore {
    pub fn new(
        records: Vec<AlumniRecord>,
        batch_distribution: Vec<BatchDistributionEntry>,
        state_distribution: Vec<StateDistributionEntry>,
        summary: SummaryStats,
    ) -> Self {
        Self {
            records,
            batch_distribution,
            state_distribution,
            summary,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total alumni for the headline counter; falls back to the record count
    /// when the payload leaves it out.
    pub fn headline_total(&self) -> u64 {
        self.summary.total_alumni.unwrap_or(self.records.len() as u64)
    }

    /// Distinct batch labels, sorted, for the batch selector
    pub fn batch_options(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.batch.as_str()))
    }

    /// Distinct state names, sorted, for the state selector
    pub fn state_options(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.state.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
