//! Chart-ready aggregation over environment lists
//!
//! The tally is always recomputed from scratch from the full list; nothing
//! here is incremental or persisted. [`EnvironmentAggregator`] adds a thin
//! memoization layer keyed on the list version maintained by
//! [`crate::view::DashboardViewState`], so callers can re-request the tally
//! on every render without paying for a recount when the list is unchanged.

use crate::environment::{Environment, SafetyStatus};
use serde::{Deserialize, Serialize};

/// Counts of environments by normalized safety status
///
/// Invariant: the sum of the three buckets equals the length of the list the
/// tally was derived from; unrecognized or absent statuses are counted, not
/// dropped.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusTally {
    pub safe: usize,
    #[serde(rename = "unsafe")]
    pub unsafe_count: usize,
    pub unknown: usize,
}

impl StatusTally {
    /// Tally a list of environments by normalized status
    ///
    /// Pure and total: empty input yields the zero tally, and no status
    /// value can make this fail.
    pub fn from_environments(environments: &[Environment]) -> Self {
        environments
            .iter()
            .fold(Self::default(), |mut tally, env| {
                match env.safety_status() {
                    SafetyStatus::Safe => tally.safe += 1,
                    SafetyStatus::Unsafe => tally.unsafe_count += 1,
                    SafetyStatus::Unknown => tally.unknown += 1,
                }
                tally
            })
    }

    /// Total number of environments tallied
    pub fn total(&self) -> usize {
        self.safe + self.unsafe_count + self.unknown
    }

    /// True when nothing was tallied
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Count for a specific bucket
    pub fn count(&self, status: SafetyStatus) -> usize {
        match status {
            SafetyStatus::Safe => self.safe,
            SafetyStatus::Unsafe => self.unsafe_count,
            SafetyStatus::Unknown => self.unknown,
        }
    }
}

/// Version-memoized tally computation
///
/// Caches the last tally together with the list version it was computed
/// from; a repeated request for the same version returns the cached value
/// without touching the list.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentAggregator {
    cached: Option<(u64, StatusTally)>,
}

impl EnvironmentAggregator {
    /// Create a new aggregator with an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally `environments`, reusing the cache when `version` matches
    pub fn tally(&mut self, version: u64, environments: &[Environment]) -> StatusTally {
        if let Some((cached_version, cached_tally)) = self.cached {
            if cached_version == version {
                return cached_tally;
            }
        }
        let tally = StatusTally::from_environments(environments);
        self.cached = Some((version, tally));
        tally
    }

    /// Drop the cached tally; the next request recomputes
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}
