//! Transient dashboard view state
//!
//! [`DashboardViewState`] owns the authoritative in-memory environment list
//! and the modal selection. It is single-threaded by construction: the one
//! asynchronous operation is [`DashboardViewState::load`], which awaits the
//! fetch seam and applies the result in place. Failures never propagate out
//! of the public operations; they are logged and the previous list stays
//! authoritative.

use crate::aggregate::{EnvironmentAggregator, StatusTally};
use crate::environment::{Environment, UserId};
use crate::error::SourceError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Seam between the view state and whatever fetches environments
///
/// Implemented by the HTTP client crate; tests substitute an in-memory fake.
#[async_trait]
pub trait EnvironmentSource {
    /// Fetch the full environment list for a user
    ///
    /// A single attempt; the caller does not retry.
    async fn fetch_environments(
        &self,
        user_id: &UserId,
    ) -> std::result::Result<Vec<Environment>, SourceError>;
}

/// Which recommendation list is currently shown in the overlay
///
/// Two states: `Closed` (initial, empty payload) and `Open`. Opening while
/// already open replaces the payload; it is not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModalSelection {
    pub environment_name: String,
    pub recommendations: Vec<String>,
    pub is_open: bool,
}

impl ModalSelection {
    /// The closed selection with an empty payload
    pub fn closed() -> Self {
        Self::default()
    }
}

/// Presentation mode derived from list length, not stored separately
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PresentationMode {
    /// No environments loaded; render the empty-state prompt, no charts
    Empty,
    /// At least one environment; render charts and cards
    Charts,
}

/// Result of a [`DashboardViewState::load`] call
///
/// `load` never returns `Err`; the outcome makes the silently-skipped
/// unauthenticated case visible to the caller instead of hiding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The list was replaced; carries the new environment count
    Loaded(usize),
    /// No user id was available, so no fetch was attempted
    Unauthenticated,
    /// The fetch or decode failed; the previous list is untouched
    Failed,
}

/// In-memory state backing the dashboard
#[derive(Debug, Default)]
pub struct DashboardViewState {
    environments: Vec<Environment>,
    version: u64,
    modal: ModalSelection,
    aggregator: EnvironmentAggregator,
    last_loaded_at: Option<DateTime<Utc>>,
}

impl DashboardViewState {
    /// Create an empty view state (no environments, modal closed)
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the environment list through `source`
    ///
    /// The user id is passed in explicitly; nothing here reads ambient
    /// credential state. On success the stored list is replaced wholesale
    /// and the version bumped. On any failure the previous list (possibly
    /// empty) remains authoritative and the failure is only logged.
    pub async fn load<S: EnvironmentSource>(
        &mut self,
        source: &S,
        user_id: Option<&UserId>,
    ) -> LoadOutcome {
        let Some(user_id) = user_id else {
            debug!("no user id available, skipping environment fetch");
            return LoadOutcome::Unauthenticated;
        };

        match source.fetch_environments(user_id).await {
            Ok(environments) => {
                let count = environments.len();
                self.apply_environments(environments);
                debug!(count, version = self.version, "environment list replaced");
                LoadOutcome::Loaded(count)
            }
            Err(err) => {
                warn!(
                    category = err.category(),
                    error = %err,
                    "environment fetch failed, keeping previous list"
                );
                LoadOutcome::Failed
            }
        }
    }

    /// Replace the stored list atomically and bump the version
    pub fn apply_environments(&mut self, environments: Vec<Environment>) {
        self.environments = environments;
        self.version = self.version.wrapping_add(1);
        self.last_loaded_at = Some(Utc::now());
    }

    /// Open the recommendation overlay for an environment
    ///
    /// Re-entrant: opening while open replaces the payload.
    pub fn open_detail<S: Into<String>>(&mut self, recommendations: Vec<String>, environment_name: S) {
        self.modal = ModalSelection {
            environment_name: environment_name.into(),
            recommendations,
            is_open: true,
        };
    }

    /// Dismiss the overlay, clearing its payload
    pub fn close_detail(&mut self) {
        self.modal = ModalSelection::closed();
    }

    /// Current environment list (read-only snapshot)
    pub fn environments(&self) -> &[Environment] {
        &self.environments
    }

    /// Version counter, bumped on every successful load
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Current modal selection
    pub fn modal(&self) -> &ModalSelection {
        &self.modal
    }

    /// Timestamp of the last successful load, if any
    pub fn last_loaded_at(&self) -> Option<DateTime<Utc>> {
        self.last_loaded_at
    }

    /// Presentation mode, a pure function of list length
    pub fn presentation_mode(&self) -> PresentationMode {
        if self.environments.is_empty() {
            PresentationMode::Empty
        } else {
            PresentationMode::Charts
        }
    }

    /// Status tally for the current list, memoized on the list version
    pub fn tally(&mut self) -> StatusTally {
        self.aggregator.tally(self.version, &self.environments)
    }
}
