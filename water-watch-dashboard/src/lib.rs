//! Dashboard assembly for the Water Watch client
//!
//! Turns the core view state into a serializable [`DashboardView`] that a
//! renderer (terminal, JSON consumer) can draw without touching domain
//! logic. The empty state is decided purely by list length, never stored.

pub mod cards;
pub mod charts;

pub use cards::EnvironmentCard;
pub use charts::{PieChartData, RadarChartData};

use serde::Serialize;
use water_watch_core::aggregate::StatusTally;
use water_watch_core::view::{DashboardViewState, PresentationMode};

/// Renderable dashboard snapshot
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DashboardView {
    /// No environments: render the "add your first environment" prompt,
    /// no charts
    Empty,
    /// Charts, cards, and the tally they were derived from
    Charts {
        pie: PieChartData,
        radar: RadarChartData,
        cards: Vec<EnvironmentCard>,
        tally: StatusTally,
    },
}

impl DashboardView {
    /// Build the view from the current state
    ///
    /// Takes the state mutably because the tally is memoized on the list
    /// version inside the state.
    pub fn from_state(state: &mut DashboardViewState) -> Self {
        match state.presentation_mode() {
            PresentationMode::Empty => DashboardView::Empty,
            PresentationMode::Charts => {
                let tally = state.tally();
                let environments = state.environments();
                DashboardView::Charts {
                    pie: PieChartData::from_tally(tally),
                    radar: RadarChartData::from_environments(environments),
                    cards: environments
                        .iter()
                        .map(EnvironmentCard::from_environment)
                        .collect(),
                    tally,
                }
            }
        }
    }

    /// True for the empty presentation mode
    pub fn is_empty(&self) -> bool {
        matches!(self, DashboardView::Empty)
    }
}
