//! Per-environment card view models

use serde::Serialize;
use water_watch_core::environment::Environment;

/// Everything a card renderer needs for one environment
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EnvironmentCard {
    pub name: String,
    pub location: String,
    /// Capitalized raw status; an absent status shows as `Unknown`
    pub status_label: String,
    /// Drives badge and icon choice; exact match on the raw `"safe"` value
    pub is_safe: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_recommendation: Option<String>,
    /// True when there is more than one recommendation, enabling the
    /// "view all" overlay affordance
    pub can_view_all: bool,
}

impl EnvironmentCard {
    /// Build a card from an environment record
    pub fn from_environment(environment: &Environment) -> Self {
        let raw_status = environment.status.as_deref().unwrap_or("unknown");
        Self {
            name: environment.name.clone(),
            location: environment.location.clone(),
            status_label: capitalize(raw_status),
            is_safe: raw_status == "safe",
            latest_recommendation: environment.latest_recommendation().map(String::from),
            can_view_all: environment.recommendation_count() > 1,
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
