//! Chart-ready datasets for the dashboard
//!
//! Shapes mirror what the chart renderer consumes: the pie shows the status
//! distribution, the radar plots one axis per environment with the safety
//! scalar (1 = safe, 0 = everything else).

use serde::Serialize;
use water_watch_core::aggregate::StatusTally;
use water_watch_core::environment::Environment;

/// Badge and chart color for safe environments
pub const SAFE_COLOR: &str = "#10b981";
/// Badge and chart color for unsafe environments
pub const UNSAFE_COLOR: &str = "#ef4444";
/// Chart color for environments with no usable status
pub const UNKNOWN_COLOR: &str = "#9ca3af";

/// Safety-distribution pie dataset
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PieChartData {
    pub labels: Vec<&'static str>,
    pub values: Vec<usize>,
    pub background_colors: Vec<&'static str>,
}

impl PieChartData {
    /// Build the pie dataset from a status tally
    pub fn from_tally(tally: StatusTally) -> Self {
        Self {
            labels: vec!["Safe", "Unsafe", "Unknown"],
            values: vec![tally.safe, tally.unsafe_count, tally.unknown],
            background_colors: vec![SAFE_COLOR, UNSAFE_COLOR, UNKNOWN_COLOR],
        }
    }
}

/// Per-environment safety radar dataset
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RadarChartData {
    /// One axis label per environment, in list order
    pub labels: Vec<String>,
    /// Safety scalar per axis
    pub values: Vec<u8>,
    /// Point color per axis, green only for an exact `"safe"` status
    pub point_colors: Vec<&'static str>,
}

impl RadarChartData {
    /// Build the radar dataset from the environment list
    pub fn from_environments(environments: &[Environment]) -> Self {
        Self {
            labels: environments.iter().map(|e| e.name.clone()).collect(),
            values: environments.iter().map(Environment::safety_scalar).collect(),
            point_colors: environments
                .iter()
                .map(|e| {
                    if e.safety_scalar() == 1 {
                        SAFE_COLOR
                    } else {
                        UNSAFE_COLOR
                    }
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use water_watch_core::environment::Environment;

    fn env(name: &str, status: Option<&str>) -> Environment {
        Environment {
            id: String::new(),
            name: name.to_string(),
            location: String::new(),
            status: status.map(String::from),
            recommendations: vec![],
        }
    }

    #[test]
    fn test_pie_mirrors_tally_order() {
        let list = vec![env("a", Some("safe")), env("b", Some("unsafe")), env("c", None)];
        let tally = StatusTally::from_environments(&list);
        let pie = PieChartData::from_tally(tally);

        assert_eq!(pie.labels, vec!["Safe", "Unsafe", "Unknown"]);
        assert_eq!(pie.values, vec![1, 1, 1]);
        assert_eq!(
            pie.background_colors,
            vec![SAFE_COLOR, UNSAFE_COLOR, UNKNOWN_COLOR]
        );
    }

    #[test]
    fn test_radar_axes_follow_list_order() {
        let list = vec![
            env("Lake A", Some("safe")),
            env("Lake B", Some("Safe")),
            env("Lake C", Some("unsafe")),
        ];
        let radar = RadarChartData::from_environments(&list);

        assert_eq!(radar.labels, vec!["Lake A", "Lake B", "Lake C"]);
        // Scalar is exact-match on "safe": the capitalized variant plots 0.
        assert_eq!(radar.values, vec![1, 0, 0]);
        assert_eq!(radar.point_colors, vec![SAFE_COLOR, UNSAFE_COLOR, UNSAFE_COLOR]);
    }

    #[test]
    fn test_empty_list_yields_empty_radar() {
        let radar = RadarChartData::from_environments(&[]);
        assert!(radar.labels.is_empty());
        assert!(radar.values.is_empty());
    }
}
