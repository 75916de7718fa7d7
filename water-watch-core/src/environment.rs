//! Environment domain model and related types
//!
//! An environment is a monitored water site with a safety status reported by
//! the server and an append-only history of remediation recommendations. The
//! client only ever holds a read-only snapshot; the list is replaced
//! wholesale on each fetch.
//!
//! # Examples
//!
//! Creating an environment:
//!
//! ```rust
//! use water_watch_core::environment::*;
//!
//! let env = Environment::builder()
//!     .id("64f1c0ffee")
//!     .name("Lake Mjøsa")
//!     .location("Innlandet, Norway")
//!     .status("safe")
//!     .recommendation("Reduce agricultural runoff")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(env.safety_status(), SafetyStatus::Safe);
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the authenticated user, extracted from the credential token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A monitored water environment as reported by the Water Watch API
///
/// Wire names follow the server payload: ids arrive as `_id` and the
/// recommendation history arrives under the misspelled key `recommandations`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Environment {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: String,
    /// Raw status string; may be absent or carry a value the client does
    /// not recognize. Normalization happens in [`Environment::safety_status`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "recommandations", default)]
    pub recommendations: Vec<String>,
}

/// Normalized safety bucket for an environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SafetyStatus {
    Safe,
    Unsafe,
    Unknown,
}

impl SafetyStatus {
    /// Normalize a raw status value: lower-cased comparison, anything
    /// unrecognized or absent buckets to `Unknown`
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(|s| s.to_ascii_lowercase()).as_deref() {
            Some("safe") => SafetyStatus::Safe,
            Some("unsafe") => SafetyStatus::Unsafe,
            _ => SafetyStatus::Unknown,
        }
    }

    /// Capitalized label used for status badges
    pub fn label(&self) -> &'static str {
        match self {
            SafetyStatus::Safe => "Safe",
            SafetyStatus::Unsafe => "Unsafe",
            SafetyStatus::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for SafetyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Environment {
    /// Create a new environment instance with validation
    pub fn new(id: String, name: String, location: String) -> Result<Self> {
        Self::validate_name(&name)?;
        Ok(Self {
            id,
            name,
            location,
            status: None,
            recommendations: Vec::new(),
        })
    }

    /// Create a builder for constructing an Environment
    pub fn builder() -> EnvironmentBuilder {
        EnvironmentBuilder::new()
    }

    fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(Error::validation("Environment name cannot be empty"));
        }
        Ok(())
    }

    /// Normalized safety bucket for tallying
    pub fn safety_status(&self) -> SafetyStatus {
        SafetyStatus::from_raw(self.status.as_deref())
    }

    /// Radar-axis scalar: `1` only when the raw status is exactly `"safe"`
    ///
    /// Deliberately case-sensitive, unlike the tally bucketing: the radar
    /// chart plots the raw server value.
    pub fn safety_scalar(&self) -> u8 {
        match self.status.as_deref() {
            Some("safe") => 1,
            _ => 0,
        }
    }

    /// Most recent recommendation, if any (history is stored in arrival order)
    pub fn latest_recommendation(&self) -> Option<&str> {
        self.recommendations.last().map(String::as_str)
    }

    /// Number of recommendations on record
    pub fn recommendation_count(&self) -> usize {
        self.recommendations.len()
    }
}

/// Builder for constructing Environment instances with validation
#[derive(Debug, Clone, Default)]
pub struct EnvironmentBuilder {
    id: Option<String>,
    name: Option<String>,
    location: Option<String>,
    status: Option<String>,
    recommendations: Vec<String>,
}

impl EnvironmentBuilder {
    /// Create a new environment builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server-issued identifier
    pub fn id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the environment name
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the human-readable location
    pub fn location<S: Into<String>>(mut self, location: S) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the raw status string
    pub fn status<S: Into<String>>(mut self, status: S) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Append a recommendation to the history
    pub fn recommendation<S: Into<String>>(mut self, recommendation: S) -> Self {
        self.recommendations.push(recommendation.into());
        self
    }

    /// Build the environment, validating required fields
    pub fn build(self) -> Result<Environment> {
        let name = self
            .name
            .ok_or_else(|| Error::validation("Environment name is required"))?;
        let mut env = Environment::new(
            self.id.unwrap_or_default(),
            name,
            self.location.unwrap_or_default(),
        )?;
        env.status = self.status;
        env.recommendations = self.recommendations;
        Ok(env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(status: Option<&str>) -> Environment {
        Environment {
            id: "abc123".to_string(),
            name: "Lake A".to_string(),
            location: "Somewhere".to_string(),
            status: status.map(String::from),
            recommendations: vec![],
        }
    }

    #[test]
    fn test_status_normalization_is_case_insensitive() {
        assert_eq!(sample(Some("safe")).safety_status(), SafetyStatus::Safe);
        assert_eq!(sample(Some("SAFE")).safety_status(), SafetyStatus::Safe);
        assert_eq!(sample(Some("Unsafe")).safety_status(), SafetyStatus::Unsafe);
        assert_eq!(sample(None).safety_status(), SafetyStatus::Unknown);
        assert_eq!(
            sample(Some("contaminated")).safety_status(),
            SafetyStatus::Unknown
        );
    }

    #[test]
    fn test_safety_scalar_is_exact_match() {
        assert_eq!(sample(Some("safe")).safety_scalar(), 1);
        assert_eq!(sample(Some("Safe")).safety_scalar(), 0);
        assert_eq!(sample(Some("unsafe")).safety_scalar(), 0);
        assert_eq!(sample(None).safety_scalar(), 0);
    }

    #[test]
    fn test_latest_recommendation() {
        let mut env = sample(Some("safe"));
        assert_eq!(env.latest_recommendation(), None);

        env.recommendations = vec!["a".into(), "b".into(), "c".into()];
        assert_eq!(env.latest_recommendation(), Some("c"));
    }

    #[test]
    fn test_builder_requires_name() {
        let err = Environment::builder().id("x").build().unwrap_err();
        assert_eq!(err.category(), "validation");

        let err = Environment::builder().name("   ").build().unwrap_err();
        assert_eq!(err.category(), "validation");
    }

    #[test]
    fn test_wire_names_round_trip() {
        let json = r#"{
            "_id": "64f1",
            "name": "Harbor Basin",
            "location": "Pier 4",
            "status": "unsafe",
            "recommandations": ["Close for swimming", "Retest in 48h"]
        }"#;
        let env: Environment = serde_json::from_str(json).unwrap();
        assert_eq!(env.id, "64f1");
        assert_eq!(env.recommendations.len(), 2);
        assert_eq!(env.latest_recommendation(), Some("Retest in 48h"));

        let back = serde_json::to_value(&env).unwrap();
        assert!(back.get("_id").is_some());
        assert!(back.get("recommandations").is_some());
        assert!(back.get("recommendations").is_none());
    }

    #[test]
    fn test_missing_optional_fields_decode() {
        let json = r#"{ "_id": "1", "name": "Creek" }"#;
        let env: Environment = serde_json::from_str(json).unwrap();
        assert_eq!(env.location, "");
        assert_eq!(env.status, None);
        assert!(env.recommendations.is_empty());
        assert_eq!(env.safety_status(), SafetyStatus::Unknown);
    }

    #[test]
    fn test_status_label() {
        assert_eq!(SafetyStatus::Safe.label(), "Safe");
        assert_eq!(format!("{}", SafetyStatus::Unknown), "Unknown");
    }
}
