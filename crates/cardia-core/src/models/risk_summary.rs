use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// User-facing risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskCategory {
    /// All categories, least to most severe.
    pub const ALL: [RiskCategory; 4] = [Self::Low, Self::Moderate, Self::High, Self::Critical];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no [`RiskCategory`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown risk category: {0}")]
pub struct UnknownRiskCategory(pub String);

impl FromStr for RiskCategory {
    type Err = UnknownRiskCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownRiskCategory(s.to_string()))
    }
}

/// A clinical threshold that fired for the patient, with its fixed weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeatureImportance {
    #[serde(rename = "feature")]
    pub name: String,
    /// Weight in percent.
    pub importance: u32,
}

impl FeatureImportance {
    pub fn new(name: impl Into<String>, importance: u32) -> Self {
        Self {
            name: name.into(),
            importance,
        }
    }
}

/// Display-ready result handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskSummary {
    /// Confidence rounded to a whole percent.
    pub risk_score: u32,
    pub risk_category: RiskCategory,
    /// Same value as `risk_score`; kept separate for the presentation contract.
    pub confidence: u32,
    pub recommendations: Vec<String>,
    /// At most three entries, highest importance first.
    pub top_features: Vec<FeatureImportance>,
    /// Pass-through of the service's indicator.
    pub death_event: i32,
}
