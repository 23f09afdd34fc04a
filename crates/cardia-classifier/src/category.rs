//! Risk category selection and the fixed recommendation lists.

use cardia_core::constants::DEATH_EVENT_PREDICTED;
use cardia_core::RiskCategory;

/// Confidence (percent) above which a predicted death event is Critical.
/// Equivalent to a death probability above 0.7.
pub const CRITICAL_CONFIDENCE: f64 = 70.0;

/// Confidence (percent) below which a non-event prediction is Low.
/// Equivalent to a death probability below 0.3.
pub const LOW_CONFIDENCE: f64 = 30.0;

/// Pick the category from the death-event indicator and a sanitized
/// percentage confidence.
///
/// A predicted event is checked against the high bound, a non-event against
/// the low one. Comparisons run on the percentage scale so that a confidence
/// just under 30 can never round onto the 0.3 boundary.
pub fn categorize(death_event: i32, confidence: f64) -> RiskCategory {
    if death_event == DEATH_EVENT_PREDICTED {
        if confidence > CRITICAL_CONFIDENCE {
            RiskCategory::Critical
        } else {
            RiskCategory::High
        }
    } else if confidence < LOW_CONFIDENCE {
        RiskCategory::Low
    } else {
        RiskCategory::Moderate
    }
}

const CRITICAL: &[&str] = &[
    "Emergency medical evaluation needed",
    "Consider ICU admission",
    "Aggressive treatment protocol",
    "Daily monitoring essential",
    "Advanced heart failure team consultation",
];

const HIGH: &[&str] = &[
    "Immediate medical attention required",
    "Consider hospitalization",
    "Optimize heart failure medications",
    "Weekly monitoring recommended",
    "Cardiology consultation needed",
];

const MODERATE: &[&str] = &[
    "Increase monitoring frequency",
    "Consider lifestyle modifications",
    "Follow up in 3 months",
    "Monitor blood pressure regularly",
    "Optimize medication adherence",
];

const LOW: &[&str] = &[
    "Continue regular monitoring",
    "Maintain healthy lifestyle",
    "Follow up in 6 months",
    "Focus on preventive care",
];

/// Recommendation list for a category, in display order.
pub fn recommendations_for(category: RiskCategory) -> &'static [&'static str] {
    match category {
        RiskCategory::Critical => CRITICAL,
        RiskCategory::High => HIGH,
        RiskCategory::Moderate => MODERATE,
        RiskCategory::Low => LOW,
    }
}
