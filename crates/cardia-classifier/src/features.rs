//! Threshold-based risk factors.
//!
//! Five fixed clinical rules, each carrying a static importance weight. The
//! fired rules are ranked by weight (stable, so ties keep table order) and cut
//! to the top three.

use cardia_core::constants::MAX_TOP_FEATURES;
use cardia_core::{FeatureImportance, PatientRecord};

/// A clinical threshold rule.
#[derive(Debug, Clone, Copy)]
pub struct RiskThreshold {
    pub name: &'static str,
    pub importance: u32,
    pub applies: fn(&PatientRecord) -> bool,
}

/// Rules in evaluation order.
pub const RISK_THRESHOLDS: [RiskThreshold; 5] = [
    RiskThreshold {
        name: "Ejection Fraction",
        importance: 85,
        applies: |r| r.ejection_fraction < 40,
    },
    RiskThreshold {
        name: "Serum Creatinine",
        importance: 72,
        applies: |r| r.serum_creatinine > 1.4,
    },
    RiskThreshold {
        name: "Age",
        importance: 68,
        applies: |r| r.age > 65,
    },
    RiskThreshold {
        name: "Anaemia",
        importance: 65,
        applies: |r| r.anaemia,
    },
    RiskThreshold {
        name: "Follow-up Time",
        importance: 60,
        applies: |r| r.time < 30,
    },
];

/// Rank the thresholds that fire for `record`, highest importance first,
/// keeping at most three.
pub fn top_risk_factors(record: &PatientRecord) -> Vec<FeatureImportance> {
    let mut fired: Vec<&RiskThreshold> = RISK_THRESHOLDS
        .iter()
        .filter(|t| (t.applies)(record))
        .collect();

    // `sort_by` is stable.
    fired.sort_by(|a, b| b.importance.cmp(&a.importance));
    fired.truncate(MAX_TOP_FEATURES);

    fired
        .into_iter()
        .map(|t| FeatureImportance::new(t.name, t.importance))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_record() -> PatientRecord {
        PatientRecord {
            age: 50,
            anaemia: false,
            ejection_fraction: 55,
            serum_creatinine: 1.0,
            time: 120,
            ..PatientRecord::default()
        }
    }

    #[test]
    fn no_rule_fires_for_a_quiet_record() {
        assert!(top_risk_factors(&quiet_record()).is_empty());
    }

    #[test]
    fn thresholds_are_strict() {
        let record = PatientRecord {
            ejection_fraction: 40,
            serum_creatinine: 1.4,
            age: 65,
            time: 30,
            ..quiet_record()
        };
        assert!(top_risk_factors(&record).is_empty());
    }

    #[test]
    fn lower_ranked_rules_surface_when_higher_ones_do_not_fire() {
        let record = PatientRecord {
            anaemia: true,
            time: 10,
            ..quiet_record()
        };
        let names: Vec<String> = top_risk_factors(&record)
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["Anaemia", "Follow-up Time"]);
    }

    #[test]
    fn table_weights_are_strictly_descending() {
        assert!(RISK_THRESHOLDS
            .windows(2)
            .all(|w| w[0].importance > w[1].importance));
    }
}
