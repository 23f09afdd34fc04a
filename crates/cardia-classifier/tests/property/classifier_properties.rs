use cardia_classifier::classify;
use cardia_core::{PatientRecord, PredictionResponse, RiskCategory};
use proptest::prelude::*;

fn arb_record() -> impl Strategy<Value = PatientRecord> {
    (
        (0u32..130, any::<bool>(), 0.0f64..8000.0, any::<bool>()),
        (0u32..100, any::<bool>(), 0.0f64..900_000.0, 0.0f64..10.0),
        (100u32..170, any::<bool>(), any::<bool>(), 0u32..400),
    )
        .prop_map(
            |(
                (age, anaemia, creatinine_phosphokinase, diabetes),
                (ejection_fraction, high_blood_pressure, platelets, serum_creatinine),
                (serum_sodium, sex, smoking, time),
            )| PatientRecord {
                age,
                anaemia,
                creatinine_phosphokinase,
                diabetes,
                ejection_fraction,
                high_blood_pressure,
                platelets,
                serum_creatinine,
                serum_sodium,
                sex,
                smoking,
                time,
            },
        )
}

proptest! {
    #[test]
    fn predicted_event_above_70_is_critical(c in 70.0f64..=100.0, input in arb_record()) {
        prop_assume!(c > 70.0);
        let summary = classify(&PredictionResponse::new(1, c), &input);
        prop_assert_eq!(summary.risk_category, RiskCategory::Critical);
    }

    #[test]
    fn predicted_event_at_or_below_70_is_high(c in 0.0f64..=70.0, input in arb_record()) {
        let summary = classify(&PredictionResponse::new(1, c), &input);
        prop_assert_eq!(summary.risk_category, RiskCategory::High);
    }

    #[test]
    fn non_event_below_30_is_low(
        death_event in any::<i32>().prop_filter("non-event", |d| *d != 1),
        c in 0.0f64..30.0,
        input in arb_record(),
    ) {
        let summary = classify(&PredictionResponse::new(death_event, c), &input);
        prop_assert_eq!(summary.risk_category, RiskCategory::Low);
    }

    #[test]
    fn non_event_at_or_above_30_is_moderate(
        death_event in any::<i32>().prop_filter("non-event", |d| *d != 1),
        c in 30.0f64..=100.0,
        input in arb_record(),
    ) {
        let summary = classify(&PredictionResponse::new(death_event, c), &input);
        prop_assert_eq!(summary.risk_category, RiskCategory::Moderate);
    }

    #[test]
    fn top_features_bounded_and_sorted(
        death_event in 0i32..=1,
        c in 0.0f64..=100.0,
        input in arb_record(),
    ) {
        let summary = classify(&PredictionResponse::new(death_event, c), &input);
        prop_assert!(summary.top_features.len() <= 3);
        prop_assert!(summary
            .top_features
            .windows(2)
            .all(|w| w[0].importance >= w[1].importance));
    }

    #[test]
    fn scores_are_whole_percents_in_range(c in prop::num::f64::ANY, death_event in 0i32..=1) {
        let summary = classify(&PredictionResponse::new(death_event, c), &PatientRecord::default());
        prop_assert!(summary.risk_score <= 100);
        prop_assert_eq!(summary.risk_score, summary.confidence);
    }

    #[test]
    fn in_range_scores_round_to_nearest(c in 0.0f64..=100.0) {
        let summary = classify(&PredictionResponse::new(0, c), &PatientRecord::default());
        prop_assert!((f64::from(summary.risk_score) - c).abs() <= 0.5);
    }

    #[test]
    fn classify_is_idempotent(
        death_event in 0i32..=1,
        c in 0.0f64..=100.0,
        input in arb_record(),
    ) {
        let response = PredictionResponse::new(death_event, c);
        prop_assert_eq!(classify(&response, &input), classify(&response, &input));
    }

    #[test]
    fn recommendation_count_tracks_category(death_event in 0i32..=1, c in 0.0f64..=100.0) {
        let summary = classify(&PredictionResponse::new(death_event, c), &PatientRecord::default());
        let expected = if summary.risk_category == RiskCategory::Low { 4 } else { 5 };
        prop_assert_eq!(summary.recommendations.len(), expected);
    }
}
