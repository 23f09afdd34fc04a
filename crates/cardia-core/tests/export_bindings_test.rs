//! Test that generates TypeScript bindings from Rust types via ts-rs.
//!
//! Run with: cargo test -p cardia-core export_bindings
//! Generated files appear in cardia-core/bindings/*.ts
//!
//! CI should run this and then `git diff --exit-code` to catch drift between
//! the Rust model and the presentation layer's imports.

fn assert_ts<T: ts_rs::TS>() {}

#[test]
fn export_bindings() {
    use cardia_core::models::{
        FeatureImportance, FieldViolation, HealthReport, PatientRecord, PredictionResponse,
        RiskCategory, RiskSummary,
    };

    assert_ts::<PatientRecord>();
    assert_ts::<FieldViolation>();
    assert_ts::<PredictionResponse>();
    assert_ts::<RiskCategory>();
    assert_ts::<FeatureImportance>();
    assert_ts::<RiskSummary>();
    assert_ts::<HealthReport>();
}
