use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Clinical measurements submitted for one prediction.
///
/// Serialized as a flat JSON object whose keys are the field names below;
/// this is the request body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientRecord {
    /// Age in whole years.
    pub age: u32,
    pub anaemia: bool,
    /// CPK enzyme level in the blood (mcg/L).
    pub creatinine_phosphokinase: f64,
    pub diabetes: bool,
    /// Percentage of blood leaving the heart at each contraction.
    pub ejection_fraction: u32,
    pub high_blood_pressure: bool,
    /// Platelet count (kiloplatelets/mL).
    pub platelets: f64,
    /// Serum creatinine (mg/dL).
    pub serum_creatinine: f64,
    /// Serum sodium (mEq/L).
    pub serum_sodium: u32,
    /// `true` for male.
    pub sex: bool,
    pub smoking: bool,
    /// Follow-up period in days.
    pub time: u32,
}

impl Default for PatientRecord {
    /// The initial values of the intake form.
    fn default() -> Self {
        Self {
            age: 65,
            anaemia: false,
            creatinine_phosphokinase: 582.0,
            diabetes: false,
            ejection_fraction: 38,
            high_blood_pressure: false,
            platelets: 265_000.0,
            serum_creatinine: 1.9,
            serum_sodium: 136,
            sex: true,
            smoking: false,
            time: 4,
        }
    }
}

/// A field whose value falls outside the intake form's accepted range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldViolation {
    pub field: String,
    pub value: f64,
    pub message: String,
}

impl PatientRecord {
    pub const AGE_RANGE: (u32, u32) = (18, 120);
    pub const EJECTION_FRACTION_RANGE: (u32, u32) = (10, 80);
    pub const TIME_RANGE: (u32, u32) = (1, 365);
    pub const SERUM_SODIUM_RANGE: (u32, u32) = (120, 160);

    /// Check the record against the intake form's input ranges.
    ///
    /// Advisory only: the prediction client forwards records unchecked, so
    /// callers decide whether a violation blocks submission.
    pub fn validate(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        let bounded = [
            ("age", self.age, Self::AGE_RANGE),
            (
                "ejection_fraction",
                self.ejection_fraction,
                Self::EJECTION_FRACTION_RANGE,
            ),
            ("time", self.time, Self::TIME_RANGE),
            ("serum_sodium", self.serum_sodium, Self::SERUM_SODIUM_RANGE),
        ];
        for (field, value, (min, max)) in bounded {
            if !(min..=max).contains(&value) {
                violations.push(FieldViolation {
                    field: field.to_string(),
                    value: f64::from(value),
                    message: format!("must be between {min} and {max}"),
                });
            }
        }

        let non_negative = [
            ("creatinine_phosphokinase", self.creatinine_phosphokinase),
            ("platelets", self.platelets),
            ("serum_creatinine", self.serum_creatinine),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() {
                violations.push(FieldViolation {
                    field: field.to_string(),
                    value,
                    message: "must be a finite number".to_string(),
                });
            } else if value < 0.0 {
                violations.push(FieldViolation {
                    field: field.to_string(),
                    value,
                    message: "must not be negative".to_string(),
                });
            }
        }

        violations
    }

    /// `true` when [`validate`](Self::validate) reports nothing.
    pub fn is_within_form_ranges(&self) -> bool {
        self.validate().is_empty()
    }
}
