//! Tests for nutri-model types.

use nutri_model::{
    ChildId, ClassificationResult, MeasurementRecord, Measurement, NutritionStatus, Sex,
};

#[test]
fn record_copies_measurement_and_result() {
    let measurement = Measurement::new(24, Sex::Male, 9.0, 80.0, Some(118.0));
    let result = ClassificationResult {
        status: NutritionStatus::Mam,
        bmi: 14.0625,
        bmi_z: Some(-1.0),
        muac_mm: Some(118.0),
        zscore_tier: NutritionStatus::Normal,
        muac_tier: Some(NutritionStatus::Mam),
    };
    let at = chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    let record = MeasurementRecord::new(ChildId::new(7), at, &measurement, &result);

    assert_eq!(record.child_id, ChildId::new(7));
    assert_eq!(record.age_months, 24);
    assert_eq!(record.muac_mm, Some(118.0));
    assert_eq!(record.bmi_z, Some(-1.0));
    assert_eq!(record.status, NutritionStatus::Mam);
}

#[test]
fn record_round_trips_through_json() {
    let json = r#"{"child_id":1,"recorded_at":"2025-03-01T10:00:00Z","age_months":30,
        "weight_kg":11.5,"height_cm":88.0,"muac_mm":130.0,"bmi":14.85,"bmi_z":null,
        "status":"NORMAL"}"#;
    let record: MeasurementRecord = serde_json::from_str(json).expect("deserialize record");
    assert_eq!(record.child_id, ChildId::new(1));
    assert_eq!(record.bmi_z, None);
    assert_eq!(record.status, NutritionStatus::Normal);
}

#[test]
fn result_recommendation_follows_status() {
    let result = ClassificationResult {
        status: NutritionStatus::Sam,
        bmi: 16.5,
        bmi_z: Some(-3.2),
        muac_mm: None,
        zscore_tier: NutritionStatus::Sam,
        muac_tier: None,
    };
    assert_eq!(result.recommendation(), NutritionStatus::Sam.recommendation());
}
