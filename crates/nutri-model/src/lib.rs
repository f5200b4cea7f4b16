//! Domain types shared by the NutriCare crates.

pub mod enums;
pub mod error;
pub mod ids;
pub mod measurement;
pub mod record;
pub mod recommendation;

pub use enums::{NutritionStatus, Sex};
pub use error::{Result, ValidationError};
pub use ids::{CaregiverId, ChildId};
pub use measurement::{
    ClassificationResult, MAX_AGE_MONTHS, MAX_HEIGHT_CM, MAX_MUAC_MM, MAX_WEIGHT_KG, Measurement,
    MUAC_FROM_MONTHS,
};
pub use record::{Caregiver, Child, MeasurementRecord};
pub use recommendation::DISCLAIMER;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_absent_values_as_null() {
        let record = MeasurementRecord {
            child_id: ChildId::new(3),
            recorded_at: chrono::DateTime::from_timestamp(1_700_000_000, 0).expect("timestamp"),
            age_months: 4,
            weight_kg: 5.0,
            height_cm: 55.0,
            muac_mm: None,
            bmi: 16.53,
            bmi_z: None,
            status: NutritionStatus::Normal,
        };
        let json = serde_json::to_value(&record).expect("serialize record");
        assert!(json["muac_mm"].is_null());
        assert!(json["bmi_z"].is_null());
        assert_eq!(json["status"], "NORMAL");
    }
}
