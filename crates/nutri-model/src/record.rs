//! Persisted registry and history records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{NutritionStatus, Sex};
use crate::ids::{CaregiverId, ChildId};
use crate::measurement::{ClassificationResult, Measurement};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caregiver {
    pub id: CaregiverId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    pub id: ChildId,
    pub caregiver_id: CaregiverId,
    pub name: String,
    /// Age at registration.
    pub age_months: u32,
    pub sex: Sex,
    pub registered_at: DateTime<Utc>,
}

/// One classified measurement in a child's history. Never modified once
/// written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    pub child_id: ChildId,
    pub recorded_at: DateTime<Utc>,
    pub age_months: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub muac_mm: Option<f64>,
    pub bmi: f64,
    pub bmi_z: Option<f64>,
    pub status: NutritionStatus,
}

impl MeasurementRecord {
    pub fn new(
        child_id: ChildId,
        recorded_at: DateTime<Utc>,
        measurement: &Measurement,
        result: &ClassificationResult,
    ) -> Self {
        Self {
            child_id,
            recorded_at,
            age_months: measurement.age_months,
            weight_kg: measurement.weight_kg,
            height_cm: measurement.height_cm,
            muac_mm: measurement.muac_mm,
            bmi: result.bmi,
            bmi_z: result.bmi_z,
            status: result.status,
        }
    }
}
