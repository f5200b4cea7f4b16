//! Classifier input and output.

use serde::{Deserialize, Serialize};

use crate::enums::{NutritionStatus, Sex};
use crate::error::{Result, ValidationError};

/// Oldest supported age (the WHO under-five standards).
pub const MAX_AGE_MONTHS: u32 = 60;
pub const MAX_WEIGHT_KG: f64 = 50.0;
pub const MAX_HEIGHT_CM: f64 = 150.0;
pub const MAX_MUAC_MM: f64 = 300.0;
/// MUAC is collected and used from this age onward.
pub const MUAC_FROM_MONTHS: u32 = 6;

/// One set of anthropometric measurements for a child.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub age_months: u32,
    pub sex: Sex,
    pub weight_kg: f64,
    /// Length (under 2 years) or standing height.
    pub height_cm: f64,
    /// Mid-upper-arm circumference; `None` when not measured.
    pub muac_mm: Option<f64>,
}

impl Measurement {
    /// Build a measurement without checking bounds.
    pub fn new(
        age_months: u32,
        sex: Sex,
        weight_kg: f64,
        height_cm: f64,
        muac_mm: Option<f64>,
    ) -> Self {
        Self {
            age_months,
            sex,
            weight_kg,
            height_cm,
            muac_mm,
        }
    }

    /// Build a measurement and check it against the collection bounds.
    pub fn validated(
        age_months: u32,
        sex: Sex,
        weight_kg: f64,
        height_cm: f64,
        muac_mm: Option<f64>,
    ) -> Result<Self> {
        let measurement = Self::new(age_months, sex, weight_kg, height_cm, muac_mm);
        measurement.validate()?;
        Ok(measurement)
    }

    /// Whether MUAC takes part in classification at this age.
    pub fn uses_muac(&self) -> bool {
        self.age_months >= MUAC_FROM_MONTHS
    }

    pub fn validate(&self) -> Result<()> {
        if self.age_months > MAX_AGE_MONTHS {
            return Err(ValidationError::AgeOutOfRange {
                value: self.age_months,
                max: MAX_AGE_MONTHS,
            });
        }
        if !within(self.weight_kg, MAX_WEIGHT_KG) {
            return Err(ValidationError::WeightOutOfRange {
                value: self.weight_kg,
                max: MAX_WEIGHT_KG,
            });
        }
        if !within(self.height_cm, MAX_HEIGHT_CM) {
            return Err(ValidationError::HeightOutOfRange {
                value: self.height_cm,
                max: MAX_HEIGHT_CM,
            });
        }
        match self.muac_mm {
            Some(muac) if !within(muac, MAX_MUAC_MM) => Err(ValidationError::MuacOutOfRange {
                value: muac,
                max: MAX_MUAC_MM,
            }),
            None if self.uses_muac() => Err(ValidationError::MuacRequired {
                age_months: self.age_months,
                from_months: MUAC_FROM_MONTHS,
            }),
            _ => Ok(()),
        }
    }
}

/// `(0, max]`, rejecting NaN and infinities.
fn within(value: f64, max: f64) -> bool {
    value.is_finite() && value > 0.0 && value <= max
}

/// Outcome of classifying one [`Measurement`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub status: NutritionStatus,
    pub bmi: f64,
    /// BMI-for-age z-score; `None` when the growth reference had no answer.
    pub bmi_z: Option<f64>,
    /// MUAC as supplied by the caller.
    pub muac_mm: Option<f64>,
    /// Tier derived from the z-score alone.
    pub zscore_tier: NutritionStatus,
    /// Tier derived from MUAC alone; `None` when MUAC did not take part.
    pub muac_tier: Option<NutritionStatus>,
}

impl ClassificationResult {
    pub fn recommendation(&self) -> &'static str {
        self.status.recommendation()
    }
}
