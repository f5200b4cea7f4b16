//! Threshold rules, each a small pure function.

use nutri_model::NutritionStatus;

/// Days per month used to convert ages for the reference lookup.
pub const AGE_DAYS_PER_MONTH: f64 = 30.42;

/// At or below this z-score: SAM.
pub const ZSCORE_SAM: f64 = -3.0;
/// Below this z-score (and above [`ZSCORE_SAM`]): MAM.
pub const ZSCORE_MAM: f64 = -2.0;

/// Below this MUAC: SAM.
pub const MUAC_SAM_MM: f64 = 115.0;
/// Below this MUAC (and at or above [`MUAC_SAM_MM`]): MAM.
pub const MUAC_MAM_MM: f64 = 125.0;

/// BMI in kg/m² from weight in kilograms and height in centimeters.
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

pub fn age_in_days(age_months: u32) -> f64 {
    f64::from(age_months) * AGE_DAYS_PER_MONTH
}

/// Tier from the BMI-for-age z-score. An absent score carries no signal.
pub fn zscore_tier(bmi_z: Option<f64>) -> NutritionStatus {
    match bmi_z {
        Some(z) if z <= ZSCORE_SAM => NutritionStatus::Sam,
        Some(z) if z < ZSCORE_MAM => NutritionStatus::Mam,
        _ => NutritionStatus::Normal,
    }
}

pub fn muac_tier(muac_mm: f64) -> NutritionStatus {
    if muac_mm < MUAC_SAM_MM {
        NutritionStatus::Sam
    } else if muac_mm < MUAC_MAM_MM {
        NutritionStatus::Mam
    } else {
        NutritionStatus::Normal
    }
}
