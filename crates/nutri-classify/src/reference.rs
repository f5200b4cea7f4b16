//! The growth-reference seam.

use nutri_model::Sex;
use thiserror::Error;

/// The growth reference could not produce a z-score for the given inputs.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("growth reference unavailable: {reason}")]
pub struct ReferenceUnavailable {
    pub reason: String,
}

impl ReferenceUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Source of BMI-for-age z-scores.
pub trait GrowthReference {
    /// Z-score of `bmi` for a child of `age_days` and `sex`.
    fn bmi_for_age(&self, bmi: f64, age_days: f64, sex: Sex) -> Result<f64, ReferenceUnavailable>;
}

/// Any `Fn(bmi, age_days, sex)` closure is a reference.
impl<F> GrowthReference for F
where
    F: Fn(f64, f64, Sex) -> Result<f64, ReferenceUnavailable>,
{
    fn bmi_for_age(&self, bmi: f64, age_days: f64, sex: Sex) -> Result<f64, ReferenceUnavailable> {
        self(bmi, age_days, sex)
    }
}
