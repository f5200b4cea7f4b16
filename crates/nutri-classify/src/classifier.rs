use nutri_model::{ClassificationResult, Measurement, NutritionStatus};
use tracing::{debug, warn};

use crate::reference::GrowthReference;
use crate::tiers::{age_in_days, body_mass_index, muac_tier, zscore_tier};

/// Classify a measurement against a growth reference.
///
/// Never fails: a reference error leaves `bmi_z` empty and the z-score tier
/// at `NORMAL`. Bounds on the inputs are the caller's responsibility.
pub fn classify<R>(reference: &R, measurement: &Measurement) -> ClassificationResult
where
    R: GrowthReference + ?Sized,
{
    let bmi = body_mass_index(measurement.weight_kg, measurement.height_cm);
    let bmi_z = lookup_zscore(reference, bmi, measurement);
    let zscore_tier = zscore_tier(bmi_z);
    let muac_tier = muac_signal(measurement);
    let status = combine(zscore_tier, muac_tier);
    debug!(
        age_months = measurement.age_months,
        %status,
        %zscore_tier,
        muac_tier = ?muac_tier,
        "measurement classified"
    );
    ClassificationResult {
        status,
        bmi,
        bmi_z,
        muac_mm: measurement.muac_mm,
        zscore_tier,
        muac_tier,
    }
}

fn lookup_zscore<R>(reference: &R, bmi: f64, measurement: &Measurement) -> Option<f64>
where
    R: GrowthReference + ?Sized,
{
    let age_days = age_in_days(measurement.age_months);
    match reference.bmi_for_age(bmi, age_days, measurement.sex) {
        Ok(z) if z.is_finite() => Some(z),
        Ok(z) => {
            warn!(z, age_days, "growth reference returned a non-finite z-score");
            None
        }
        Err(error) => {
            warn!(%error, age_days, "no BMI-for-age z-score, classifying without it");
            None
        }
    }
}

/// MUAC tier for children old enough to be screened by MUAC.
///
/// A missing MUAC from 6 months onward breaks the caller contract; it is
/// treated as no signal rather than a failure.
fn muac_signal(measurement: &Measurement) -> Option<NutritionStatus> {
    if !measurement.uses_muac() {
        return None;
    }
    match measurement.muac_mm {
        Some(muac) => Some(muac_tier(muac)),
        None => {
            warn!(
                age_months = measurement.age_months,
                "MUAC missing for a child aged 6 months or more"
            );
            None
        }
    }
}

fn combine(zscore_tier: NutritionStatus, muac_tier: Option<NutritionStatus>) -> NutritionStatus {
    match muac_tier {
        Some(muac_tier) => muac_tier.worst(zscore_tier),
        None => zscore_tier,
    }
}

/// A growth reference bound to the classification rules.
#[derive(Debug, Clone)]
pub struct Classifier<R> {
    reference: R,
}

impl<R: GrowthReference> Classifier<R> {
    pub fn new(reference: R) -> Self {
        Self { reference }
    }

    pub fn classify(&self, measurement: &Measurement) -> ClassificationResult {
        classify(&self.reference, measurement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ReferenceUnavailable;
    use nutri_model::Sex;

    #[test]
    fn combine_takes_the_worse_tier() {
        assert_eq!(
            combine(NutritionStatus::Normal, Some(NutritionStatus::Mam)),
            NutritionStatus::Mam
        );
        assert_eq!(
            combine(NutritionStatus::Sam, Some(NutritionStatus::Mam)),
            NutritionStatus::Sam
        );
        assert_eq!(combine(NutritionStatus::Mam, None), NutritionStatus::Mam);
    }

    #[test]
    fn missing_muac_after_six_months_is_no_signal() {
        let measurement = Measurement::new(12, Sex::Female, 8.0, 72.0, None);
        assert_eq!(muac_signal(&measurement), None);
    }

    #[test]
    fn non_finite_zscore_is_absent() {
        let reference = |_: f64, _: f64, _: Sex| Ok::<f64, ReferenceUnavailable>(f64::NAN);
        let measurement = Measurement::new(3, Sex::Male, 5.0, 55.0, None);
        let result = classify(&reference, &measurement);
        assert_eq!(result.bmi_z, None);
        assert_eq!(result.status, NutritionStatus::Normal);
    }
}
