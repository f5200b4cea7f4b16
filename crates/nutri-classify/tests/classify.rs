//! Integration tests for the classifier.

use nutri_classify::{
    Classifier, GrowthReference, ReferenceUnavailable, classify, muac_tier, zscore_tier,
};
use nutri_model::{Measurement, NutritionStatus, Sex};
use proptest::prelude::*;

/// Reference that always answers with the same z-score.
fn fixed(z: f64) -> impl GrowthReference {
    move |_: f64, _: f64, _: Sex| Ok::<f64, ReferenceUnavailable>(z)
}

fn failing() -> impl GrowthReference {
    |_: f64, _: f64, _: Sex| Err::<f64, _>(ReferenceUnavailable::new("age outside table"))
}

#[test]
fn infant_with_low_zscore_is_sam() {
    let measurement = Measurement::new(3, Sex::Male, 5.0, 55.0, None);
    let result = classify(&fixed(-3.2), &measurement);
    assert_eq!(result.status, NutritionStatus::Sam);
    assert_eq!(result.bmi_z, Some(-3.2));
    assert_eq!(result.muac_tier, None);
}

#[test]
fn muac_mam_outweighs_normal_zscore() {
    let measurement = Measurement::new(24, Sex::Female, 9.0, 80.0, Some(118.0));
    let result = classify(&fixed(-1.0), &measurement);
    assert_eq!(result.muac_tier, Some(NutritionStatus::Mam));
    assert_eq!(result.zscore_tier, NutritionStatus::Normal);
    assert_eq!(result.status, NutritionStatus::Mam);
}

#[test]
fn muac_sam_wins_over_positive_zscore() {
    let measurement = Measurement::new(24, Sex::Male, 10.5, 84.0, Some(110.0));
    let result = classify(&fixed(0.5), &measurement);
    assert_eq!(result.status, NutritionStatus::Sam);
}

#[test]
fn reference_failure_degrades_to_muac_only() {
    let measurement = Measurement::new(30, Sex::Female, 11.5, 88.0, Some(130.0));
    let result = classify(&failing(), &measurement);
    assert_eq!(result.status, NutritionStatus::Normal);
    assert_eq!(result.bmi_z, None);
    assert_eq!(result.muac_mm, Some(130.0));
}

#[test]
fn reference_failure_still_reports_muac_sam() {
    let measurement = Measurement::new(30, Sex::Female, 9.0, 88.0, Some(112.0));
    let result = classify(&failing(), &measurement);
    assert_eq!(result.status, NutritionStatus::Sam);
}

#[test]
fn reference_receives_bmi_age_days_and_sex() {
    let reference = |bmi: f64, age_days: f64, sex: Sex| {
        assert!((bmi - 14.0625).abs() < 1e-9);
        assert!((age_days - 730.08).abs() < 1e-9);
        assert_eq!(sex, Sex::Female);
        Ok::<f64, ReferenceUnavailable>(0.0)
    };
    let measurement = Measurement::new(24, Sex::Female, 9.0, 80.0, Some(140.0));
    let result = classify(&reference, &measurement);
    assert!((result.bmi - 14.0625).abs() < 1e-9);
}

#[test]
fn classifier_wraps_reference() {
    let classifier = Classifier::new(fixed(-2.5));
    let measurement = Measurement::new(4, Sex::Male, 5.5, 60.0, None);
    assert_eq!(classifier.classify(&measurement).status, NutritionStatus::Mam);
}

#[test]
fn classify_through_trait_object() {
    let reference: Box<dyn GrowthReference> = Box::new(fixed(-2.0));
    let measurement = Measurement::new(8, Sex::Male, 8.0, 70.0, Some(126.0));
    let result = classify(reference.as_ref(), &measurement);
    assert_eq!(result.status, NutritionStatus::Normal);
}

fn sex_strategy() -> impl Strategy<Value = Sex> {
    prop_oneof![Just(Sex::Male), Just(Sex::Female)]
}

fn zscore_strategy() -> impl Strategy<Value = Option<f64>> {
    prop::option::of(-6.0f64..6.0)
}

fn lookup(z: Option<f64>) -> impl GrowthReference {
    move |_: f64, _: f64, _: Sex| z.ok_or_else(|| ReferenceUnavailable::new("no score"))
}

proptest! {
    #[test]
    fn infants_ignore_muac(
        age in 0u32..6,
        sex in sex_strategy(),
        weight in 2.0f64..12.0,
        height in 45.0f64..75.0,
        muac in prop::option::of(50.0f64..300.0),
        z in zscore_strategy(),
    ) {
        let reference = lookup(z);
        let without = classify(&reference, &Measurement::new(age, sex, weight, height, None));
        let with = classify(&reference, &Measurement::new(age, sex, weight, height, muac));
        prop_assert_eq!(without.status, with.status);
        prop_assert_eq!(with.status, zscore_tier(z));
    }

    #[test]
    fn older_children_take_the_worse_tier(
        age in 6u32..=60,
        sex in sex_strategy(),
        weight in 5.0f64..30.0,
        height in 60.0f64..120.0,
        muac in 80.0f64..200.0,
        z in zscore_strategy(),
    ) {
        let reference = lookup(z);
        let result = classify(&reference, &Measurement::new(age, sex, weight, height, Some(muac)));
        let expected = muac_tier(muac).max(zscore_tier(z));
        prop_assert_eq!(result.status, expected);
        prop_assert!(result.status >= muac_tier(muac));
        prop_assert!(result.status >= zscore_tier(z));
    }

    #[test]
    fn classification_is_repeatable(
        age in 0u32..=60,
        sex in sex_strategy(),
        weight in 2.0f64..50.0,
        height in 45.0f64..150.0,
        muac in prop::option::of(80.0f64..300.0),
        z in zscore_strategy(),
    ) {
        let reference = lookup(z);
        let measurement = Measurement::new(age, sex, weight, height, muac);
        prop_assert_eq!(classify(&reference, &measurement), classify(&reference, &measurement));
    }
}
