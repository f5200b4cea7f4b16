//! Integration tests for recording measurements through the service layer.

use std::fs;

use chrono::{DateTime, Duration, Utc};
use nutri_classify::{GrowthReference, ReferenceUnavailable};
use nutri_cli::config::Settings;
use nutri_cli::service::{
    MeasureRequest, current_age_months, load_reference, prepare_measurement, record_measurement,
};
use nutri_model::{CaregiverId, Child, ChildId, NutritionStatus, Sex, ValidationError};
use nutri_store::{Store, StoreError};
use tempfile::tempdir;

fn at() -> DateTime<Utc> {
    DateTime::from_timestamp(1_740_000_000, 0).unwrap()
}

fn request(muac_mm: Option<f64>, age_months: Option<u32>) -> MeasureRequest {
    MeasureRequest {
        weight_kg: 9.0,
        height_cm: 80.0,
        muac_mm,
        age_months,
    }
}

fn fixed(z: f64) -> impl Fn(f64, f64, Sex) -> Result<f64, ReferenceUnavailable> {
    move |_, _, _| Ok(z)
}

#[test]
fn measurement_is_classified_and_appended() {
    let dir = tempdir().unwrap();
    let mut store = Store::open(dir.path()).unwrap();
    let child = store
        .register_child("Amina", "Baraka", 24, Sex::Male)
        .unwrap();

    let recorded = record_measurement(
        &store,
        &fixed(-1.0),
        child.id,
        Some("Amina"),
        &request(Some(118.0), Some(24)),
        at(),
    )
    .unwrap();

    assert_eq!(recorded.result.status, NutritionStatus::Mam);
    assert_eq!(recorded.record.bmi_z, Some(-1.0));
    let history = store.measurements(child.id).unwrap();
    assert_eq!(history, vec![recorded.record]);
}

#[test]
fn infant_muac_is_dropped() {
    let dir = tempdir().unwrap();
    let mut store = Store::open(dir.path()).unwrap();
    let child = store
        .register_child("Amina", "Neema", 3, Sex::Female)
        .unwrap();

    let recorded = record_measurement(
        &store,
        &fixed(-3.2),
        child.id,
        None,
        &MeasureRequest {
            weight_kg: 5.0,
            height_cm: 55.0,
            muac_mm: Some(140.0),
            age_months: Some(3),
        },
        at(),
    )
    .unwrap();

    assert_eq!(recorded.result.status, NutritionStatus::Sam);
    assert_eq!(recorded.record.muac_mm, None);
    assert_eq!(recorded.result.muac_tier, None);
}

#[test]
fn missing_muac_from_six_months_is_rejected() {
    let dir = tempdir().unwrap();
    let mut store = Store::open(dir.path()).unwrap();
    let child = store
        .register_child("Amina", "Baraka", 24, Sex::Male)
        .unwrap();

    let err = record_measurement(
        &store,
        &fixed(0.0),
        child.id,
        None,
        &request(None, Some(24)),
        at(),
    )
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ValidationError>(),
        Some(ValidationError::MuacRequired { .. })
    ));
    assert!(store.measurements(child.id).unwrap().is_empty());
}

#[test]
fn other_caregivers_child_is_refused() {
    let dir = tempdir().unwrap();
    let mut store = Store::open(dir.path()).unwrap();
    let child = store
        .register_child("Amina", "Baraka", 24, Sex::Male)
        .unwrap();
    store
        .register_child("Joseph", "Imani", 12, Sex::Female)
        .unwrap();

    let err = record_measurement(
        &store,
        &fixed(0.0),
        child.id,
        Some("Joseph"),
        &request(Some(130.0), None),
        at(),
    )
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<StoreError>(),
        Some(StoreError::NotOwned { .. })
    ));
}

#[test]
fn age_advances_from_registration() {
    let child = Child {
        id: ChildId::new(1),
        caregiver_id: CaregiverId::new(1),
        name: "Baraka".into(),
        age_months: 10,
        sex: Sex::Male,
        registered_at: at(),
    };

    assert_eq!(current_age_months(&child, at()), 10);
    assert_eq!(current_age_months(&child, at() + Duration::days(29)), 10);
    assert_eq!(current_age_months(&child, at() + Duration::days(61)), 12);
    assert_eq!(current_age_months(&child, at() - Duration::days(90)), 10);

    let measurement = prepare_measurement(
        &child,
        &request(Some(130.0), None),
        at() + Duration::days(61),
    )
    .unwrap();
    assert_eq!(measurement.age_months, 12);
}

#[test]
fn disabled_reference_gives_no_zscore() {
    let reference = load_reference(&Settings::default(), None, true).unwrap();
    assert!(reference.bmi_for_age(16.0, 365.0, Sex::Male).is_err());
}

#[test]
fn configured_but_missing_reference_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("who");
    assert!(load_reference(&Settings::default(), Some(&missing), false).is_err());
}

#[test]
fn settings_file_is_read() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(
        &path,
        "[store]\ndir = \"/srv/nutricare\"\n\n[reference]\ndir = \"/opt/who\"\nboys_file = \"boys.txt\"\n",
    )
    .unwrap();

    let settings = Settings::load(Some(&path)).unwrap();
    assert_eq!(
        settings.resolve_store_dir(None, None),
        std::path::PathBuf::from("/srv/nutricare")
    );
    let files = settings.resolve_reference_files(None, None).unwrap();
    assert_eq!(files.boys, std::path::Path::new("/opt/who").join("boys.txt"));
    assert_eq!(
        files.girls,
        std::path::Path::new("/opt/who").join(nutri_reference::GIRLS_FILE)
    );
}

#[test]
fn settings_round_trip_through_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.toml");
    let mut settings = Settings::default();
    settings.store.dir = Some(dir.path().join("store"));

    settings.save_to(&path).unwrap();
    assert_eq!(Settings::load_from(&path).unwrap(), settings);
}
