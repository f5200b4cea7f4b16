//! Command logic shared by the binary and the integration tests.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use nutri_classify::{AGE_DAYS_PER_MONTH, GrowthReference, classify};
use nutri_model::{
    Child, ChildId, ClassificationResult, MUAC_FROM_MONTHS, Measurement, MeasurementRecord,
};
use nutri_reference::{LmsReference, UnavailableReference};
use nutri_store::Store;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::logging::redact_value;

/// Body measurements taken at a visit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureRequest {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub muac_mm: Option<f64>,
    /// Overrides the age derived from the registration record.
    pub age_months: Option<u32>,
}

/// Outcome of a recorded measurement.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub child: Child,
    pub result: ClassificationResult,
    pub record: MeasurementRecord,
}

/// Age in whole months at `at`, counted from the age given at registration.
pub fn current_age_months(child: &Child, at: DateTime<Utc>) -> u32 {
    let elapsed_days = (at - child.registered_at).num_days().max(0) as f64;
    let elapsed_months = (elapsed_days / AGE_DAYS_PER_MONTH).floor() as u32;
    child.age_months.saturating_add(elapsed_months)
}

/// Build a validated measurement for `child`. MUAC is not collected below
/// six months and is dropped with a warning when supplied.
pub fn prepare_measurement(
    child: &Child,
    request: &MeasureRequest,
    at: DateTime<Utc>,
) -> Result<Measurement> {
    let age_months = request
        .age_months
        .unwrap_or_else(|| current_age_months(child, at));
    let muac_mm = match request.muac_mm {
        Some(_) if age_months < MUAC_FROM_MONTHS => {
            warn!(
                child_id = %child.id,
                age_months,
                "MUAC is not used below 6 months; value ignored"
            );
            None
        }
        other => other,
    };
    let measurement = Measurement::validated(
        age_months,
        child.sex,
        request.weight_kg,
        request.height_cm,
        muac_mm,
    )
    .context("invalid measurement")?;
    Ok(measurement)
}

/// Classify a visit for `child_id` and append it to the child's history.
///
/// When `caregiver` is given the child must belong to that caregiver.
pub fn record_measurement<R>(
    store: &Store,
    reference: &R,
    child_id: ChildId,
    caregiver: Option<&str>,
    request: &MeasureRequest,
    at: DateTime<Utc>,
) -> Result<Recorded>
where
    R: GrowthReference + ?Sized,
{
    let child = match caregiver {
        Some(name) => store.child_for(child_id, name),
        None => store.child(child_id),
    }
    .with_context(|| format!("look up child {child_id}"))?
    .clone();
    debug!(child_id = %child.id, name = redact_value(&child.name), "recording measurement");

    let measurement = prepare_measurement(&child, request, at)?;
    let result = classify(reference, &measurement);
    let record = MeasurementRecord::new(child.id, at, &measurement, &result);
    store
        .append_measurement(&record)
        .with_context(|| format!("save measurement for child {child_id}"))?;
    Ok(Recorded {
        child,
        result,
        record,
    })
}

/// Resolve and load the growth reference. An unconfigured reference is not
/// an error: classification falls back to MUAC alone.
pub fn load_reference(
    settings: &Settings,
    reference_dir: Option<&Path>,
    disabled: bool,
) -> Result<Box<dyn GrowthReference>> {
    if disabled {
        info!("growth reference disabled; classifying by MUAC only");
        return Ok(Box::new(UnavailableReference));
    }
    let Some(files) = settings.reference_files(reference_dir) else {
        warn!(
            "no growth reference configured; BMI-for-age z-scores are unavailable \
             and results rely on MUAC alone"
        );
        return Ok(Box::new(UnavailableReference));
    };
    let reference = LmsReference::load_files(&files.boys, &files.girls).with_context(|| {
        format!(
            "load growth reference: {} / {}",
            files.boys.display(),
            files.girls.display()
        )
    })?;
    Ok(Box::new(reference))
}

/// Open the store at the resolved location.
pub fn open_store(settings: &Settings, store_dir: Option<&Path>) -> Result<Store> {
    let root = settings.store_dir(store_dir);
    Store::open(&root).with_context(|| format!("open store: {}", root.display()))
}
