//! Acute malnutrition classification.
//!
//! [`classify`] turns one [`Measurement`](nutri_model::Measurement) into a
//! [`ClassificationResult`](nutri_model::ClassificationResult). It is a pure
//! function apart from a single call to a [`GrowthReference`], whose failure
//! is absorbed: the z-score is reported as absent and classification goes on
//! with whatever MUAC provides.
//!
//! # Decision rules
//!
//! | Signal            | SAM          | MAM                | NORMAL     |
//! |-------------------|--------------|--------------------|------------|
//! | BMI-for-age z     | z <= -3      | -3 < z < -2        | z >= -2    |
//! | MUAC (>= 6 months)| < 115 mm     | 115 <= m < 125 mm  | >= 125 mm  |
//!
//! Under 6 months only the z-score counts. From 6 months the worse of the
//! two tiers wins.

pub mod classifier;
pub mod reference;
pub mod tiers;

pub use classifier::{Classifier, classify};
pub use reference::{GrowthReference, ReferenceUnavailable};
pub use tiers::{
    AGE_DAYS_PER_MONTH, MUAC_MAM_MM, MUAC_SAM_MM, ZSCORE_MAM, ZSCORE_SAM, age_in_days,
    body_mass_index, muac_tier, zscore_tier,
};
