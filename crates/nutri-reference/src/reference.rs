use std::path::Path;

use nutri_classify::{GrowthReference, ReferenceUnavailable};
use nutri_model::Sex;
use tracing::info;

use crate::error::{ReferenceError, Result};
use crate::lms::LmsTable;
use crate::loader::load_table;

/// WHO expanded BMI-for-age table for boys.
pub const BOYS_FILE: &str = "bfa_boys_z_exp.txt";
/// WHO expanded BMI-for-age table for girls.
pub const GIRLS_FILE: &str = "bfa_girls_z_exp.txt";

/// BMI-for-age reference with one LMS table per sex.
#[derive(Debug, Clone)]
pub struct LmsReference {
    male: LmsTable,
    female: LmsTable,
}

impl LmsReference {
    pub fn new(male: LmsTable, female: LmsTable) -> Self {
        Self { male, female }
    }

    /// Load [`BOYS_FILE`] and [`GIRLS_FILE`] from `dir`.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(ReferenceError::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }
        Self::load_files(&dir.join(BOYS_FILE), &dir.join(GIRLS_FILE))
    }

    pub fn load_files(boys: &Path, girls: &Path) -> Result<Self> {
        let reference = Self::new(load_table(boys)?, load_table(girls)?);
        info!(
            boys = %boys.display(),
            girls = %girls.display(),
            "growth reference loaded"
        );
        Ok(reference)
    }

    pub fn table(&self, sex: Sex) -> &LmsTable {
        match sex {
            Sex::Male => &self.male,
            Sex::Female => &self.female,
        }
    }
}

impl GrowthReference for LmsReference {
    fn bmi_for_age(
        &self,
        bmi: f64,
        age_days: f64,
        sex: Sex,
    ) -> std::result::Result<f64, ReferenceUnavailable> {
        self.table(sex).zscore(bmi, age_days)
    }
}

/// Reference with no tables; every lookup fails, leaving classification to
/// MUAC alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableReference;

impl GrowthReference for UnavailableReference {
    fn bmi_for_age(
        &self,
        _bmi: f64,
        _age_days: f64,
        _sex: Sex,
    ) -> std::result::Result<f64, ReferenceUnavailable> {
        Err(ReferenceUnavailable::new("no growth reference configured"))
    }
}
