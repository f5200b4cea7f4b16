//! LMS parameters and the WHO z-score formula.

use nutri_classify::ReferenceUnavailable;

use crate::error::{ReferenceError, Result};

/// Below this magnitude `L` is treated as zero (log-normal case).
const L_EPSILON: f64 = 1e-12;

/// Box-Cox parameters for one age.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LmsRow {
    pub day: f64,
    pub l: f64,
    pub m: f64,
    pub s: f64,
}

impl LmsRow {
    pub fn new(day: f64, l: f64, m: f64, s: f64) -> Self {
        Self { day, l, m, s }
    }

    /// Z-score of `value` with the WHO restricted tails: beyond ±3 SD the
    /// distance is measured in units of the 2-3 SD interval, which keeps
    /// skewed distributions from producing extreme scores.
    pub fn zscore(&self, value: f64) -> std::result::Result<f64, ReferenceUnavailable> {
        let z = self.raw_zscore(value);
        if !z.is_finite() {
            return Err(ReferenceUnavailable::new(format!(
                "z-score for {value} at day {} is not finite",
                self.day
            )));
        }
        if z > 3.0 {
            let sd3 = self.cutoff(3.0)?;
            let sd2 = self.cutoff(2.0)?;
            Ok(3.0 + (value - sd3) / (sd3 - sd2))
        } else if z < -3.0 {
            let sd3 = self.cutoff(-3.0)?;
            let sd2 = self.cutoff(-2.0)?;
            Ok(-3.0 + (value - sd3) / (sd2 - sd3))
        } else {
            Ok(z)
        }
    }

    /// Measurement value lying exactly `z` standard deviations from the
    /// median.
    pub fn cutoff(&self, z: f64) -> std::result::Result<f64, ReferenceUnavailable> {
        if self.l.abs() < L_EPSILON {
            return Ok(self.m * (self.s * z).exp());
        }
        let base = 1.0 + self.l * self.s * z;
        if base <= 0.0 {
            return Err(ReferenceUnavailable::new(format!(
                "{z} SD is undefined at day {}",
                self.day
            )));
        }
        Ok(self.m * base.powf(1.0 / self.l))
    }

    fn raw_zscore(&self, value: f64) -> f64 {
        let ratio = value / self.m;
        if self.l.abs() < L_EPSILON {
            ratio.ln() / self.s
        } else {
            (ratio.powf(self.l) - 1.0) / (self.l * self.s)
        }
    }
}

/// LMS rows for one sex, strictly increasing in age.
#[derive(Debug, Clone, PartialEq)]
pub struct LmsTable {
    rows: Vec<LmsRow>,
}

impl LmsTable {
    /// Build a table, checking that it is non-empty and sorted by age.
    pub fn from_rows(origin: &str, rows: Vec<LmsRow>) -> Result<Self> {
        if rows.is_empty() {
            return Err(ReferenceError::Empty {
                origin: origin.to_string(),
            });
        }
        for pair in rows.windows(2) {
            if pair[1].day <= pair[0].day {
                return Err(ReferenceError::Unsorted {
                    origin: origin.to_string(),
                    day: pair[1].day,
                    previous: pair[0].day,
                });
            }
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[LmsRow] {
        &self.rows
    }

    pub fn first_day(&self) -> f64 {
        self.rows[0].day
    }

    pub fn last_day(&self) -> f64 {
        self.rows[self.rows.len() - 1].day
    }

    /// Parameters at `age_days`, linearly interpolated between the
    /// neighbouring rows. `None` outside the table.
    pub fn at(&self, age_days: f64) -> Option<LmsRow> {
        if !age_days.is_finite() {
            return None;
        }
        let idx = self.rows.partition_point(|row| row.day <= age_days);
        let lower = *self.rows.get(idx.checked_sub(1)?)?;
        if lower.day == age_days {
            return Some(lower);
        }
        let upper = *self.rows.get(idx)?;
        let t = (age_days - lower.day) / (upper.day - lower.day);
        Some(LmsRow {
            day: age_days,
            l: lerp(lower.l, upper.l, t),
            m: lerp(lower.m, upper.m, t),
            s: lerp(lower.s, upper.s, t),
        })
    }

    pub fn zscore(
        &self,
        value: f64,
        age_days: f64,
    ) -> std::result::Result<f64, ReferenceUnavailable> {
        if !(value.is_finite() && value > 0.0) {
            return Err(ReferenceUnavailable::new(format!(
                "measurement {value} is not a positive number"
            )));
        }
        let lms = self.at(age_days).ok_or_else(|| {
            ReferenceUnavailable::new(format!(
                "age {age_days:.1} days is outside the reference range ({}-{} days)",
                self.first_day(),
                self.last_day()
            ))
        })?;
        lms.zscore(value)
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
