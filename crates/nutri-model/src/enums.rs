//! Type-safe enumerations for anthropometric data.
//!
//! Both enums are stored as strings (`male`/`female`, `SAM`/`MAM`/`NORMAL`)
//! in the measurement log and exports.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::recommendation;

/// Sex used to select the growth reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    /// Capitalized label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sex {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "boy" => Ok(Sex::Male),
            "female" | "f" | "girl" => Ok(Sex::Female),
            _ => Err(ValidationError::UnknownSex(s.to_string())),
        }
    }
}

/// Acute malnutrition classification.
///
/// Variants are declared from least to most severe, so the derived `Ord`
/// ranks `Normal < Mam < Sam` and the worse of two tiers is their maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NutritionStatus {
    /// No acute malnutrition signal.
    #[serde(rename = "NORMAL")]
    Normal,
    /// Moderate Acute Malnutrition.
    #[serde(rename = "MAM")]
    Mam,
    /// Severe Acute Malnutrition.
    #[serde(rename = "SAM")]
    Sam,
}

impl NutritionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NutritionStatus::Normal => "NORMAL",
            NutritionStatus::Mam => "MAM",
            NutritionStatus::Sam => "SAM",
        }
    }

    /// Full clinical name of the tier.
    pub fn description(&self) -> &'static str {
        match self {
            NutritionStatus::Normal => "Normal Status",
            NutritionStatus::Mam => "Moderate Acute Malnutrition",
            NutritionStatus::Sam => "Severe Acute Malnutrition",
        }
    }

    /// The more severe of two tiers.
    pub fn worst(self, other: NutritionStatus) -> NutritionStatus {
        self.max(other)
    }

    /// Fixed guidance text for this tier.
    pub fn recommendation(&self) -> &'static str {
        recommendation::for_status(*self)
    }
}

impl fmt::Display for NutritionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NutritionStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NORMAL" => Ok(NutritionStatus::Normal),
            "MAM" => Ok(NutritionStatus::Mam),
            "SAM" => Ok(NutritionStatus::Sam),
            _ => Err(ValidationError::UnknownStatus(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_from_str() {
        assert_eq!("Male".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!(" f ".parse::<Sex>().unwrap(), Sex::Female);
        assert!("other".parse::<Sex>().is_err());
    }

    #[test]
    fn test_status_ordering() {
        assert!(NutritionStatus::Sam > NutritionStatus::Mam);
        assert!(NutritionStatus::Mam > NutritionStatus::Normal);
        assert_eq!(
            NutritionStatus::Normal.worst(NutritionStatus::Sam),
            NutritionStatus::Sam
        );
        assert_eq!(
            NutritionStatus::Mam.worst(NutritionStatus::Normal),
            NutritionStatus::Mam
        );
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("sam".parse::<NutritionStatus>().unwrap(), NutritionStatus::Sam);
        assert_eq!(
            "NORMAL".parse::<NutritionStatus>().unwrap(),
            NutritionStatus::Normal
        );
        assert!("OK".parse::<NutritionStatus>().is_err());
    }
}
