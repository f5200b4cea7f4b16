use thiserror::Error;

/// Rejected caller input.
///
/// The classifier assumes its inputs are already within bounds; these errors
/// are raised by whoever collects the measurement before calling it.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("age must be between 0 and {max} months (got {value})")]
    AgeOutOfRange { value: u32, max: u32 },

    #[error("weight must be positive and at most {max} kg (got {value})")]
    WeightOutOfRange { value: f64, max: f64 },

    #[error("height must be positive and at most {max} cm (got {value})")]
    HeightOutOfRange { value: f64, max: f64 },

    #[error("MUAC must be positive and at most {max} mm (got {value})")]
    MuacOutOfRange { value: f64, max: f64 },

    #[error("MUAC is required from {from_months} months of age (child is {age_months} months)")]
    MuacRequired { age_months: u32, from_months: u32 },

    #[error("{field} must not be empty")]
    EmptyName { field: &'static str },

    #[error("unknown sex '{0}' (expected male or female)")]
    UnknownSex(String),

    #[error("unknown nutrition status '{0}'")]
    UnknownStatus(String),
}

pub type Result<T> = std::result::Result<T, ValidationError>;
