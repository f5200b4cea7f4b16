//! Store error types.
//!
//! Errors carry enough context for a user-facing message and, where one
//! exists, a hint on how to fix the problem.

use std::path::PathBuf;

use nutri_model::{ChildId, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Registry file is not valid JSON of the expected shape.
    #[error("Invalid registry file: {path}")]
    InvalidFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Registry written by a newer version.
    #[error("Registry version {found} is not supported (maximum: {max_supported})")]
    UnsupportedVersion {
        found: u32,
        max_supported: u32,
        path: PathBuf,
    },

    /// A line of a measurement log could not be parsed.
    #[error("Corrupt measurement record at {path}:{line}")]
    CorruptRecord {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Serialization error.
    #[error("Failed to serialize store data")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No child with id {id}")]
    UnknownChild { id: ChildId },

    #[error("Child {id} is not registered to caregiver '{caregiver}'")]
    NotOwned { id: ChildId, caregiver: String },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl StoreError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::InvalidFormat { path, .. } => {
                format!("The registry at {} could not be read.", path.display())
            }
            Self::UnsupportedVersion {
                found,
                max_supported,
                ..
            } => {
                format!(
                    "This data was written by a newer version of NutriCare \
                    (registry version {}, your version supports up to {}).",
                    found, max_supported
                )
            }
            Self::CorruptRecord { path, line, .. } => {
                format!(
                    "Measurement history {} is damaged at line {}.",
                    path.display(),
                    line
                )
            }
            Self::Serialization { .. } => "An error occurred while saving the data.".to_string(),
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the file to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
            Self::UnknownChild { id } => format!("Child {} was not found.", id),
            Self::NotOwned { id, caregiver } => {
                format!("Child {} does not belong to {}.", id, caregiver)
            }
            Self::Invalid(error) => error.to_string(),
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the file exists and you have permission to read it.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::InvalidFormat { .. } | Self::CorruptRecord { .. } => {
                Some("Restore the file from a backup if you have one.".into())
            }
            Self::UnsupportedVersion { .. } => Some("Update NutriCare to the latest version.".into()),
            Self::Serialization { .. } => None,
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or choose a different store directory.".into())
            }
            Self::UnknownChild { .. } | Self::NotOwned { .. } => {
                Some("Run `nutricare children` to list registered children.".into())
            }
            Self::Invalid(_) => None,
        }
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
