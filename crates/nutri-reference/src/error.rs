//! Error types for loading growth-reference tables.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReferenceError {
    /// Reference directory not found.
    #[error("Reference directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Table file not found.
    #[error("Reference table not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read or parse the delimited file.
    #[error("Failed to read reference table {origin}: {source}")]
    CsvRead {
        origin: String,
        #[source]
        source: csv::Error,
    },

    /// A required column is missing from the header.
    #[error("Reference table {origin} has no '{column}' column")]
    MissingColumn {
        origin: String,
        column: &'static str,
    },

    /// A cell could not be parsed as a number.
    #[error("Invalid {column} value '{value}' on line {line} of {origin}")]
    InvalidValue {
        origin: String,
        column: &'static str,
        value: String,
        line: u64,
    },

    /// Table has no rows.
    #[error("Reference table {origin} is empty")]
    Empty { origin: String },

    /// Ages must be strictly increasing.
    #[error("Reference table {origin} is not sorted by age (day {day} after {previous})")]
    Unsorted {
        origin: String,
        day: f64,
        previous: f64,
    },
}

pub type Result<T> = std::result::Result<T, ReferenceError>;
