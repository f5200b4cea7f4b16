//! Reports over a child's measurement history.

mod error;
mod export;
mod summary;

pub use error::{ReportError, Result};
pub use export::{CSV_HEADERS, export_csv, export_file_name, write_csv};
pub use summary::{ChildSummary, DEFAULT_RECENT, Trend, format_date, render_summary};
