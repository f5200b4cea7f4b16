//! CSV export of a child's full history.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use nutri_model::{Child, MeasurementRecord};
use tracing::info;

use crate::error::{ReportError, Result};
use crate::summary::format_date;

pub const CSV_HEADERS: [&str; 6] = [
    "Date",
    "Weight (kg)",
    "Height (cm)",
    "MUAC (mm)",
    "BMI Z-Score",
    "Status",
];

/// Write `records` as CSV. Absent MUAC or z-score values are empty cells.
pub fn write_csv<W: Write>(writer: W, records: &[MeasurementRecord]) -> Result<()> {
    if records.is_empty() {
        return Err(ReportError::NoMeasurements);
    }
    let mut csv = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    csv.write_record(CSV_HEADERS)?;
    for record in records {
        csv.write_record([
            format_date(&record.recorded_at),
            record.weight_kg.to_string(),
            record.height_cm.to_string(),
            record.muac_mm.map(|muac| muac.to_string()).unwrap_or_default(),
            record.bmi_z.map(|z| format!("{z:.2}")).unwrap_or_default(),
            record.status.to_string(),
        ])?;
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write `records` to a CSV file at `path`.
pub fn export_csv(path: &Path, records: &[MeasurementRecord]) -> Result<()> {
    if records.is_empty() {
        return Err(ReportError::NoMeasurements);
    }
    let file = File::create(path).map_err(|e| ReportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    write_csv(file, records)?;
    info!(path = %path.display(), records = records.len(), "history exported");
    Ok(())
}

/// `<child name>_nutricare.csv`, with characters unsafe in file names
/// replaced by `_`.
pub fn export_file_name(child: &Child) -> String {
    let stem: String = child
        .name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{stem}_nutricare.csv")
}
