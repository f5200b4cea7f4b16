//! Reading LMS tables from delimited text.
//!
//! WHO distributes the expanded tables as tab-separated text with a header
//! such as `Day  L  M  S  SD4neg ...`. Comma-separated copies are accepted
//! too. Only the age and L/M/S columns are read.

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::{ReferenceError, Result};
use crate::lms::{LmsRow, LmsTable};

const AGE_COLUMNS: &[&str] = &["day", "age", "agedays"];

/// Load a table from a file.
pub fn load_table(path: &Path) -> Result<LmsTable> {
    if !path.is_file() {
        return Err(ReferenceError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let origin = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| ReferenceError::CsvRead {
        origin: origin.clone(),
        source: e.into(),
    })?;
    let table = parse_table(&content, &origin)?;
    debug!(
        path = %origin,
        rows = table.rows().len(),
        first_day = table.first_day(),
        last_day = table.last_day(),
        "loaded LMS table"
    );
    Ok(table)
}

/// Parse a table from text; `origin` names the source in errors.
pub fn parse_table(content: &str, origin: &str) -> Result<LmsTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(detect_delimiter(content))
        .trim(Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| csv_error(origin, e))?
        .clone();
    let columns = Columns::locate(&headers, origin)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(origin, e))?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = record.position().map_or(0, csv::Position::line);
        let cell = |index: usize, column: &'static str| -> Result<f64> {
            let value = record.get(index).unwrap_or("");
            value
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ReferenceError::InvalidValue {
                    origin: origin.to_string(),
                    column,
                    value: value.to_string(),
                    line,
                })
        };
        let row = LmsRow::new(
            cell(columns.day, "Day")?,
            cell(columns.l, "L")?,
            cell(columns.m, "M")?,
            cell(columns.s, "S")?,
        );
        if row.m <= 0.0 {
            return Err(invalid(origin, "M", row.m, line));
        }
        if row.s <= 0.0 {
            return Err(invalid(origin, "S", row.s, line));
        }
        rows.push(row);
    }
    LmsTable::from_rows(origin, rows)
}

struct Columns {
    day: usize,
    l: usize,
    m: usize,
    s: usize,
}

impl Columns {
    fn locate(headers: &StringRecord, origin: &str) -> Result<Self> {
        let find = |names: &[&str], column: &'static str| -> Result<usize> {
            headers
                .iter()
                .position(|header| {
                    let header = header.trim_matches('\u{feff}').to_lowercase();
                    names.iter().any(|name| header == *name)
                })
                .ok_or_else(|| ReferenceError::MissingColumn {
                    origin: origin.to_string(),
                    column,
                })
        };
        Ok(Self {
            day: find(AGE_COLUMNS, "Day")?,
            l: find(&["l"], "L")?,
            m: find(&["m"], "M")?,
            s: find(&["s"], "S")?,
        })
    }
}

fn detect_delimiter(content: &str) -> u8 {
    let header = content.lines().find(|line| !line.trim().is_empty()).unwrap_or("");
    if header.contains('\t') { b'\t' } else { b',' }
}

fn csv_error(origin: &str, source: csv::Error) -> ReferenceError {
    ReferenceError::CsvRead {
        origin: origin.to_string(),
        source,
    }
}

fn invalid(origin: &str, column: &'static str, value: f64, line: u64) -> ReferenceError {
    ReferenceError::InvalidValue {
        origin: origin.to_string(),
        column,
        value: value.to_string(),
        line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHO_SAMPLE: &str = "Day\tL\tM\tS\tSD3neg\tSD2neg\n\
                              0\t-0.3053\t13.4069\t0.0956\t10.2\t11.1\n\
                              1\t-0.2708\t13.3976\t0.09597\t10.1\t11.0\n\
                              2\t-0.2379\t13.3976\t0.09628\t10.1\t11.0\n";

    #[test]
    fn parses_tab_separated_who_layout() {
        let table = parse_table(WHO_SAMPLE, "sample").unwrap();
        assert_eq!(table.rows().len(), 3);
        assert_eq!(table.rows()[1], LmsRow::new(1.0, -0.2708, 13.3976, 0.09597));
    }

    #[test]
    fn parses_comma_separated_with_bom_and_blank_lines() {
        let content = "\u{feff}age,l,m,s\n0,-0.3,13.4,0.095\n\n30,-0.1,14.0,0.09\n";
        let table = parse_table(content, "csv").unwrap();
        assert_eq!(table.last_day(), 30.0);
    }

    #[test]
    fn reports_missing_column() {
        let err = parse_table("Day\tL\tM\n0\t1\t2\n", "short").unwrap_err();
        assert!(matches!(err, ReferenceError::MissingColumn { column: "S", .. }));
    }

    #[test]
    fn reports_bad_cell_with_line_number() {
        let err = parse_table("Day,L,M,S\n0,-0.3,13.4,0.09\n1,-0.3,abc,0.09\n", "bad").unwrap_err();
        match err {
            ReferenceError::InvalidValue {
                column, value, line, ..
            } => {
                assert_eq!(column, "M");
                assert_eq!(value, "abc");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_non_positive_median() {
        let err = parse_table("Day,L,M,S\n0,-0.3,0,0.09\n", "zero").unwrap_err();
        assert!(matches!(err, ReferenceError::InvalidValue { column: "M", .. }));
    }
}
