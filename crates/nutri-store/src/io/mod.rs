//! File operations: atomic replace and append-only JSON lines.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Result, StoreError};

/// Replace `path` with `bytes`.
///
/// Writes a sibling temp file, syncs it, then renames it over the target so
/// readers never see a half-written file.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let temp_path = path.with_extension("json.tmp");

    if let Some(parent) = path.parent() {
        create_dir(parent)?;
    }

    let mut file = File::create(&temp_path).map_err(|e| StoreError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(bytes).map_err(|e| StoreError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;

    file.sync_all().map_err(|e| StoreError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| StoreError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })
}

/// Append `value` as one JSON line, creating the file on first use.
pub(crate) fn append_json_line<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut line =
        serde_json::to_string(value).map_err(|e| StoreError::Serialization { source: e })?;
    line.push('\n');

    if let Some(parent) = path.parent() {
        create_dir(parent)?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| StoreError::Io {
            operation: "open",
            path: path.to_path_buf(),
            source: e,
        })?;

    file.write_all(line.as_bytes()).map_err(|e| StoreError::Io {
        operation: "append to",
        path: path.to_path_buf(),
        source: e,
    })?;

    file.sync_data().map_err(|e| StoreError::Io {
        operation: "sync",
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read every JSON line of `path`. A missing file reads as empty; blank
/// lines are skipped.
pub(crate) fn read_json_lines<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(StoreError::Io {
                operation: "read",
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let mut values = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| StoreError::Io {
            operation: "read",
            path: path.to_path_buf(),
            source: e,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let value = serde_json::from_str(&line).map_err(|e| StoreError::CorruptRecord {
            path: path.to_path_buf(),
            line: index + 1,
            source: e,
        })?;
        values.push(value);
    }
    Ok(values)
}

pub(crate) fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| StoreError::Io {
        operation: "create directory",
        path: path.to_path_buf(),
        source: e,
    })
}
