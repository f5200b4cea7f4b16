//! User settings, persisted as TOML.
//!
//! ```toml
//! [store]
//! dir = "/var/lib/nutricare"
//!
//! [reference]
//! dir = "/opt/who/bmi-for-age"
//! # boys_file / girls_file override the file names inside `dir`
//! ```
//!
//! Each location resolves as: command-line flag, then environment variable,
//! then settings file, then the platform default.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use nutri_reference::{BOYS_FILE, GIRLS_FILE};
use serde::{Deserialize, Serialize};

/// Overrides the store directory.
pub const STORE_ENV_VAR: &str = "NUTRICARE_STORE_DIR";
/// Overrides the growth-reference directory.
pub const REFERENCE_ENV_VAR: &str = "NUTRICARE_REFERENCE_DIR";

const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub store: StoreSettings,
    pub reference: ReferenceSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Directory holding the registry and measurement logs.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceSettings {
    /// Directory holding the WHO BMI-for-age tables.
    pub dir: Option<PathBuf>,
    pub boys_file: Option<PathBuf>,
    pub girls_file: Option<PathBuf>,
}

/// Table paths for both sexes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceFiles {
    pub boys: PathBuf,
    pub girls: PathBuf,
}

impl Settings {
    /// Load settings from `explicit` (which must exist), else from the
    /// platform config file when present, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        match Self::config_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read settings: {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parse settings: {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config directory: {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("serialize settings")?;
        fs::write(path, content).with_context(|| format!("write settings: {}", path.display()))
    }

    /// Default settings file location.
    pub fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    pub fn store_dir(&self, flag: Option<&Path>) -> PathBuf {
        self.resolve_store_dir(flag, std::env::var_os(STORE_ENV_VAR))
    }

    pub fn resolve_store_dir(&self, flag: Option<&Path>, env: Option<OsString>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| non_empty(env))
            .or_else(|| self.store.dir.clone())
            .or_else(|| project_dirs().map(|dirs| dirs.data_dir().to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("nutricare-data"))
    }

    /// Table paths, or `None` when no reference is configured anywhere.
    pub fn reference_files(&self, flag: Option<&Path>) -> Option<ReferenceFiles> {
        self.resolve_reference_files(flag, std::env::var_os(REFERENCE_ENV_VAR))
    }

    pub fn resolve_reference_files(
        &self,
        flag: Option<&Path>,
        env: Option<OsString>,
    ) -> Option<ReferenceFiles> {
        let dir = flag
            .map(Path::to_path_buf)
            .or_else(|| non_empty(env))
            .or_else(|| self.reference.dir.clone());
        let boys = self.reference.boys_file.clone();
        let girls = self.reference.girls_file.clone();
        if dir.is_none() && (boys.is_none() || girls.is_none()) {
            return None;
        }
        let dir = dir.unwrap_or_default();
        Some(ReferenceFiles {
            boys: table_path(&dir, boys, BOYS_FILE),
            girls: table_path(&dir, girls, GIRLS_FILE),
        })
    }
}

/// An explicit file is used as-is when absolute, otherwise relative to `dir`.
fn table_path(dir: &Path, file: Option<PathBuf>, default_name: &str) -> PathBuf {
    match file {
        Some(file) if file.is_absolute() => file,
        Some(file) => dir.join(file),
        None => dir.join(default_name),
    }
}

fn non_empty(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "NutriCare", "nutricare")
}
