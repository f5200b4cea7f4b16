use std::path::{Path, PathBuf};

use chrono::Utc;
use nutri_model::{
    Caregiver, Child, ChildId, MAX_AGE_MONTHS, MeasurementRecord, Sex, ValidationError,
};
use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::io::{append_json_line, create_dir, read_json_lines};
use crate::registry::Registry;

pub const REGISTRY_FILE: &str = "registry.json";
pub const MEASUREMENTS_DIR: &str = "measurements";

/// A store directory opened for reading and writing.
#[derive(Debug)]
pub struct Store {
    root: PathBuf,
    registry: Registry,
}

impl Store {
    /// Open (creating if needed) the store rooted at `root`.
    pub fn open(root: &Path) -> Result<Self> {
        create_dir(root)?;
        let registry = Registry::load(&root.join(REGISTRY_FILE))?;
        debug!(
            root = %root.display(),
            children = registry.children.len(),
            "store opened"
        );
        Ok(Self {
            root: root.to_path_buf(),
            registry,
        })
    }

    /// Register a child under `caregiver_name`, creating the caregiver on
    /// first use. The registry is saved before returning.
    pub fn register_child(
        &mut self,
        caregiver_name: &str,
        child_name: &str,
        age_months: u32,
        sex: Sex,
    ) -> Result<Child> {
        if caregiver_name.trim().is_empty() {
            return Err(ValidationError::EmptyName {
                field: "caregiver name",
            }
            .into());
        }
        if child_name.trim().is_empty() {
            return Err(ValidationError::EmptyName {
                field: "child name",
            }
            .into());
        }
        if age_months > MAX_AGE_MONTHS {
            return Err(ValidationError::AgeOutOfRange {
                value: age_months,
                max: MAX_AGE_MONTHS,
            }
            .into());
        }

        let mut updated = self.registry.clone();
        let caregiver_id = updated.ensure_caregiver(caregiver_name);
        let child = updated.add_child(caregiver_id, child_name, age_months, sex, Utc::now());
        updated.save(&self.registry_path())?;
        self.registry = updated;

        info!(child_id = %child.id, caregiver_id = %caregiver_id, "child registered");
        Ok(child)
    }

    pub fn caregiver_of(&self, child: &Child) -> Option<&Caregiver> {
        self.registry.caregiver(child.caregiver_id)
    }

    /// Children in registration order, optionally limited to one caregiver.
    pub fn children(&self, caregiver_name: Option<&str>) -> Vec<&Child> {
        let caregiver_id = match caregiver_name {
            Some(name) => match self.registry.caregiver_by_name(name) {
                Some(caregiver) => Some(caregiver.id),
                None => return Vec::new(),
            },
            None => None,
        };
        self.registry
            .children
            .iter()
            .filter(|child| caregiver_id.is_none_or(|id| child.caregiver_id == id))
            .collect()
    }

    pub fn child(&self, id: ChildId) -> Result<&Child> {
        self.registry
            .child(id)
            .ok_or(StoreError::UnknownChild { id })
    }

    /// Look up a child and check that it belongs to `caregiver_name`.
    pub fn child_for(&self, id: ChildId, caregiver_name: &str) -> Result<&Child> {
        let child = self.child(id)?;
        match self.registry.caregiver_by_name(caregiver_name) {
            Some(caregiver) if caregiver.id == child.caregiver_id => Ok(child),
            _ => Err(StoreError::NotOwned {
                id,
                caregiver: caregiver_name.trim().to_string(),
            }),
        }
    }

    /// Append a record to its child's history.
    pub fn append_measurement(&self, record: &MeasurementRecord) -> Result<()> {
        self.child(record.child_id)?;
        append_json_line(&self.log_path(record.child_id), record)?;
        info!(
            child_id = %record.child_id,
            status = %record.status,
            "measurement recorded"
        );
        Ok(())
    }

    /// A child's history, oldest first. Records sharing a timestamp keep
    /// the order they were appended in.
    pub fn measurements(&self, id: ChildId) -> Result<Vec<MeasurementRecord>> {
        self.child(id)?;
        let mut records: Vec<MeasurementRecord> = read_json_lines(&self.log_path(id))?;
        records.sort_by_key(|record| record.recorded_at);
        Ok(records)
    }

    fn registry_path(&self) -> PathBuf {
        self.root.join(REGISTRY_FILE)
    }

    fn log_path(&self, id: ChildId) -> PathBuf {
        self.root.join(MEASUREMENTS_DIR).join(format!("{id}.jsonl"))
    }
}
