//! The caregiver/child registry.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use nutri_model::{Caregiver, CaregiverId, Child, ChildId, Sex};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};
use crate::io::write_atomic;

/// Registry format version written by this build.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Everyone known to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    pub schema_version: u32,
    pub caregivers: Vec<Caregiver>,
    pub children: Vec<Child>,
    next_caregiver_id: u64,
    next_child_id: u64,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            caregivers: Vec::new(),
            children: Vec::new(),
            next_caregiver_id: 1,
            next_child_id: 1,
        }
    }
}

impl Registry {
    /// Load from `path`; a missing file is an empty registry.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(StoreError::Io {
                    operation: "read",
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };
        let registry: Registry =
            serde_json::from_str(&contents).map_err(|e| StoreError::InvalidFormat {
                path: path.to_path_buf(),
                source: e,
            })?;
        if registry.schema_version > CURRENT_SCHEMA_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: registry.schema_version,
                max_supported: CURRENT_SCHEMA_VERSION,
                path: path.to_path_buf(),
            });
        }
        Ok(registry)
    }

    pub(crate) fn save(&self, path: &Path) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(self)
            .map_err(|e| StoreError::Serialization { source: e })?;
        write_atomic(path, &bytes)
    }

    /// Caregiver whose trimmed name matches exactly.
    pub fn caregiver_by_name(&self, name: &str) -> Option<&Caregiver> {
        let name = name.trim();
        self.caregivers.iter().find(|caregiver| caregiver.name == name)
    }

    pub fn caregiver(&self, id: CaregiverId) -> Option<&Caregiver> {
        self.caregivers.iter().find(|caregiver| caregiver.id == id)
    }

    pub fn child(&self, id: ChildId) -> Option<&Child> {
        self.children.iter().find(|child| child.id == id)
    }

    pub(crate) fn ensure_caregiver(&mut self, name: &str) -> CaregiverId {
        if let Some(existing) = self.caregiver_by_name(name) {
            return existing.id;
        }
        let id = CaregiverId::new(self.next_caregiver_id);
        self.next_caregiver_id += 1;
        self.caregivers.push(Caregiver {
            id,
            name: name.trim().to_string(),
        });
        id
    }

    pub(crate) fn add_child(
        &mut self,
        caregiver_id: CaregiverId,
        name: &str,
        age_months: u32,
        sex: Sex,
        registered_at: DateTime<Utc>,
    ) -> Child {
        let child = Child {
            id: ChildId::new(self.next_child_id),
            caregiver_id,
            name: name.trim().to_string(),
            age_months,
            sex,
            registered_at,
        };
        self.next_child_id += 1;
        self.children.push(child.clone());
        child
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_caregiver_reused_by_trimmed_name() {
        let mut registry = Registry::default();
        let first = registry.ensure_caregiver("Amina");
        let again = registry.ensure_caregiver("  Amina ");
        let other = registry.ensure_caregiver("Joseph");
        assert_eq!(first, again);
        assert_ne!(first, other);
        assert_eq!(registry.caregivers.len(), 2);
    }

    #[test]
    fn test_load_unsupported_version() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("registry.json");
        let mut registry = Registry::default();
        registry.schema_version = 999;
        registry.save(&path).unwrap();

        assert!(matches!(
            Registry::load(&path),
            Err(StoreError::UnsupportedVersion { found: 999, .. })
        ));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("registry.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            Registry::load(&path),
            Err(StoreError::InvalidFormat { .. })
        ));
    }
}
