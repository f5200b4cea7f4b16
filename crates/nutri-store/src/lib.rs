//! Persistent storage for NutriCare.
//!
//! # Layout
//!
//! ```text
//! <root>/
//! ├── registry.json            caregivers and children (rewritten atomically)
//! └── measurements/
//!     ├── 1.jsonl              one MeasurementRecord per line, append-only
//!     └── 2.jsonl
//! ```
//!
//! # Example
//!
//! ```ignore
//! use nutri_store::Store;
//!
//! let mut store = Store::open(Path::new("data"))?;
//! let child = store.register_child("Amina", "Baraka", 14, Sex::Male)?;
//! store.append_measurement(&record)?;
//! let history = store.measurements(child.id)?;
//! ```

mod error;
mod io;
mod registry;
mod store;

pub use error::{Result, StoreError};
pub use registry::{CURRENT_SCHEMA_VERSION, Registry};
pub use store::{MEASUREMENTS_DIR, REGISTRY_FILE, Store};
