//! BMI-for-age growth reference backed by WHO LMS tables.
//!
//! The WHO Child Growth Standards publish, for each day of age, the Box-Cox
//! power `L`, median `M` and coefficient of variation `S` of BMI. This crate
//! loads those "expanded" tables and turns them into a
//! [`GrowthReference`](nutri_classify::GrowthReference).
//!
//! No table data is bundled; point [`LmsReference::load_dir`] at a directory
//! holding `bfa_boys_z_exp.txt` and `bfa_girls_z_exp.txt`.

mod error;
mod lms;
mod loader;
mod reference;

pub use error::{ReferenceError, Result};
pub use lms::{LmsRow, LmsTable};
pub use loader::{load_table, parse_table};
pub use reference::{BOYS_FILE, GIRLS_FILE, LmsReference, UnavailableReference};
