//! CLI library components for NutriCare.

pub mod config;
pub mod logging;
pub mod service;
