// src/config/mod.rs

//! Plan files for irrisched.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a plan file from disk (`loader.rs`).
//! - Validate structural invariants like known references (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{
    PlanFile, RawPlanFile, SectionConfig, ShiftConfig, SystemConfig, TimerConfig, TimerPlan,
};
pub use validate::MAX_DEVICE_ID_LEN;
