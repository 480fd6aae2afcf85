// src/config/model.rs

use chrono::NaiveTime;
use serde::Deserialize;

use crate::schedule::DaySet;
use crate::types::{ShiftId, SystemId};

/// Plan file exactly as read from TOML.
///
/// ```toml
/// [[system]]
/// id = 1
/// name = "orchard"
/// valves = ["V-1", "V-2"]
/// sensors = ["S-1"]
///
/// [[shift]]
/// id = 10
/// system = 1
///
/// [[section]]
/// shift = 10
/// valve = "V-1"
/// sensors = ["S-1"]
///
/// [[timer]]
/// shift = 10
/// days = ["Mon", "Wed"]
/// start = "08:00"
/// stop = "09:00"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlanFile {
    #[serde(default)]
    pub system: Vec<SystemConfig>,

    #[serde(default)]
    pub shift: Vec<ShiftConfig>,

    #[serde(default)]
    pub section: Vec<SectionConfig>,

    #[serde(default)]
    pub timer: Vec<TimerConfig>,
}

/// `[[system]]` entry: an installation and its device inventory.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    pub id: SystemId,
    pub name: String,

    #[serde(default)]
    pub valves: Vec<String>,

    #[serde(default)]
    pub sensors: Vec<String>,
}

/// `[[shift]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftConfig {
    pub id: ShiftId,
    pub system: SystemId,
}

/// `[[section]]` entry.
///
/// Settings are optional; when any of them is given, all three are checked
/// by the section allocator during replay.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionConfig {
    pub shift: ShiftId,
    pub valve: String,

    #[serde(default)]
    pub sensor_mode: Option<String>,

    #[serde(default)]
    pub start_threshold: Option<f64>,

    #[serde(default)]
    pub stop_threshold: Option<f64>,

    /// Sensors proposed for the section's group, in order.
    #[serde(default)]
    pub sensors: Vec<String>,
}

/// `[[timer]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TimerConfig {
    pub shift: ShiftId,

    #[serde(default)]
    pub days: Vec<String>,

    /// `HH:MM` or `HH:MM:SS`.
    pub start: String,
    pub stop: String,
}

/// Timer entry with parsed days and clock times.
///
/// An empty day set or `start >= stop` is still representable here; those
/// are scheduling verdicts, not plan-file errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerPlan {
    pub shift: ShiftId,
    pub days: DaySet,
    pub start: NaiveTime,
    pub stop: NaiveTime,
}

/// A structurally valid plan, produced by `PlanFile::try_from(RawPlanFile)`.
#[derive(Debug, Clone)]
pub struct PlanFile {
    pub systems: Vec<SystemConfig>,
    pub shifts: Vec<ShiftConfig>,
    pub sections: Vec<SectionConfig>,
    pub timers: Vec<TimerPlan>,
}
