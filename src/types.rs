use std::fmt;
use std::str::FromStr;

/// Identifier of an irrigation installation.
pub type SystemId = u32;
/// Identifier of a shift (schedule container) within a system.
pub type ShiftId = u32;
pub type SectionId = u32;
pub type TimerId = u32;
pub type ControllerId = u32;

/// Valve identifiers come from the device inventory (e.g. `"V-17"`).
pub type ValveId = String;
/// Sensor identifiers come from the device inventory (e.g. `"sensor_17"`).
pub type SensorId = String;

/// How the readings of a section's sensor group are combined before they are
/// compared against the section thresholds.
///
/// - `Avg`: average of all sensors in the group.
/// - `One`: any single sensor crossing a threshold is enough.
/// - `All`: every sensor must cross the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorMode {
    Avg,
    One,
    All,
}

impl SensorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorMode::Avg => "AVG",
            SensorMode::One => "ONE",
            SensorMode::All => "ALL",
        }
    }
}

impl fmt::Display for SensorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SensorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_uppercase().as_str() {
            "AVG" => Ok(SensorMode::Avg),
            "ONE" => Ok(SensorMode::One),
            "ALL" => Ok(SensorMode::All),
            _ => Err(format!(
                "invalid sensor mode: {trimmed:?} (expected \"AVG\", \"ONE\" or \"ALL\")"
            )),
        }
    }
}
