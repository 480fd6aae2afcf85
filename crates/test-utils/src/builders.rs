#![allow(dead_code)]

use chrono::{NaiveTime, Weekday};
use irrisched::alloc::{ControllerDraft, SectionDraft, TimerDraft};
use irrisched::config::{PlanFile, RawPlanFile, SectionConfig, ShiftConfig, SystemConfig, TimerConfig};
use irrisched::schedule::DaySet;
use irrisched::store::Installation;
use irrisched::types::{SectionId, ShiftId, SystemId, TimerId};

use crate::hm;

/// Builder for `TimerDraft`; defaults to Monday 08:00-09:00.
pub struct TimerDraftBuilder {
    draft: TimerDraft,
}

impl TimerDraftBuilder {
    pub fn new(shift_id: ShiftId) -> Self {
        Self {
            draft: TimerDraft {
                id: None,
                shift_id,
                days: DaySet::only(Weekday::Mon),
                start: hm(8, 0),
                stop: hm(9, 0),
            },
        }
    }

    pub fn id(mut self, id: TimerId) -> Self {
        self.draft.id = Some(id);
        self
    }

    /// Replace the day set.
    pub fn days(mut self, days: &[Weekday]) -> Self {
        self.draft.days = days.iter().copied().collect();
        self
    }

    pub fn between(mut self, start: NaiveTime, stop: NaiveTime) -> Self {
        self.draft.start = start;
        self.draft.stop = stop;
        self
    }

    pub fn build(self) -> TimerDraft {
        self.draft
    }
}

/// Builder for `SectionDraft`; defaults to a creation draft without
/// settings.
pub struct SectionDraftBuilder {
    draft: SectionDraft,
}

impl SectionDraftBuilder {
    pub fn new(shift_id: ShiftId, valve: &str) -> Self {
        Self {
            draft: SectionDraft {
                id: None,
                shift_id,
                valve_id: valve.to_string(),
                sensor_mode: None,
                start_threshold: None,
                stop_threshold: None,
            },
        }
    }

    pub fn id(mut self, id: SectionId) -> Self {
        self.draft.id = Some(id);
        self
    }

    pub fn mode(mut self, mode: &str) -> Self {
        self.draft.sensor_mode = Some(mode.to_string());
        self
    }

    pub fn thresholds(mut self, start: f64, stop: f64) -> Self {
        self.draft.start_threshold = Some(start);
        self.draft.stop_threshold = Some(stop);
        self
    }

    /// Valid AVG settings with thresholds 30..60.
    pub fn configured(self) -> Self {
        self.mode("AVG").thresholds(30.0, 60.0)
    }

    pub fn build(self) -> SectionDraft {
        self.draft
    }
}

pub fn controller(section_id: SectionId, sensor: &str) -> ControllerDraft {
    ControllerDraft {
        id: None,
        section_id,
        sensor_id: sensor.to_string(),
    }
}

/// Builder for an `Installation` with systems, devices and shifts.
pub struct InstallationBuilder {
    installation: Installation,
}

impl InstallationBuilder {
    pub fn new() -> Self {
        Self {
            installation: Installation::new(),
        }
    }

    pub fn with_system(mut self, id: SystemId, valves: &[&str], sensors: &[&str]) -> Self {
        self.installation
            .add_system(id, format!("system-{id}"))
            .expect("add system");
        for valve in valves {
            self.installation
                .register_valve(id, *valve)
                .expect("register valve");
        }
        for sensor in sensors {
            self.installation
                .register_sensor(id, *sensor)
                .expect("register sensor");
        }
        self
    }

    pub fn with_shift(mut self, id: ShiftId, system: SystemId) -> Self {
        self.installation.add_shift(id, system).expect("add shift");
        self
    }

    pub fn build(self) -> Installation {
        self.installation
    }
}

impl Default for InstallationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `PlanFile` to simplify replay tests.
pub struct PlanFileBuilder {
    plan: RawPlanFile,
}

impl PlanFileBuilder {
    pub fn new() -> Self {
        Self {
            plan: RawPlanFile::default(),
        }
    }

    pub fn with_system(mut self, id: SystemId, valves: &[&str], sensors: &[&str]) -> Self {
        self.plan.system.push(SystemConfig {
            id,
            name: format!("system-{id}"),
            valves: valves.iter().map(|v| v.to_string()).collect(),
            sensors: sensors.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    pub fn with_shift(mut self, id: ShiftId, system: SystemId) -> Self {
        self.plan.shift.push(ShiftConfig { id, system });
        self
    }

    pub fn with_section(mut self, shift: ShiftId, valve: &str, sensors: &[&str]) -> Self {
        self.plan.section.push(SectionConfig {
            shift,
            valve: valve.to_string(),
            sensor_mode: None,
            start_threshold: None,
            stop_threshold: None,
            sensors: sensors.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    pub fn with_timer(mut self, shift: ShiftId, days: &[&str], start: &str, stop: &str) -> Self {
        self.plan.timer.push(TimerConfig {
            shift,
            days: days.iter().map(|d| d.to_string()).collect(),
            start: start.to_string(),
            stop: stop.to_string(),
        });
        self
    }

    pub fn raw(self) -> RawPlanFile {
        self.plan
    }

    pub fn build(self) -> PlanFile {
        PlanFile::try_from(self.plan).expect("Failed to build valid plan from builder")
    }
}

impl Default for PlanFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
