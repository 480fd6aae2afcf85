// src/store/installation.rs

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info};

use crate::alloc::{
    ControllerDraft, DeviceRegistry, ResourceLedger, Reviewer, Section, SectionDraft,
    SensorClaims, SensorController, Timer, TimerDraft, ValveClaims,
};
use crate::errors::{IrrischedError, Result};
use crate::types::{ControllerId, SectionId, SensorId, ShiftId, SystemId, TimerId, ValveId};

/// A system together with its device inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemRecord {
    pub id: SystemId,
    pub name: String,
    pub valves: BTreeSet<ValveId>,
    pub sensors: BTreeSet<SensorId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    pub id: ShiftId,
    pub system_id: SystemId,
}

/// Number of entities removed by a (cascading) delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Removed {
    pub shifts: usize,
    pub sections: usize,
    pub timers: usize,
    pub controllers: usize,
}

impl Removed {
    fn absorb(&mut self, other: Removed) {
        self.shifts += other.shifts;
        self.sections += other.sections;
        self.timers += other.timers;
        self.controllers += other.controllers;
    }
}

#[derive(Debug, Clone, Default)]
struct IdSequence {
    section: SectionId,
    timer: TimerId,
    controller: ControllerId,
}

fn next_id(counter: &mut u32) -> u32 {
    *counter += 1;
    *counter
}

#[derive(Debug, Clone, Default)]
pub struct Installation {
    systems: BTreeMap<SystemId, SystemRecord>,
    shifts: BTreeMap<ShiftId, Shift>,
    sections: BTreeMap<SectionId, Section>,
    timers: BTreeMap<TimerId, Timer>,
    controllers: BTreeMap<ControllerId, SensorController>,
    ids: IdSequence,
}

impl Installation {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- inventory -------------------------------------------------------

    pub fn add_system(&mut self, id: SystemId, name: impl Into<String>) -> Result<()> {
        if self.systems.contains_key(&id) {
            return Err(IrrischedError::AlreadyExists(format!("system {id}")));
        }
        let name = name.into();
        info!(system = id, name = %name, "system added");
        self.systems.insert(
            id,
            SystemRecord {
                id,
                name,
                valves: BTreeSet::new(),
                sensors: BTreeSet::new(),
            },
        );
        Ok(())
    }

    /// Add a valve to a system's inventory. Valve ids are unique across all
    /// systems.
    pub fn register_valve(&mut self, system: SystemId, valve: impl Into<ValveId>) -> Result<()> {
        let valve = valve.into();
        if self.systems.values().any(|s| s.valves.contains(&valve)) {
            return Err(IrrischedError::AlreadyExists(format!("valve '{valve}'")));
        }
        let record = self.system_mut(system)?;
        debug!(system, valve = %valve, "valve registered");
        record.valves.insert(valve);
        Ok(())
    }

    /// Add a sensor to a system's inventory. Sensor ids are unique across all
    /// systems.
    pub fn register_sensor(&mut self, system: SystemId, sensor: impl Into<SensorId>) -> Result<()> {
        let sensor = sensor.into();
        if self.systems.values().any(|s| s.sensors.contains(&sensor)) {
            return Err(IrrischedError::AlreadyExists(format!("sensor '{sensor}'")));
        }
        let record = self.system_mut(system)?;
        debug!(system, sensor = %sensor, "sensor registered");
        record.sensors.insert(sensor);
        Ok(())
    }

    pub fn add_shift(&mut self, id: ShiftId, system: SystemId) -> Result<()> {
        if self.shifts.contains_key(&id) {
            return Err(IrrischedError::AlreadyExists(format!("shift {id}")));
        }
        self.system_mut(system)?;
        info!(shift = id, system, "shift added");
        self.shifts.insert(
            id,
            Shift {
                id,
                system_id: system,
            },
        );
        Ok(())
    }

    // ---- lookups ---------------------------------------------------------

    pub fn system(&self, id: SystemId) -> Option<&SystemRecord> {
        self.systems.get(&id)
    }

    pub fn shift(&self, id: ShiftId) -> Option<&Shift> {
        self.shifts.get(&id)
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.get(&id)
    }

    pub fn timer(&self, id: TimerId) -> Option<&Timer> {
        self.timers.get(&id)
    }

    pub fn controller(&self, id: ControllerId) -> Option<&SensorController> {
        self.controllers.get(&id)
    }

    pub fn sections_of_shift(&self, shift: ShiftId) -> impl Iterator<Item = &Section> {
        self.sections.values().filter(move |s| s.shift_id == shift)
    }

    pub fn timers_of_shift(&self, shift: ShiftId) -> impl Iterator<Item = &Timer> {
        self.timers.values().filter(move |t| t.shift_id == shift)
    }

    pub fn controllers_of_section(
        &self,
        section: SectionId,
    ) -> impl Iterator<Item = &SensorController> {
        self.controllers
            .values()
            .filter(move |c| c.section_id == section)
    }

    /// System owning `shift`.
    pub fn system_of_shift(&self, shift: ShiftId) -> Result<SystemId> {
        self.shifts
            .get(&shift)
            .map(|s| s.system_id)
            .ok_or_else(|| IrrischedError::NotFound(format!("shift {shift}")))
    }

    /// System owning the shift that owns `section`.
    pub fn system_of_section(&self, section: SectionId) -> Result<SystemId> {
        let shift = self
            .sections
            .get(&section)
            .map(|s| s.shift_id)
            .ok_or_else(|| IrrischedError::NotFound(format!("section {section}")))?;
        self.system_of_shift(shift)
    }

    fn system_mut(&mut self, id: SystemId) -> Result<&mut SystemRecord> {
        self.systems
            .get_mut(&id)
            .ok_or_else(|| IrrischedError::NotFound(format!("system {id}")))
    }

    fn shift_ids_of(&self, system: SystemId) -> BTreeSet<ShiftId> {
        self.shifts
            .values()
            .filter(|s| s.system_id == system)
            .map(|s| s.id)
            .collect()
    }

    // ---- sections --------------------------------------------------------

    /// Create a section after the section allocator accepted it.
    pub fn create_section(&mut self, mut draft: SectionDraft) -> Result<SectionId> {
        draft.id = None;
        let system = self.system_of_shift(draft.shift_id)?;
        let settings = Reviewer::new(&*self).section(system, &draft)?;

        let id = next_id(&mut self.ids.section);
        info!(section = id, shift = draft.shift_id, valve = %draft.valve_id, "section created");
        self.sections.insert(
            id,
            Section {
                id,
                shift_id: draft.shift_id,
                valve_id: draft.valve_id,
                settings,
            },
        );
        Ok(id)
    }

    /// Replace the valve and settings of an existing section. The section
    /// stays in its shift.
    pub fn update_section(&mut self, id: SectionId, mut draft: SectionDraft) -> Result<()> {
        let shift_id = self
            .sections
            .get(&id)
            .map(|s| s.shift_id)
            .ok_or_else(|| IrrischedError::NotFound(format!("section {id}")))?;
        draft.id = Some(id);
        draft.shift_id = shift_id;

        let system = self.system_of_shift(shift_id)?;
        let settings = Reviewer::new(&*self).section(system, &draft)?;

        if let Some(section) = self.sections.get_mut(&id) {
            section.valve_id = draft.valve_id;
            section.settings = settings;
            info!(section = id, valve = %section.valve_id, "section updated");
        }
        Ok(())
    }

    /// Delete a section and every sensor controller of its group.
    pub fn delete_section(&mut self, id: SectionId) -> Result<Removed> {
        if self.sections.remove(&id).is_none() {
            return Err(IrrischedError::NotFound(format!("section {id}")));
        }
        let before = self.controllers.len();
        self.controllers.retain(|_, c| c.section_id != id);
        let removed = Removed {
            sections: 1,
            controllers: before - self.controllers.len(),
            ..Removed::default()
        };
        info!(section = id, controllers = removed.controllers, "section deleted");
        Ok(removed)
    }

    // ---- sensor controllers ---------------------------------------------

    pub fn create_controller(&mut self, mut draft: ControllerDraft) -> Result<ControllerId> {
        draft.id = None;
        let system = self.system_of_section(draft.section_id)?;
        Reviewer::new(&*self).controller(system, &draft, None)?;

        let id = next_id(&mut self.ids.controller);
        info!(
            controller = id,
            section = draft.section_id,
            sensor = %draft.sensor_id,
            "sensor added to group"
        );
        self.controllers.insert(
            id,
            SensorController {
                id,
                section_id: draft.section_id,
                sensor_id: draft.sensor_id,
            },
        );
        Ok(id)
    }

    pub fn update_controller(&mut self, id: ControllerId, mut draft: ControllerDraft) -> Result<()> {
        let current = self
            .controllers
            .get(&id)
            .cloned()
            .ok_or_else(|| IrrischedError::NotFound(format!("sensor controller {id}")))?;
        draft.id = Some(id);

        // The committed section decides the system; the target may not exist.
        let system = self.system_of_section(current.section_id)?;
        Reviewer::new(&*self).controller(system, &draft, Some(&current))?;

        if let Some(controller) = self.controllers.get_mut(&id) {
            controller.sensor_id = draft.sensor_id;
            info!(controller = id, sensor = %controller.sensor_id, "sensor controller updated");
        }
        Ok(())
    }

    pub fn delete_controller(&mut self, id: ControllerId) -> Result<SensorController> {
        let removed = self
            .controllers
            .remove(&id)
            .ok_or_else(|| IrrischedError::NotFound(format!("sensor controller {id}")))?;
        info!(controller = id, section = removed.section_id, "sensor controller deleted");
        Ok(removed)
    }

    // ---- timers ----------------------------------------------------------

    pub fn create_timer(&mut self, mut draft: TimerDraft) -> Result<TimerId> {
        draft.id = None;
        let system = self.system_of_shift(draft.shift_id)?;
        let window = Reviewer::new(&*self).timer(system, &draft)?;

        let id = next_id(&mut self.ids.timer);
        info!(timer = id, shift = draft.shift_id, window = %window, "timer created");
        self.timers.insert(
            id,
            Timer {
                id,
                shift_id: draft.shift_id,
                window,
            },
        );
        Ok(id)
    }

    /// Replace the window of an existing timer. The timer stays in its shift
    /// and is not compared against its own previous window.
    pub fn update_timer(&mut self, id: TimerId, mut draft: TimerDraft) -> Result<()> {
        let shift_id = self
            .timers
            .get(&id)
            .map(|t| t.shift_id)
            .ok_or_else(|| IrrischedError::NotFound(format!("timer {id}")))?;
        draft.id = Some(id);
        draft.shift_id = shift_id;

        let system = self.system_of_shift(shift_id)?;
        let window = Reviewer::new(&*self).timer(system, &draft)?;

        if let Some(timer) = self.timers.get_mut(&id) {
            timer.window = window;
            info!(timer = id, window = %window, "timer updated");
        }
        Ok(())
    }

    pub fn delete_timer(&mut self, id: TimerId) -> Result<Timer> {
        let removed = self
            .timers
            .remove(&id)
            .ok_or_else(|| IrrischedError::NotFound(format!("timer {id}")))?;
        info!(timer = id, shift = removed.shift_id, "timer deleted");
        Ok(removed)
    }

    // ---- cascades --------------------------------------------------------

    /// Delete a shift together with its sections (and their groups) and
    /// timers.
    pub fn delete_shift(&mut self, id: ShiftId) -> Result<Removed> {
        if self.shifts.remove(&id).is_none() {
            return Err(IrrischedError::NotFound(format!("shift {id}")));
        }

        let mut removed = Removed {
            shifts: 1,
            ..Removed::default()
        };

        let section_ids: Vec<SectionId> = self.sections_of_shift(id).map(|s| s.id).collect();
        for section in section_ids {
            removed.absorb(self.delete_section(section)?);
        }

        let before = self.timers.len();
        self.timers.retain(|_, t| t.shift_id != id);
        removed.timers = before - self.timers.len();

        info!(
            shift = id,
            sections = removed.sections,
            timers = removed.timers,
            "shift deleted"
        );
        Ok(removed)
    }

    /// Delete a system, its device inventory and everything its shifts own.
    pub fn delete_system(&mut self, id: SystemId) -> Result<Removed> {
        if !self.systems.contains_key(&id) {
            return Err(IrrischedError::NotFound(format!("system {id}")));
        }

        let mut removed = Removed::default();
        for shift in self.shift_ids_of(id) {
            removed.absorb(self.delete_shift(shift)?);
        }
        self.systems.remove(&id);

        info!(system = id, shifts = removed.shifts, "system deleted");
        Ok(removed)
    }
}

impl ResourceLedger for Installation {
    fn timers_of(&self, system: SystemId) -> Vec<Timer> {
        let shifts = self.shift_ids_of(system);
        self.timers
            .values()
            .filter(|t| shifts.contains(&t.shift_id))
            .cloned()
            .collect()
    }

    fn claimed_valves(&self, system: SystemId) -> ValveClaims {
        let shifts = self.shift_ids_of(system);
        self.sections
            .values()
            .filter(|s| shifts.contains(&s.shift_id))
            .map(|s| (s.valve_id.clone(), s.id))
            .collect()
    }

    fn group_sensors(&self, section: SectionId) -> SensorClaims {
        self.controllers_of_section(section)
            .map(|c| (c.sensor_id.clone(), c.id))
            .collect()
    }
}

impl DeviceRegistry for Installation {
    fn valves_of(&self, system: SystemId) -> BTreeSet<ValveId> {
        self.systems
            .get(&system)
            .map(|s| s.valves.clone())
            .unwrap_or_default()
    }

    fn sensors_of(&self, system: SystemId) -> BTreeSet<SensorId> {
        self.systems
            .get(&system)
            .map(|s| s.sensors.clone())
            .unwrap_or_default()
    }
}
