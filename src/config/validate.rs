// src/config/validate.rs

use std::collections::BTreeSet;

use crate::config::model::{PlanFile, RawPlanFile, TimerConfig, TimerPlan};
use crate::errors::{IrrischedError, Result};
use crate::schedule::{DaySet, parse_clock, parse_weekday};
use crate::types::{ShiftId, SystemId};

/// Longest accepted valve or sensor id.
pub const MAX_DEVICE_ID_LEN: usize = 25;

impl TryFrom<RawPlanFile> for PlanFile {
    type Error = crate::errors::IrrischedError;

    fn try_from(raw: RawPlanFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_plan(&raw)?;
        let timers = raw
            .timer
            .iter()
            .enumerate()
            .map(|(index, timer)| parse_timer(index, timer))
            .collect::<Result<Vec<_>>>()?;

        Ok(PlanFile {
            systems: raw.system,
            shifts: raw.shift,
            sections: raw.section,
            timers,
        })
    }
}

fn validate_raw_plan(plan: &RawPlanFile) -> Result<()> {
    ensure_has_systems(plan)?;
    let systems = validate_systems(plan)?;
    validate_devices(plan)?;
    let shifts = validate_shifts(plan, &systems)?;
    validate_shift_references(plan, &shifts)?;
    Ok(())
}

fn ensure_has_systems(plan: &RawPlanFile) -> Result<()> {
    if plan.system.is_empty() {
        return Err(IrrischedError::ConfigError(
            "plan must contain at least one [[system]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_systems(plan: &RawPlanFile) -> Result<BTreeSet<SystemId>> {
    let mut seen = BTreeSet::new();
    for system in plan.system.iter() {
        if !seen.insert(system.id) {
            return Err(IrrischedError::ConfigError(format!(
                "system id {} is declared more than once",
                system.id
            )));
        }
        if system.name.trim().is_empty() {
            return Err(IrrischedError::ConfigError(format!(
                "system {} must have a non-empty name",
                system.id
            )));
        }
    }
    Ok(seen)
}

fn validate_devices(plan: &RawPlanFile) -> Result<()> {
    let mut valves = BTreeSet::new();
    let mut sensors = BTreeSet::new();

    for system in plan.system.iter() {
        for valve in system.valves.iter() {
            check_device_id("valve", valve, system.id)?;
            if !valves.insert(valve.as_str()) {
                return Err(IrrischedError::ConfigError(format!(
                    "valve '{}' is listed more than once",
                    valve
                )));
            }
        }
        for sensor in system.sensors.iter() {
            check_device_id("sensor", sensor, system.id)?;
            if !sensors.insert(sensor.as_str()) {
                return Err(IrrischedError::ConfigError(format!(
                    "sensor '{}' is listed more than once",
                    sensor
                )));
            }
        }
    }
    Ok(())
}

fn check_device_id(kind: &str, id: &str, system: SystemId) -> Result<()> {
    if id.trim().is_empty() {
        return Err(IrrischedError::ConfigError(format!(
            "system {} has an empty {} id",
            system, kind
        )));
    }
    if id.chars().count() > MAX_DEVICE_ID_LEN {
        return Err(IrrischedError::ConfigError(format!(
            "{} id '{}' is longer than {} characters",
            kind, id, MAX_DEVICE_ID_LEN
        )));
    }
    Ok(())
}

fn validate_shifts(plan: &RawPlanFile, systems: &BTreeSet<SystemId>) -> Result<BTreeSet<ShiftId>> {
    let mut seen = BTreeSet::new();
    for shift in plan.shift.iter() {
        if !seen.insert(shift.id) {
            return Err(IrrischedError::ConfigError(format!(
                "shift id {} is declared more than once",
                shift.id
            )));
        }
        if !systems.contains(&shift.system) {
            return Err(IrrischedError::ConfigError(format!(
                "shift {} references unknown system {}",
                shift.id, shift.system
            )));
        }
    }
    Ok(seen)
}

fn validate_shift_references(plan: &RawPlanFile, shifts: &BTreeSet<ShiftId>) -> Result<()> {
    for (index, section) in plan.section.iter().enumerate() {
        if !shifts.contains(&section.shift) {
            return Err(IrrischedError::ConfigError(format!(
                "section #{} (valve '{}') references unknown shift {}",
                index, section.valve, section.shift
            )));
        }
    }
    for (index, timer) in plan.timer.iter().enumerate() {
        if !shifts.contains(&timer.shift) {
            return Err(IrrischedError::ConfigError(format!(
                "timer #{} references unknown shift {}",
                index, timer.shift
            )));
        }
    }
    Ok(())
}

fn parse_timer(index: usize, timer: &TimerConfig) -> Result<TimerPlan> {
    let mut days = DaySet::new();
    for name in timer.days.iter() {
        let day = parse_weekday(name).ok_or_else(|| {
            IrrischedError::ConfigError(format!("timer #{}: unknown weekday '{}'", index, name))
        })?;
        days.insert(day);
    }

    let start = parse_clock(&timer.start).ok_or_else(|| {
        IrrischedError::ConfigError(format!(
            "timer #{}: start '{}' is not a HH:MM clock time",
            index, timer.start
        ))
    })?;
    let stop = parse_clock(&timer.stop).ok_or_else(|| {
        IrrischedError::ConfigError(format!(
            "timer #{}: stop '{}' is not a HH:MM clock time",
            index, timer.stop
        ))
    })?;

    Ok(TimerPlan {
        shift: timer.shift,
        days,
        start,
        stop,
    })
}
