// src/alloc/section.rs

//! Section allocator: valve exclusivity plus threshold/mode policy.

use std::collections::BTreeSet;
use std::str::FromStr;

use tracing::debug;

use crate::alloc::ledger::ValveClaims;
use crate::alloc::verdict::{RejectReason, Rejection, Verdict};
use crate::types::{SectionId, SensorMode, ShiftId, ValveId};

/// A section as proposed by a caller.
///
/// Settings arrive unchecked (`sensor_mode` is the raw string the caller
/// received); [`propose_section`] turns them into [`SectionSettings`].
#[derive(Debug, Clone, PartialEq)]
pub struct SectionDraft {
    /// `Some` when this draft updates an existing section.
    pub id: Option<SectionId>,
    pub shift_id: ShiftId,
    pub valve_id: ValveId,
    pub sensor_mode: Option<String>,
    pub start_threshold: Option<f64>,
    pub stop_threshold: Option<f64>,
}

impl SectionDraft {
    pub fn is_update(&self) -> bool {
        self.id.is_some()
    }

    fn has_settings(&self) -> bool {
        self.sensor_mode.is_some() || self.start_threshold.is_some() || self.stop_threshold.is_some()
    }
}

/// Moisture thresholds in percent, `0 <= start < stop <= 100`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    start: f64,
    stop: f64,
}

impl Thresholds {
    pub fn new(start: f64, stop: f64) -> Verdict<Self> {
        // Written so that NaN fails every comparison and is refused.
        let ordered = 0.0 <= start && start < stop && stop <= 100.0;
        if !ordered {
            return Err(Rejection::new(
                RejectReason::InvalidRange,
                format!(
                    "thresholds must satisfy 0 <= start < stop <= 100 (got start={start}, stop={stop})"
                ),
            ));
        }
        Ok(Self { start, stop })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn stop(&self) -> f64 {
        self.stop
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSettings {
    pub sensor_mode: SensorMode,
    pub thresholds: Thresholds,
}

/// A committed section.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: SectionId,
    pub shift_id: ShiftId,
    pub valve_id: ValveId,
    /// `None` until the section has been configured.
    pub settings: Option<SectionSettings>,
}

/// Decide whether `candidate` may be committed.
///
/// Rules, in order:
/// 1. the valve belongs to the system (`UnknownValve`);
/// 2. no other live section holds the valve (`ValveBusy`);
/// 3. thresholds are ordered within `0..=100` (`InvalidRange`);
/// 4. the sensor mode is one of `AVG`/`ONE`/`ALL` (`InvalidMode`).
///
/// Rules 3 and 4 always apply to updates. A creation draft may leave all
/// settings out; if it carries any of them they are checked like an update.
pub fn propose_section(
    candidate: &SectionDraft,
    system_valves: &BTreeSet<ValveId>,
    claimed_valves: &ValveClaims,
) -> Verdict<Option<SectionSettings>> {
    let valve = &candidate.valve_id;

    if !system_valves.contains(valve) {
        debug!(valve = %valve, "section proposal names a valve outside the system");
        return Err(Rejection::new(
            RejectReason::UnknownValve,
            format!("there is no valve '{valve}' in this system"),
        ));
    }

    if let Some(&owner) = claimed_valves.get(valve) {
        if Some(owner) != candidate.id {
            debug!(valve = %valve, owner, "section proposal names a busy valve");
            return Err(Rejection::new(
                RejectReason::ValveBusy,
                format!("valve '{valve}' is already used by section {owner}"),
            ));
        }
    }

    if !candidate.is_update() && !candidate.has_settings() {
        return Ok(None);
    }

    let thresholds = match (candidate.start_threshold, candidate.stop_threshold) {
        (Some(start), Some(stop)) => Thresholds::new(start, stop)?,
        _ => {
            return Err(Rejection::new(
                RejectReason::InvalidRange,
                "both start and stop thresholds are required",
            ));
        }
    };

    let sensor_mode = parse_mode(candidate.sensor_mode.as_deref())?;

    Ok(Some(SectionSettings {
        sensor_mode,
        thresholds,
    }))
}

fn parse_mode(raw: Option<&str>) -> Verdict<SensorMode> {
    let Some(raw) = raw else {
        return Err(Rejection::new(
            RejectReason::InvalidMode,
            "select one of the sensor modes AVG/ONE/ALL",
        ));
    };
    SensorMode::from_str(raw).map_err(|msg| Rejection::new(RejectReason::InvalidMode, msg))
}
