// src/alloc/sensor_group.rs

//! Sensor-group allocator: membership of sensors in a section's decision
//! group.

use std::collections::BTreeSet;

use tracing::debug;

use crate::alloc::ledger::SensorClaims;
use crate::alloc::verdict::{RejectReason, Rejection, Verdict};
use crate::types::{ControllerId, SectionId, SensorId};

/// A sensor-controller entry as proposed by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerDraft {
    /// `Some` when this draft updates an existing controller.
    pub id: Option<ControllerId>,
    pub section_id: SectionId,
    pub sensor_id: SensorId,
}

/// A committed sensor-controller entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorController {
    pub id: ControllerId,
    pub section_id: SectionId,
    pub sensor_id: SensorId,
}

/// Decide whether `candidate` may join the group of its section.
///
/// `current` is the committed controller being updated (`None` on creation),
/// `group_sensors` the sensors already attached to `candidate.section_id`.
///
/// Rules, in order: `UnknownSensor`, `DuplicateSensor`, `SectionMismatch`.
pub fn propose_controller(
    candidate: &ControllerDraft,
    current: Option<&SensorController>,
    system_sensors: &BTreeSet<SensorId>,
    group_sensors: &SensorClaims,
) -> Verdict {
    let sensor = &candidate.sensor_id;

    if !system_sensors.contains(sensor) {
        debug!(sensor = %sensor, "controller proposal names a sensor outside the system");
        return Err(Rejection::new(
            RejectReason::UnknownSensor,
            format!("there is no sensor '{sensor}' in this system"),
        ));
    }

    if let Some(&owner) = group_sensors.get(sensor) {
        if Some(owner) != candidate.id {
            debug!(
                sensor = %sensor,
                section = candidate.section_id,
                "sensor already attached to this section"
            );
            return Err(Rejection::new(
                RejectReason::DuplicateSensor,
                format!(
                    "sensor '{sensor}' is already in the group of section {}",
                    candidate.section_id
                ),
            ));
        }
    }

    if let Some(existing) = current {
        if existing.section_id != candidate.section_id {
            return Err(Rejection::new(
                RejectReason::SectionMismatch,
                format!(
                    "controller {} belongs to section {} and cannot move to section {}",
                    existing.id, existing.section_id, candidate.section_id
                ),
            ));
        }
    }

    Ok(())
}
