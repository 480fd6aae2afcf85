// src/alloc/review.rs

//! Feed the pure allocators from a ledger.
//!
//! A [`Reviewer`] holds nothing but a borrow of its source: each call reads
//! the snapshot it needs and hands it to the matching `propose_*` function.

use crate::alloc::ledger::{DeviceRegistry, ResourceLedger};
use crate::alloc::section::{SectionDraft, SectionSettings, propose_section};
use crate::alloc::sensor_group::{ControllerDraft, SensorController, propose_controller};
use crate::alloc::timer::{TimerDraft, propose_timer};
use crate::alloc::verdict::Verdict;
use crate::schedule::TimeWindow;
use crate::types::SystemId;

pub struct Reviewer<'a, S: ?Sized> {
    source: &'a S,
}

impl<'a, S> Reviewer<'a, S>
where
    S: ResourceLedger + DeviceRegistry + ?Sized,
{
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Check a timer against every timer of `system`.
    pub fn timer(&self, system: SystemId, candidate: &TimerDraft) -> Verdict<TimeWindow> {
        let existing = self.source.timers_of(system);
        propose_timer(candidate, &existing)
    }

    /// Check a section's valve claim and settings within `system`.
    pub fn section(
        &self,
        system: SystemId,
        candidate: &SectionDraft,
    ) -> Verdict<Option<SectionSettings>> {
        let valves = self.source.valves_of(system);
        let claims = self.source.claimed_valves(system);
        propose_section(candidate, &valves, &claims)
    }

    /// Check a sensor-group entry; `current` is the controller being updated.
    pub fn controller(
        &self,
        system: SystemId,
        candidate: &ControllerDraft,
        current: Option<&SensorController>,
    ) -> Verdict {
        let sensors = self.source.sensors_of(system);
        let group = self.source.group_sensors(candidate.section_id);
        propose_controller(candidate, current, &sensors, &group)
    }
}
