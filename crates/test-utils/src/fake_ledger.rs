use std::cell::Cell;
use std::collections::{BTreeMap, BTreeSet};

use irrisched::alloc::{DeviceRegistry, ResourceLedger, SensorClaims, Timer, ValveClaims};
use irrisched::types::{SectionId, SensorId, SystemId, ValveId};

/// A hand-filled ledger that counts how often each view is read.
#[derive(Debug, Default)]
pub struct FakeLedger {
    pub timers: BTreeMap<SystemId, Vec<Timer>>,
    pub claims: BTreeMap<SystemId, ValveClaims>,
    pub groups: BTreeMap<SectionId, SensorClaims>,
    pub valves: BTreeMap<SystemId, BTreeSet<ValveId>>,
    pub sensors: BTreeMap<SystemId, BTreeSet<SensorId>>,
    reads: Cell<usize>,
}

impl FakeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of view reads so far.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    fn touch(&self) {
        self.reads.set(self.reads.get() + 1);
    }
}

impl ResourceLedger for FakeLedger {
    fn timers_of(&self, system: SystemId) -> Vec<Timer> {
        self.touch();
        self.timers.get(&system).cloned().unwrap_or_default()
    }

    fn claimed_valves(&self, system: SystemId) -> ValveClaims {
        self.touch();
        self.claims.get(&system).cloned().unwrap_or_default()
    }

    fn group_sensors(&self, section: SectionId) -> SensorClaims {
        self.touch();
        self.groups.get(&section).cloned().unwrap_or_default()
    }
}

impl DeviceRegistry for FakeLedger {
    fn valves_of(&self, system: SystemId) -> BTreeSet<ValveId> {
        self.touch();
        self.valves.get(&system).cloned().unwrap_or_default()
    }

    fn sensors_of(&self, system: SystemId) -> BTreeSet<SensorId> {
        self.touch();
        self.sensors.get(&system).cloned().unwrap_or_default()
    }
}
