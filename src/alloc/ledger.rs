// src/alloc/ledger.rs

//! Read-only views supplied by the storage and device-registry
//! collaborators.
//!
//! Allocators never cache these: every proposal asks again, so whatever
//! consistency the answers have comes from the implementor. An implementor
//! that is shared between writers must serialise "read snapshot, decide,
//! write" per system (see [`crate::store::SharedInstallation`]).

use std::collections::{BTreeMap, BTreeSet};

use crate::alloc::timer::Timer;
use crate::types::{ControllerId, SectionId, SensorId, SystemId, ValveId};

/// Valves currently bound to a live section, mapped to that section.
pub type ValveClaims = BTreeMap<ValveId, SectionId>;

/// Sensors currently in one section's group, mapped to their controller.
pub type SensorClaims = BTreeMap<SensorId, ControllerId>;

/// Committed scheduling state.
pub trait ResourceLedger {
    /// All timers of every shift of `system`.
    fn timers_of(&self, system: SystemId) -> Vec<Timer>;

    /// Valves claimed by sections of any shift of `system`.
    fn claimed_valves(&self, system: SystemId) -> ValveClaims;

    /// Sensors already attached to `section`.
    fn group_sensors(&self, section: SectionId) -> SensorClaims;
}

/// Device inventory of each system.
pub trait DeviceRegistry {
    fn valves_of(&self, system: SystemId) -> BTreeSet<ValveId>;

    fn sensors_of(&self, system: SystemId) -> BTreeSet<SensorId>;
}
