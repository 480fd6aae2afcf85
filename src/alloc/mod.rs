// src/alloc/mod.rs

//! Exclusive-resource allocation.
//!
//! Every allocator here is a pure decision function: it takes a candidate
//! plus a snapshot of already committed siblings and returns a [`Verdict`].
//! Nothing in this module performs IO or keeps state between calls; the
//! storage layer (see [`crate::store`]) is responsible for handing over a
//! fresh snapshot and for committing accepted candidates.
//!
//! - [`timer`]: weekly timers must not overlap within one system.
//! - [`section`]: a valve drives at most one section, thresholds and sensor
//!   mode must be sane.
//! - [`sensor_group`]: a sensor appears at most once in a section's group and
//!   must belong to the section's system.
//! - [`ledger`]: read-only views the allocators are fed from.
//! - [`review`]: glue that re-reads the ledger for every proposal.

pub mod ledger;
pub mod review;
pub mod section;
pub mod sensor_group;
pub mod timer;
pub mod verdict;

pub use ledger::{DeviceRegistry, ResourceLedger, SensorClaims, ValveClaims};
pub use review::Reviewer;
pub use section::{Section, SectionDraft, SectionSettings, Thresholds, propose_section};
pub use sensor_group::{ControllerDraft, SensorController, propose_controller};
pub use timer::{Timer, TimerDraft, propose_timer};
pub use verdict::{RejectReason, Rejection, Verdict};
