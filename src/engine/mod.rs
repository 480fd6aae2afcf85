// src/engine/mod.rs

//! Plan replay.
//!
//! A plan file describes an installation as if every section, sensor
//! membership and timer in it were proposed one after another. The replay
//! pushes each of them through the allocators against an in-memory
//! [`Installation`](crate::store::Installation) and records the verdicts in
//! a [`ReplayReport`].

pub mod replay;
pub mod report;

pub use replay::replay;
pub use report::{ProposalKind, ProposalOutcome, ReplayReport};
