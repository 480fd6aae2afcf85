// src/store/mod.rs

//! In-memory storage collaborator.
//!
//! [`Installation`] keeps the ownership tree (system → shifts → sections /
//! timers, section → sensor controllers) together with each system's device
//! inventory. It implements the read views the allocators consume and
//! commits a candidate only after the matching allocator accepted it.
//!
//! [`SharedInstallation`] puts an `Installation` behind a mutex so that the
//! read-snapshot-then-write sequence of one proposal cannot interleave with
//! another.

pub mod installation;
pub mod shared;

pub use installation::{Installation, Removed, Shift, SystemRecord};
pub use shared::SharedInstallation;
