// src/alloc/verdict.rs

use std::fmt;

use thiserror::Error;

/// Why a proposal was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// Malformed numeric or day input: threshold ordering, empty day set,
    /// start not before stop.
    InvalidRange,
    /// Sensor aggregation mode outside `AVG`/`ONE`/`ALL`.
    InvalidMode,
    /// The valve is already bound to another live section.
    ValveBusy,
    /// The sensor is already part of the section's group.
    DuplicateSensor,
    /// The timer could fire together with an existing timer.
    Conflict,
    /// The valve does not belong to the section's system.
    UnknownValve,
    /// The sensor does not belong to the section's system.
    UnknownSensor,
    /// A controller cannot move to a different section.
    SectionMismatch,
}

impl RejectReason {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            RejectReason::InvalidRange => "invalid_range",
            RejectReason::InvalidMode => "invalid_mode",
            RejectReason::ValveBusy => "valve_busy",
            RejectReason::DuplicateSensor => "duplicate_sensor",
            RejectReason::Conflict => "conflict",
            RejectReason::UnknownValve => "unknown_valve",
            RejectReason::UnknownSensor => "unknown_sensor",
            RejectReason::SectionMismatch => "section_mismatch",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A refused proposal: reason code plus a message meant for the end user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("[{reason}] {message}")]
pub struct Rejection {
    reason: RejectReason,
    message: String,
}

impl Rejection {
    pub fn new(reason: RejectReason, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
        }
    }

    pub fn reason(&self) -> RejectReason {
        self.reason
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Outcome of a proposal. `Ok` carries whatever the allocator normalised
/// while checking the candidate.
pub type Verdict<T = ()> = Result<T, Rejection>;
