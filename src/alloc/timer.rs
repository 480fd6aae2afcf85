// src/alloc/timer.rs

//! Timer allocator.
//!
//! Timers of *every* shift of a system contend with each other: shifts of
//! one system share the same pumps and valves, so a candidate is checked
//! against the full system-wide timer list, not just its own shift.

use chrono::NaiveTime;
use tracing::debug;

use crate::alloc::verdict::{RejectReason, Rejection, Verdict};
use crate::schedule::{DaySet, TimeWindow};
use crate::types::{ShiftId, TimerId};

/// A timer as proposed by a caller (creation or whole-window replacement).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerDraft {
    /// `Some` when this draft replaces an existing timer.
    pub id: Option<TimerId>,
    pub shift_id: ShiftId,
    pub days: DaySet,
    pub start: NaiveTime,
    pub stop: NaiveTime,
}

/// A committed timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    pub id: TimerId,
    pub shift_id: ShiftId,
    pub window: TimeWindow,
}

/// Decide whether `candidate` may be committed next to `existing`.
///
/// `existing` must hold the timers of all shifts of the candidate's system.
/// A timer with the candidate's own id is skipped, so replacing a window
/// never conflicts with the window it replaces.
///
/// On acceptance the validated window is returned.
pub fn propose_timer(candidate: &TimerDraft, existing: &[Timer]) -> Verdict<TimeWindow> {
    if candidate.start >= candidate.stop {
        return Err(Rejection::new(
            RejectReason::InvalidRange,
            format!(
                "start {} must be earlier than stop {}",
                candidate.start, candidate.stop
            ),
        ));
    }

    let window = TimeWindow::new(candidate.days, candidate.start, candidate.stop)?;

    let clash = existing
        .iter()
        .filter(|timer| Some(timer.id) != candidate.id)
        .find(|timer| timer.window.overlaps(&window));

    if let Some(timer) = clash {
        debug!(
            timer = timer.id,
            shift = timer.shift_id,
            candidate = %window,
            existing = %timer.window,
            "timer proposal overlaps a committed timer"
        );
        return Err(Rejection::new(
            RejectReason::Conflict,
            format!(
                "window {window} overlaps timer {} of shift {} ({})",
                timer.id, timer.shift_id, timer.window
            ),
        ));
    }

    Ok(window)
}
