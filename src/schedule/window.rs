// src/schedule/window.rs

//! Weekly recurring activation windows.
//!
//! A window is active on each day of its [`DaySet`] during the half-open
//! clock interval `[start, stop)`. Windows never span midnight.
//!
//! `start == stop` is a degenerate window: it never contains a clock time,
//! but two degenerate windows starting at the same instant on a shared day
//! are still considered to collide. New timers are refused such windows by
//! the timer allocator; the detector only has to cope with them when they
//! are already committed.

use std::fmt;

use chrono::{NaiveTime, Timelike, Weekday};

use crate::alloc::{RejectReason, Rejection, Verdict};
use crate::schedule::days::{DaySet, WEEK};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeWindow {
    days: DaySet,
    start: NaiveTime,
    stop: NaiveTime,
}

impl TimeWindow {
    /// Build a window, checking that the day set is non-empty and that
    /// `start <= stop`.
    pub fn new(days: DaySet, start: NaiveTime, stop: NaiveTime) -> Verdict<Self> {
        if days.is_empty() {
            return Err(Rejection::new(
                RejectReason::InvalidRange,
                "a timer must be active on at least one weekday",
            ));
        }
        if start > stop {
            return Err(Rejection::new(
                RejectReason::InvalidRange,
                format!("start {start} is later than stop {stop}"),
            ));
        }
        Ok(Self { days, start, stop })
    }

    pub fn days(&self) -> DaySet {
        self.days
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn stop(&self) -> NaiveTime {
        self.stop
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.stop
    }

    /// Clock interval this window occupies on `day`, if it is active then.
    pub fn slot_on(&self, day: Weekday) -> Option<(NaiveTime, NaiveTime)> {
        self.days.contains(day).then_some((self.start, self.stop))
    }

    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        overlaps(self, other)
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{}",
            self.days,
            format_clock(self.start),
            format_clock(self.stop)
        )
    }
}

/// Whether two windows can ever be active at the same time.
///
/// Every weekday is inspected; the windows overlap if their slots intersect
/// on any day both are active.
pub fn overlaps(a: &TimeWindow, b: &TimeWindow) -> bool {
    WEEK.into_iter().any(|day| match (a.slot_on(day), b.slot_on(day)) {
        (Some(slot_a), Some(slot_b)) => slots_intersect(slot_a, slot_b),
        _ => false,
    })
}

fn slots_intersect(a: (NaiveTime, NaiveTime), b: (NaiveTime, NaiveTime)) -> bool {
    let (a_start, a_stop) = a;
    let (b_start, b_stop) = b;

    match (a_start == a_stop, b_start == b_stop) {
        // Two instants collide only when they are the same instant.
        (true, true) => a_start == b_start,
        // An empty half-open interval intersects nothing.
        (true, false) | (false, true) => false,
        (false, false) => a_start < b_stop && b_start < a_stop,
    }
}

/// `HH:MM`, or `HH:MM:SS` when the seconds are not zero.
pub fn format_clock(time: NaiveTime) -> String {
    if time.second() == 0 {
        time.format("%H:%M").to_string()
    } else {
        time.format("%H:%M:%S").to_string()
    }
}

/// Parse a clock time written as `HH:MM` or `HH:MM:SS`.
pub fn parse_clock(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
}
