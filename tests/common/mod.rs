#![allow(dead_code)]

use chrono::{NaiveTime, Weekday};
use irrisched::alloc::Rejection;
use irrisched::alloc::RejectReason;
use irrisched::errors::IrrischedError;
use irrisched::schedule::{DaySet, TimeWindow, WEEK};

pub use irrisched_test_utils::{hm, init_tracing};

/// Window on `days` between two `(hour, minute)` clock times.
pub fn window(days: &[Weekday], start: (u32, u32), stop: (u32, u32)) -> TimeWindow {
    let days: DaySet = days.iter().copied().collect();
    TimeWindow::new(days, hm(start.0, start.1), hm(stop.0, stop.1)).expect("valid window")
}

/// Day set from a 7-bit mask, bit 0 = Monday.
pub fn days_from_mask(mask: u8) -> DaySet {
    WEEK.iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, day)| *day)
        .collect()
}

pub fn minute(m: u32) -> NaiveTime {
    NaiveTime::from_num_seconds_from_midnight_opt(m * 60, 0).expect("minute of day")
}

/// Reason of a rejected verdict; panics if the verdict was accepted.
pub fn reason_of<T: std::fmt::Debug>(verdict: Result<T, Rejection>) -> RejectReason {
    match verdict {
        Err(rejection) => rejection.reason(),
        Ok(value) => panic!("expected a rejection, got Ok({value:?})"),
    }
}

/// Reason of a store error that should be an allocator rejection.
pub fn store_reason<T: std::fmt::Debug>(result: Result<T, IrrischedError>) -> RejectReason {
    match result {
        Err(IrrischedError::Rejected(rejection)) => rejection.reason(),
        Err(other) => panic!("expected a rejection, got error: {other:?}"),
        Ok(value) => panic!("expected a rejection, got Ok({value:?})"),
    }
}
