// src/schedule/mod.rs

//! Weekly recurring time windows and overlap detection.
//!
//! - [`days`] holds the seven-variant weekday set.
//! - [`window`] holds [`TimeWindow`] and the [`overlaps`] detector used by
//!   the timer allocator.

pub mod days;
pub mod window;

pub use days::{DaySet, WEEK, parse_weekday};
pub use window::{TimeWindow, format_clock, overlaps, parse_clock};
