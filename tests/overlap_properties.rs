mod common;

use std::collections::BTreeSet;

use chrono::{NaiveTime, Timelike};
use common::{days_from_mask, minute};
use irrisched::alloc::{Timer, TimerDraft, propose_timer};
use irrisched::schedule::{TimeWindow, WEEK, overlaps};
use proptest::prelude::*;

const LAST_MINUTE: u32 = 24 * 60 - 1;

// Windows on whole minutes, start strictly before stop.
fn window_strategy() -> impl Strategy<Value = TimeWindow> {
    (1u8..128, 0u32..LAST_MINUTE).prop_flat_map(|(mask, start)| {
        ((start + 1)..=LAST_MINUTE).prop_map(move |stop| {
            TimeWindow::new(days_from_mask(mask), minute(start), minute(stop))
                .expect("generated window is valid")
        })
    })
}

fn minutes_of(time: NaiveTime) -> u32 {
    time.num_seconds_from_midnight() / 60
}

// Reference answer: walk every shared day and every minute of it.
fn brute_force_overlap(a: &TimeWindow, b: &TimeWindow) -> bool {
    WEEK.iter().any(|day| {
        if !a.days().contains(*day) || !b.days().contains(*day) {
            return false;
        }
        let a_minutes: BTreeSet<u32> = (minutes_of(a.start())..minutes_of(a.stop())).collect();
        (minutes_of(b.start())..minutes_of(b.stop())).any(|m| a_minutes.contains(&m))
    })
}

fn draft_from(window: &TimeWindow) -> TimerDraft {
    TimerDraft {
        id: None,
        shift_id: 1,
        days: window.days(),
        start: window.start(),
        stop: window.stop(),
    }
}

proptest! {
    #[test]
    fn disjoint_day_sets_never_overlap(
        a in window_strategy(),
        b_mask in 1u8..128,
        b_start in 0u32..LAST_MINUTE,
    ) {
        let a_mask = WEEK
            .iter()
            .enumerate()
            .filter(|(_, d)| a.days().contains(**d))
            .fold(0u8, |acc, (i, _)| acc | (1 << i));
        let mask = b_mask & !a_mask & 0b111_1111;
        prop_assume!(mask != 0);

        let b = TimeWindow::new(days_from_mask(mask), minute(b_start), minute(LAST_MINUTE)).unwrap();
        prop_assert!(!overlaps(&a, &b));
    }

    #[test]
    fn overlap_matches_per_day_minute_scan(a in window_strategy(), b in window_strategy()) {
        prop_assert_eq!(overlaps(&a, &b), brute_force_overlap(&a, &b));
    }

    #[test]
    fn overlap_is_symmetric(a in window_strategy(), b in window_strategy()) {
        prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
    }

    #[test]
    fn timer_verdict_is_idempotent(
        committed in proptest::collection::vec(window_strategy(), 0..6),
        candidate in window_strategy(),
    ) {
        let existing: Vec<Timer> = committed
            .into_iter()
            .enumerate()
            .map(|(i, window)| Timer { id: i as u32 + 1, shift_id: 1, window })
            .collect();
        let draft = draft_from(&candidate);

        prop_assert_eq!(propose_timer(&draft, &existing), propose_timer(&draft, &existing));
    }

    #[test]
    fn accepted_timers_never_overlap(proposals in proptest::collection::vec(window_strategy(), 1..12)) {
        let mut accepted: Vec<Timer> = Vec::new();
        for (i, window) in proposals.iter().enumerate() {
            if let Ok(window) = propose_timer(&draft_from(window), &accepted) {
                accepted.push(Timer { id: i as u32 + 1, shift_id: 1, window });
            }
        }

        for (i, a) in accepted.iter().enumerate() {
            for b in accepted.iter().skip(i + 1) {
                prop_assert!(!overlaps(&a.window, &b.window), "{} overlaps {}", a.window, b.window);
            }
        }
    }
}
