mod common;

use chrono::Weekday::{self, Fri, Mon, Sat, Sun, Thu, Tue, Wed};
use common::{hm, reason_of, window};
use irrisched::alloc::RejectReason;
use irrisched::schedule::{
    DaySet, TimeWindow, format_clock, overlaps, parse_clock, parse_weekday,
};

#[test]
fn disjoint_days_never_overlap() {
    let a = window(&[Mon, Wed], (8, 0), (9, 0));
    let b = window(&[Tue, Thu], (8, 0), (9, 0));

    assert!(!overlaps(&a, &b));
    assert!(!overlaps(&b, &a));
}

#[test]
fn shared_day_with_intersecting_slots_overlaps() {
    let a = window(&[Mon], (8, 0), (9, 0));
    let b = window(&[Mon], (8, 30), (10, 0));

    assert!(overlaps(&a, &b));
    assert!(overlaps(&b, &a));
}

#[test]
fn touching_endpoints_do_not_overlap() {
    let a = window(&[Mon], (8, 0), (9, 0));
    let b = window(&[Mon], (9, 0), (10, 0));

    assert!(!overlaps(&a, &b));
    assert!(!overlaps(&b, &a));
}

#[test]
fn contained_and_identical_slots_overlap() {
    let outer = window(&[Sat], (6, 0), (12, 0));
    let inner = window(&[Sat], (7, 15), (7, 45));

    assert!(overlaps(&outer, &inner));
    assert!(overlaps(&inner, &outer));
    assert!(overlaps(&outer, &outer));
}

#[test]
fn shared_day_that_is_not_the_first_active_day_is_detected() {
    // Monday is only in `a`; the clash is on Friday.
    let a = window(&[Mon, Fri], (10, 0), (11, 0));
    let b = window(&[Fri, Sun], (10, 30), (12, 0));

    assert!(overlaps(&a, &b));
}

#[test]
fn shared_days_with_separate_slots_do_not_overlap() {
    let a = window(&[Mon, Tue, Wed, Thu, Fri], (5, 0), (6, 0));
    let b = window(&[Mon, Tue, Wed, Thu, Fri], (18, 0), (19, 30));

    assert!(!overlaps(&a, &b));
}

#[test]
fn degenerate_windows_collide_only_on_the_same_instant() {
    let at_eight = window(&[Mon], (8, 0), (8, 0));
    let also_eight = window(&[Mon, Tue], (8, 0), (8, 0));
    let at_nine = window(&[Mon], (9, 0), (9, 0));
    let morning = window(&[Mon], (7, 0), (10, 0));

    assert!(at_eight.is_degenerate());
    assert!(overlaps(&at_eight, &also_eight));
    assert!(!overlaps(&at_eight, &at_nine));
    // An empty half-open slot intersects nothing.
    assert!(!overlaps(&at_eight, &morning));
    assert!(!overlaps(&morning, &at_eight));
}

#[test]
fn window_construction_checks_days_and_order() {
    assert_eq!(
        reason_of(TimeWindow::new(DaySet::new(), hm(8, 0), hm(9, 0))),
        RejectReason::InvalidRange
    );
    assert_eq!(
        reason_of(TimeWindow::new(DaySet::only(Mon), hm(9, 0), hm(8, 0))),
        RejectReason::InvalidRange
    );
    assert!(TimeWindow::new(DaySet::only(Mon), hm(8, 0), hm(8, 0)).is_ok());
}

#[test]
fn day_set_operations() {
    let weekdays: DaySet = [Mon, Tue, Wed, Thu, Fri].into_iter().collect();
    let weekend = DaySet::only(Sat).with(Sun);

    assert!(weekdays.is_disjoint(weekend));
    assert_eq!(weekdays.intersection(DaySet::EVERY_DAY), weekdays);
    assert_eq!(weekend.to_string(), "Sat,Sun");
    assert_eq!(
        weekdays.iter().collect::<Vec<Weekday>>(),
        vec![Mon, Tue, Wed, Thu, Fri]
    );

    let mut days = DaySet::new();
    days.insert(Sun);
    assert_eq!(days, weekend.intersection(DaySet::only(Sun)));
}

#[test]
fn window_display_is_compact() {
    let w = window(&[Mon, Wed], (8, 0), (9, 30));
    assert_eq!(w.to_string(), "Mon,Wed 08:00-09:30");
}

#[test]
fn window_display_keeps_seconds_when_present() {
    let start = parse_clock("08:00:00").unwrap();
    let stop = parse_clock("08:00:30").unwrap();
    let short = TimeWindow::new(DaySet::only(Tue), start, stop).unwrap();

    assert_eq!(short.to_string(), "Tue 08:00-08:00:30");
    assert_eq!(format_clock(stop), "08:00:30");
    assert_eq!(format_clock(hm(23, 5)), "23:05");
}

#[test]
fn clock_and_weekday_parsing() {
    assert_eq!(parse_clock("08:00"), Some(hm(8, 0)));
    assert_eq!(parse_clock(" 17:45:00 "), Some(hm(17, 45)));
    assert_eq!(parse_clock("25:00"), None);
    assert_eq!(parse_clock("noon"), None);

    assert_eq!(parse_weekday("Mon"), Some(Mon));
    assert_eq!(parse_weekday("Friday"), Some(Fri));
    assert_eq!(parse_weekday("Funday"), None);
}
