mod common;

use std::io::Write;

use chrono::Weekday;
use irrisched::alloc::RejectReason;
use irrisched::cli::CliArgs;
use irrisched::config::{PlanFile, load_and_validate};
use irrisched::engine::{ProposalKind, replay};
use irrisched::errors::IrrischedError;
use irrisched_test_utils::builders::PlanFileBuilder;
use tempfile::NamedTempFile;

fn plan_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

const ORCHARD: &str = r#"
[[system]]
id = 1
name = "orchard"
valves = ["V-1", "V-2"]
sensors = ["S-1", "S-2"]

[[shift]]
id = 10
system = 1

[[shift]]
id = 11
system = 1

[[section]]
shift = 10
valve = "V-1"
sensor_mode = "avg"
start_threshold = 30.0
stop_threshold = 60.0
sensors = ["S-1", "S-2", "S-1"]

[[section]]
shift = 11
valve = "V-1"
sensors = ["S-2"]

[[timer]]
shift = 10
days = ["Mon", "Wed"]
start = "08:00"
stop = "09:00"

[[timer]]
shift = 11
days = ["Wed"]
start = "08:30"
stop = "10:00"

[[timer]]
shift = 11
days = ["Tue"]
start = "08:30"
stop = "10:00"
"#;

#[test]
fn valid_plan_is_loaded_and_parsed() {
    let file = plan_file(ORCHARD);

    let plan = load_and_validate(file.path()).unwrap();

    assert_eq!(plan.systems.len(), 1);
    assert_eq!(plan.shifts.len(), 2);
    assert_eq!(plan.sections.len(), 2);
    assert_eq!(plan.timers.len(), 3);
    assert!(plan.timers[0].days.contains(Weekday::Mon));
    assert!(plan.timers[0].days.contains(Weekday::Wed));
    assert_eq!(plan.timers[0].start, common::hm(8, 0));
}

#[test]
fn replay_reports_each_proposal() {
    common::init_tracing();
    let file = plan_file(ORCHARD);
    let plan = load_and_validate(file.path()).unwrap();

    let report = replay(&plan).unwrap();

    let summary: Vec<_> = report
        .outcomes
        .iter()
        .map(|o| (o.kind, o.reason()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (ProposalKind::Section, None),
            (ProposalKind::Controller, None),
            (ProposalKind::Controller, None),
            (ProposalKind::Controller, Some(RejectReason::DuplicateSensor)),
            (ProposalKind::Section, Some(RejectReason::ValveBusy)),
            (ProposalKind::Timer, None),
            (ProposalKind::Timer, Some(RejectReason::Conflict)),
            (ProposalKind::Timer, None),
        ]
    );
    assert!(report.has_rejections());
    assert_eq!(report.accepted().count(), 5);
    assert_eq!(report.installation.sections_of_shift(10).count(), 1);
    assert_eq!(report.installation.sections_of_shift(11).count(), 0);
}

#[test]
fn outcome_lines_name_the_verdict() {
    let plan = PlanFileBuilder::new()
        .with_system(1, &["V-1"], &[])
        .with_shift(10, 1)
        .with_timer(10, &["Mon"], "08:00", "09:00")
        .with_timer(10, &["Mon"], "08:00", "08:00")
        .build();

    let report = replay(&plan).unwrap();

    assert_eq!(
        report.outcomes[0].to_string(),
        "timer Mon 08:00-09:00 (shift 10): accepted (id 1)"
    );
    let rejected = report.outcomes[1].to_string();
    assert!(rejected.starts_with("timer Mon 08:00-08:00 (shift 10): rejected [invalid_range]"));
}

#[test]
fn second_level_timers_are_told_apart() {
    let plan = PlanFileBuilder::new()
        .with_system(1, &[], &[])
        .with_shift(10, 1)
        .with_timer(10, &["Mon"], "08:00:00", "08:00:30")
        .with_timer(10, &["Mon"], "08:00:15", "08:00:45")
        .build();

    let report = replay(&plan).unwrap();

    assert_eq!(report.outcomes[0].subject, "Mon 08:00-08:00:30 (shift 10)");
    let rejected = report.outcomes[1].to_string();
    assert!(rejected.contains("Mon 08:00:15-08:00:45"));
    assert!(rejected.contains("overlaps timer 1 of shift 10 (Mon 08:00-08:00:30)"));
}

#[test]
fn sensors_of_a_rejected_section_are_skipped() {
    let plan = PlanFileBuilder::new()
        .with_system(1, &["V-1"], &["S-1"])
        .with_shift(10, 1)
        .with_section(10, "V-404", &["S-1"])
        .build();

    let report = replay(&plan).unwrap();

    assert_eq!(report.outcomes.len(), 1);
    assert_eq!(report.outcomes[0].reason(), Some(RejectReason::UnknownValve));
}

fn config_error(raw: irrisched::config::RawPlanFile) -> String {
    match PlanFile::try_from(raw) {
        Err(IrrischedError::ConfigError(msg)) => msg,
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn plan_without_systems_is_rejected() {
    let msg = config_error(PlanFileBuilder::new().raw());
    assert!(msg.contains("at least one"));
}

#[test]
fn dangling_shift_references_are_config_errors() {
    let msg = config_error(
        PlanFileBuilder::new()
            .with_system(1, &["V-1"], &[])
            .with_shift(10, 1)
            .with_section(12, "V-1", &[])
            .raw(),
    );
    assert!(msg.contains("unknown shift 12"));

    let msg = config_error(
        PlanFileBuilder::new()
            .with_system(1, &[], &[])
            .with_shift(10, 7)
            .raw(),
    );
    assert!(msg.contains("unknown system 7"));
}

#[test]
fn timer_fields_must_parse() {
    let msg = config_error(
        PlanFileBuilder::new()
            .with_system(1, &[], &[])
            .with_shift(10, 1)
            .with_timer(10, &["Funday"], "08:00", "09:00")
            .raw(),
    );
    assert!(msg.contains("unknown weekday 'Funday'"));

    let msg = config_error(
        PlanFileBuilder::new()
            .with_system(1, &[], &[])
            .with_shift(10, 1)
            .with_timer(10, &["Mon"], "25:00", "09:00")
            .raw(),
    );
    assert!(msg.contains("is not a HH:MM clock time"));
}

#[test]
fn device_ids_are_checked() {
    let msg = config_error(
        PlanFileBuilder::new()
            .with_system(1, &["V-1"], &[])
            .with_system(2, &["V-1"], &[])
            .raw(),
    );
    assert!(msg.contains("valve 'V-1' is listed more than once"));

    let long = "V".repeat(26);
    let msg = config_error(
        PlanFileBuilder::new()
            .with_system(1, &[long.as_str()], &[])
            .raw(),
    );
    assert!(msg.contains("longer than 25"));
}

#[test]
fn malformed_toml_is_a_toml_error() {
    let file = plan_file("[[system]]\nid = \"one\"\n");

    let result = load_and_validate(file.path());

    assert!(matches!(result, Err(IrrischedError::TomlError(_))));
}

#[test]
fn missing_plan_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();

    let result = load_and_validate(dir.path().join("absent.toml"));

    assert!(matches!(result, Err(IrrischedError::IoError(_))));
}

#[test]
fn dry_run_does_not_replay() {
    let file = plan_file(ORCHARD);
    let args = CliArgs {
        plan: file.path().display().to_string(),
        log_level: None,
        dry_run: true,
    };

    assert!(irrisched::run(args).unwrap().is_none());
}

#[test]
fn run_returns_the_replay_report() {
    let file = plan_file(ORCHARD);
    let args = CliArgs {
        plan: file.path().display().to_string(),
        log_level: None,
        dry_run: false,
    };

    let report = irrisched::run(args).unwrap().expect("replay report");
    assert_eq!(report.rejected().count(), 3);
}
