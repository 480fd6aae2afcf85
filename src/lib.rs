// src/lib.rs

pub mod alloc;
pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod schedule;
pub mod store;
pub mod types;

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::PlanFile;
use crate::engine::ReplayReport;
use crate::schedule::format_clock;

/// High-level entry point used by `main.rs`.
///
/// Loads and validates the plan, then either prints it (`--dry-run`) or
/// replays it and prints one line per proposal.
///
/// Returns `None` for a dry run.
pub fn run(args: CliArgs) -> Result<Option<ReplayReport>> {
    let plan_path = PathBuf::from(&args.plan);
    let plan = load_and_validate(&plan_path)?;

    if args.dry_run {
        print_dry_run(&plan);
        return Ok(None);
    }

    let report = engine::replay(&plan)?;
    print_report(&report);
    Ok(Some(report))
}

fn print_report(report: &ReplayReport) {
    for outcome in report.outcomes.iter() {
        println!("{outcome}");
    }
    println!();
    println!(
        "{} accepted, {} rejected",
        report.accepted().count(),
        report.rejected().count()
    );
}

/// Simple dry-run output: print systems, shifts, sections and timers.
fn print_dry_run(plan: &PlanFile) {
    println!("irrisched dry-run");
    println!();

    println!("systems ({}):", plan.systems.len());
    for system in plan.systems.iter() {
        println!("  - {} ({})", system.id, system.name);
        if !system.valves.is_empty() {
            println!("      valves: {:?}", system.valves);
        }
        if !system.sensors.is_empty() {
            println!("      sensors: {:?}", system.sensors);
        }
        for shift in plan.shifts.iter().filter(|s| s.system == system.id) {
            println!("      shift {}", shift.id);
        }
    }

    println!("sections ({}):", plan.sections.len());
    for section in plan.sections.iter() {
        println!("  - shift {} valve {}", section.shift, section.valve);
        if let Some(ref mode) = section.sensor_mode {
            println!("      sensor_mode: {mode}");
        }
        if let (Some(start), Some(stop)) = (section.start_threshold, section.stop_threshold) {
            println!("      thresholds: {start}..{stop}");
        }
        if !section.sensors.is_empty() {
            println!("      sensors: {:?}", section.sensors);
        }
    }

    println!("timers ({}):", plan.timers.len());
    for timer in plan.timers.iter() {
        println!(
            "  - shift {} {} {}-{}",
            timer.shift,
            timer.days,
            format_clock(timer.start),
            format_clock(timer.stop)
        );
    }

    debug!("dry-run complete (no proposals replayed)");
}
