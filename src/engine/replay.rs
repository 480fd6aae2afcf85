// src/engine/replay.rs

use tracing::{info, warn};

use crate::alloc::{ControllerDraft, Rejection, SectionDraft, TimerDraft};
use crate::config::model::{PlanFile, SectionConfig, TimerPlan};
use crate::engine::report::{ProposalKind, ProposalOutcome, ReplayReport};
use crate::errors::{IrrischedError, Result};
use crate::schedule::format_clock;
use crate::store::Installation;

/// Replay `plan` into a fresh installation.
///
/// Systems, devices and shifts are committed as-is (the plan was already
/// validated structurally). Sections, sensor memberships and timers go
/// through the allocators in plan order; a rejected section skips the
/// sensors listed under it.
///
/// Only structural failures are returned as `Err`; rejections end up in the
/// report.
pub fn replay(plan: &PlanFile) -> Result<ReplayReport> {
    let mut installation = Installation::new();
    let mut outcomes = Vec::new();

    for system in plan.systems.iter() {
        installation.add_system(system.id, system.name.clone())?;
        for valve in system.valves.iter() {
            installation.register_valve(system.id, valve.clone())?;
        }
        for sensor in system.sensors.iter() {
            installation.register_sensor(system.id, sensor.clone())?;
        }
    }

    for shift in plan.shifts.iter() {
        installation.add_shift(shift.id, shift.system)?;
    }

    for section in plan.sections.iter() {
        replay_section(&mut installation, section, &mut outcomes)?;
    }

    for timer in plan.timers.iter() {
        replay_timer(&mut installation, timer, &mut outcomes)?;
    }

    let report = ReplayReport {
        outcomes,
        installation,
    };
    info!(
        accepted = report.accepted().count(),
        rejected = report.rejected().count(),
        "plan replay finished"
    );
    Ok(report)
}

fn replay_section(
    installation: &mut Installation,
    section: &SectionConfig,
    outcomes: &mut Vec<ProposalOutcome>,
) -> Result<()> {
    let draft = SectionDraft {
        id: None,
        shift_id: section.shift,
        valve_id: section.valve.clone(),
        sensor_mode: section.sensor_mode.clone(),
        start_threshold: section.start_threshold,
        stop_threshold: section.stop_threshold,
    };
    let subject = format!("'{}' (shift {})", section.valve, section.shift);
    let verdict = into_verdict(installation.create_section(draft))?;

    let section_id = match &verdict {
        Ok(id) => Some(*id),
        Err(_) => None,
    };
    push(outcomes, ProposalKind::Section, subject, verdict);

    let Some(section_id) = section_id else {
        if !section.sensors.is_empty() {
            warn!(
                valve = %section.valve,
                skipped = section.sensors.len(),
                "section rejected; its sensors are not proposed"
            );
        }
        return Ok(());
    };

    for sensor in section.sensors.iter() {
        let draft = ControllerDraft {
            id: None,
            section_id,
            sensor_id: sensor.clone(),
        };
        let subject = format!("'{}' in section {}", sensor, section_id);
        let verdict = into_verdict(installation.create_controller(draft))?;
        push(outcomes, ProposalKind::Controller, subject, verdict);
    }
    Ok(())
}

fn replay_timer(
    installation: &mut Installation,
    timer: &TimerPlan,
    outcomes: &mut Vec<ProposalOutcome>,
) -> Result<()> {
    let draft = TimerDraft {
        id: None,
        shift_id: timer.shift,
        days: timer.days,
        start: timer.start,
        stop: timer.stop,
    };
    let subject = format!(
        "{} {}-{} (shift {})",
        timer.days,
        format_clock(timer.start),
        format_clock(timer.stop),
        timer.shift
    );
    let verdict = into_verdict(installation.create_timer(draft))?;
    push(outcomes, ProposalKind::Timer, subject, verdict);
    Ok(())
}

/// Split a store result into "the allocator decided" and "something else
/// went wrong".
fn into_verdict(result: Result<u32>) -> Result<std::result::Result<u32, Rejection>> {
    match result {
        Ok(id) => Ok(Ok(id)),
        Err(IrrischedError::Rejected(rejection)) => Ok(Err(rejection)),
        Err(other) => Err(other),
    }
}

fn push(
    outcomes: &mut Vec<ProposalOutcome>,
    kind: ProposalKind,
    subject: String,
    verdict: std::result::Result<u32, Rejection>,
) {
    if let Err(rejection) = &verdict {
        warn!(
            kind = %kind,
            subject = %subject,
            reason = %rejection.reason(),
            "proposal rejected"
        );
    }
    outcomes.push(ProposalOutcome {
        kind,
        subject,
        verdict,
    });
}
