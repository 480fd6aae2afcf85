// src/engine/report.rs

use std::fmt;

use crate::alloc::{RejectReason, Rejection};
use crate::store::Installation;

/// What kind of entity a replayed proposal was about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalKind {
    Section,
    Controller,
    Timer,
}

impl fmt::Display for ProposalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProposalKind::Section => "section",
            ProposalKind::Controller => "sensor",
            ProposalKind::Timer => "timer",
        };
        f.write_str(s)
    }
}

/// Verdict for one replayed proposal. `Ok` carries the id assigned on
/// commit.
#[derive(Debug, Clone)]
pub struct ProposalOutcome {
    pub kind: ProposalKind,
    pub subject: String,
    pub verdict: Result<u32, Rejection>,
}

impl ProposalOutcome {
    pub fn is_accepted(&self) -> bool {
        self.verdict.is_ok()
    }

    pub fn reason(&self) -> Option<RejectReason> {
        self.verdict.as_ref().err().map(|r| r.reason())
    }
}

impl fmt::Display for ProposalOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.verdict {
            Ok(id) => write!(f, "{} {}: accepted (id {})", self.kind, self.subject, id),
            Err(rejection) => write!(f, "{} {}: rejected {}", self.kind, self.subject, rejection),
        }
    }
}

/// Result of replaying a whole plan.
#[derive(Debug, Clone)]
pub struct ReplayReport {
    pub outcomes: Vec<ProposalOutcome>,
    /// Committed state after the replay.
    pub installation: Installation,
}

impl ReplayReport {
    pub fn accepted(&self) -> impl Iterator<Item = &ProposalOutcome> {
        self.outcomes.iter().filter(|o| o.is_accepted())
    }

    pub fn rejected(&self) -> impl Iterator<Item = &ProposalOutcome> {
        self.outcomes.iter().filter(|o| !o.is_accepted())
    }

    pub fn has_rejections(&self) -> bool {
        self.rejected().next().is_some()
    }
}
