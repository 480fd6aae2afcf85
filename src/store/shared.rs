// src/store/shared.rs

use std::sync::{Arc, Mutex, PoisonError};

use crate::alloc::{ControllerDraft, SectionDraft, TimerDraft};
use crate::errors::Result;
use crate::store::installation::Installation;
use crate::types::{ControllerId, SectionId, TimerId};

/// Cloneable handle to an [`Installation`] shared between threads.
///
/// Every operation holds the lock for the whole read-decide-write sequence,
/// so two concurrent proposals can never both see "no conflict" and both be
/// committed.
#[derive(Debug, Clone, Default)]
pub struct SharedInstallation {
    inner: Arc<Mutex<Installation>>,
}

impl SharedInstallation {
    pub fn new(installation: Installation) -> Self {
        Self {
            inner: Arc::new(Mutex::new(installation)),
        }
    }

    /// Run `f` with exclusive access to the installation.
    pub fn with<R>(&self, f: impl FnOnce(&mut Installation) -> R) -> R {
        // Poisoning is ignored: mutations only happen after a verdict.
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn create_section(&self, draft: SectionDraft) -> Result<SectionId> {
        self.with(|installation| installation.create_section(draft))
    }

    pub fn create_controller(&self, draft: ControllerDraft) -> Result<ControllerId> {
        self.with(|installation| installation.create_controller(draft))
    }

    pub fn create_timer(&self, draft: TimerDraft) -> Result<TimerId> {
        self.with(|installation| installation.create_timer(draft))
    }

    /// Copy of the current committed state.
    pub fn snapshot(&self) -> Installation {
        self.with(|installation| installation.clone())
    }
}
