//! Progress reporting for normalizer runs

use crate::error::{Error, Result};
use crate::normalize::plan::{ChangePlan, PlanEntry};
use async_trait::async_trait;

/// Phase of a normalizer run
///
/// `Fetching -> Planning -> Previewing -> (Done | Applying -> Done)`.
/// Empty snapshots and empty plans go straight to `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Paging through milestones
    Fetching,
    /// Classifying titles and computing renames
    Planning,
    /// Showing the plan
    Previewing,
    /// Sending updates
    Applying,
    /// Finished
    Done,
}

impl std::fmt::Display for RunPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fetching => write!(f, "fetching"),
            Self::Planning => write!(f, "planning"),
            Self::Previewing => write!(f, "previewing"),
            Self::Applying => write!(f, "applying"),
            Self::Done => write!(f, "done"),
        }
    }
}

/// Callback for run progress
///
/// Every method has a no-op default. Implementations must not mutate the
/// plan; they only observe it. `confirm_apply` is the one decision point: it
/// runs after the preview, only when applying was requested, and returning
/// `false` ends the run without touching any milestone.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Entered a new phase
    async fn on_phase(&self, _phase: RunPhase) {}

    /// About to request a page
    async fn on_page_start(&self, _page: u32) {}

    /// A page arrived with `count` milestones
    async fn on_page_done(&self, _page: u32, _count: usize) {}

    /// A page request failed; the run aborts right after
    async fn on_page_failed(&self, _page: u32, _error: &Error) {}

    /// Plan is ready to be shown
    async fn on_preview(&self, _plan: &ChangePlan) {}

    /// Last chance to back out before any update is sent
    async fn confirm_apply(&self, _plan: &ChangePlan) -> Result<bool> {
        Ok(true)
    }

    /// About to update a milestone
    async fn on_update_start(&self, _entry: &PlanEntry) {}

    /// Milestone updated
    async fn on_update_done(&self, _entry: &PlanEntry) {}

    /// Milestone update failed; the run continues with the next entry
    async fn on_update_failed(&self, _entry: &PlanEntry, _message: &str) {}
}

/// Progress callback that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {}
