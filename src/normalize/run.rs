//! Run orchestration: fetch, plan, preview, and optionally apply

use crate::error::Result;
use crate::normalize::execute::{ApplyResult, apply_plan};
use crate::normalize::fetch::{DEFAULT_PER_PAGE, fetch_snapshot};
use crate::normalize::plan::{ChangePlan, create_change_plan};
use crate::normalize::progress::{ProgressCallback, RunPhase};
use crate::platform::PlatformService;
use crate::types::{Milestone, StateFilter};
use tracing::info;

/// Options for a normalizer run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Which milestones to fetch
    pub state: StateFilter,
    /// Page size for the listing
    pub per_page: u32,
    /// Send updates after previewing. Without this the run is a dry run.
    pub apply: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            state: StateFilter::All,
            per_page: DEFAULT_PER_PAGE,
            apply: false,
        }
    }
}

/// How a run ended
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// No milestones matched the state filter
    EmptySnapshot,
    /// Every title was already canonical
    NothingToChange {
        /// Milestones inspected
        snapshot_len: usize,
    },
    /// Plan previewed, apply not requested
    DryRun(ChangePlan),
    /// Apply requested but declined at confirmation
    Declined(ChangePlan),
    /// Plan applied
    Applied {
        /// The plan that was applied
        plan: ChangePlan,
        /// Per-entry outcome
        result: ApplyResult,
    },
}

impl RunOutcome {
    /// The computed plan, when one was produced
    pub const fn plan(&self) -> Option<&ChangePlan> {
        match self {
            Self::DryRun(plan) | Self::Declined(plan) | Self::Applied { plan, .. } => Some(plan),
            Self::EmptySnapshot | Self::NothingToChange { .. } => None,
        }
    }
}

/// Snapshot and outcome of a run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Milestones as fetched
    pub snapshot: Vec<Milestone>,
    /// How the run ended
    pub outcome: RunOutcome,
}

/// Run the normalizer end to end
///
/// The snapshot is fetched once. Apply works from the plan computed from that
/// snapshot, never from a second fetch, so the updates sent are exactly the
/// ones previewed. No update is sent unless `options.apply` is set and the
/// progress callback confirms.
pub async fn run_normalizer(
    platform: &dyn PlatformService,
    options: &RunOptions,
    progress: &dyn ProgressCallback,
) -> Result<RunReport> {
    progress.on_phase(RunPhase::Fetching).await;
    let snapshot = fetch_snapshot(platform, options.state, options.per_page, progress).await?;

    if snapshot.is_empty() {
        info!(state = %options.state, "no milestones found");
        progress.on_phase(RunPhase::Done).await;
        return Ok(RunReport {
            snapshot,
            outcome: RunOutcome::EmptySnapshot,
        });
    }

    progress.on_phase(RunPhase::Planning).await;
    let plan = create_change_plan(&snapshot);
    info!(
        milestones = snapshot.len(),
        changes = plan.len(),
        "computed change plan"
    );

    if plan.is_empty() {
        progress.on_phase(RunPhase::Done).await;
        let snapshot_len = snapshot.len();
        return Ok(RunReport {
            snapshot,
            outcome: RunOutcome::NothingToChange { snapshot_len },
        });
    }

    progress.on_phase(RunPhase::Previewing).await;
    progress.on_preview(&plan).await;

    if !options.apply {
        progress.on_phase(RunPhase::Done).await;
        return Ok(RunReport {
            snapshot,
            outcome: RunOutcome::DryRun(plan),
        });
    }

    if !progress.confirm_apply(&plan).await? {
        progress.on_phase(RunPhase::Done).await;
        return Ok(RunReport {
            snapshot,
            outcome: RunOutcome::Declined(plan),
        });
    }

    progress.on_phase(RunPhase::Applying).await;
    let result = apply_plan(&plan, platform, progress).await;
    let (updated, failed) = result.counts();
    info!(updated, failed, "applied change plan");

    progress.on_phase(RunPhase::Done).await;
    Ok(RunReport {
        snapshot,
        outcome: RunOutcome::Applied { plan, result },
    })
}
