//! Plan application - effectful operations
//!
//! Takes a `ChangePlan` (created by the pure planner) and sends the renames
//! through the platform API. The plan is never recomputed here.

use crate::normalize::plan::{ChangePlan, PlanEntry};
use crate::normalize::progress::ProgressCallback;
use crate::platform::PlatformService;
use tracing::{debug, warn};

/// An entry whose update call failed
#[derive(Debug, Clone)]
pub struct ApplyFailure {
    /// The entry that was attempted
    pub entry: PlanEntry,
    /// Error reported by the platform
    pub message: String,
}

/// Result of applying a plan
#[derive(Debug, Clone, Default)]
pub struct ApplyResult {
    /// Entries updated successfully
    pub updated: Vec<PlanEntry>,
    /// Entries whose update failed
    pub failed: Vec<ApplyFailure>,
}

impl ApplyResult {
    /// Number of milestones updated
    #[must_use]
    pub fn updated_count(&self) -> usize {
        self.updated.len()
    }

    /// Number of failed updates
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    /// `(updated, failed)`
    #[must_use]
    pub fn counts(&self) -> (usize, usize) {
        (self.updated_count(), self.failed_count())
    }

    /// Check if every planned update succeeded
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Apply the plan (EFFECTFUL)
///
/// Updates are sent one at a time in plan order. A failed update is recorded
/// and the remaining entries are still attempted. Nothing is rolled back.
pub async fn apply_plan(
    plan: &ChangePlan,
    platform: &dyn PlatformService,
    progress: &dyn ProgressCallback,
) -> ApplyResult {
    let mut result = ApplyResult::default();

    for entry in &plan.entries {
        progress.on_update_start(entry).await;

        match platform
            .update_milestone(entry.source_number, &entry.update())
            .await
        {
            Ok(_) => {
                debug!(number = entry.source_number, title = %entry.target_title, "renamed milestone");
                progress.on_update_done(entry).await;
                result.updated.push(entry.clone());
            }
            Err(e) => {
                let message = e.to_string();
                warn!(number = entry.source_number, error = %message, "milestone update failed");
                progress.on_update_failed(entry, &message).await;
                result.failed.push(ApplyFailure {
                    entry: entry.clone(),
                    message,
                });
            }
        }
    }

    result
}
