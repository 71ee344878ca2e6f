//! Milestone normalization engine
//!
//! Three-phase pattern, same shape as a submit/merge pipeline:
//! 1. Fetch - page through the platform's milestones (effectful, bounded)
//! 2. Plan - classify titles and compute renames (pure, testable)
//! 3. Apply - issue one update per planned entry (effectful)

mod classify;
mod execute;
mod fetch;
mod plan;
mod progress;
mod reserve;
mod run;

pub use classify::{Classification, ClassifiedTitle, classify_title, normalize_title};
pub use execute::{ApplyFailure, ApplyResult, apply_plan};
pub use fetch::{DEFAULT_PER_PAGE, MAX_PER_PAGE, MilestonePages, fetch_snapshot};
pub use plan::{ChangePlan, PlanEntry, compose_description, create_change_plan, short_title};
pub use progress::{NoopProgress, ProgressCallback, RunPhase};
pub use reserve::ReservedNumbers;
pub use run::{RunOptions, RunOutcome, RunReport, run_normalizer};
