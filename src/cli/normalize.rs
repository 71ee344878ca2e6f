//! Normalize command - rename milestones to canonical `M<n>` titles

use crate::cli::context::{CommandContext, RepoArgs};
use crate::cli::style::{CHECK, Stylize, WARN, cross};
use crate::cli::{CliProgress, Output};
use chrono::Utc;
use clap::Args;
use msnorm::error::{Error, Result};
use msnorm::normalize::{ApplyResult, RunOptions, RunOutcome, run_normalizer};
use msnorm::snapshot::{SnapshotExport, save_snapshot};
use std::path::{Path, PathBuf};

/// Options for the normalize command
#[derive(Debug, Clone, Args)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    /// Rename the milestones (default is a dry run)
    #[arg(long)]
    pub apply: bool,

    /// Ask before renaming (with --apply)
    #[arg(long, requires = "apply")]
    pub confirm: bool,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,

    /// Write the fetched snapshot and plan to a JSON file
    #[arg(long, value_name = "PATH")]
    pub save_snapshot: Option<PathBuf>,
}

/// Run the normalize command
pub async fn run_normalize(path: &Path, args: NormalizeArgs, mut output: Output) -> Result<()> {
    output.json = args.json;
    let ctx = CommandContext::new(path, &args.repo).await?;

    output.line(format!(
        "{} {} ({} milestones)",
        "Normalizing".emphasis(),
        ctx.repo_slug().accent(),
        ctx.state
    ));

    let options = RunOptions {
        state: ctx.state,
        per_page: ctx.per_page,
        apply: args.apply,
    };
    let progress = CliProgress::new(output, args.confirm);
    let report = run_normalizer(ctx.platform.as_ref(), &options, &progress).await?;

    if let Some(ref snapshot_path) = args.save_snapshot {
        let export = SnapshotExport {
            repository: ctx.repo_slug(),
            fetched_at: Utc::now(),
            state: ctx.state,
            milestones: &report.snapshot,
            plan: report.outcome.plan(),
        };
        save_snapshot(snapshot_path, &export)?;
        output.line(format!("Saved snapshot to {}", snapshot_path.display()).muted());
    }

    match report.outcome {
        RunOutcome::EmptySnapshot => {
            output.always(format!("No {} milestones found.", ctx.state).muted());
        }
        RunOutcome::NothingToChange { snapshot_len } => {
            output.always(
                format!("All {snapshot_len} milestone title(s) are canonical. Nothing to change.")
                    .muted(),
            );
        }
        RunOutcome::DryRun(plan) => {
            output.always(
                format!(
                    "Dry run: nothing changed. Run with --apply to rename {} milestone(s).",
                    plan.len()
                )
                .muted(),
            );
        }
        RunOutcome::Declined(_) => {
            output.always("Aborted".muted());
        }
        RunOutcome::Applied { result, .. } => {
            print_apply_summary(&result, &output);
            if !result.is_success() {
                let (updated, failed) = result.counts();
                return Err(Error::PartialApply { updated, failed });
            }
        }
    }

    Ok(())
}

/// Print apply summary
fn print_apply_summary(result: &ApplyResult, output: &Output) {
    let (updated, failed) = result.counts();
    output.always("");
    if result.is_success() {
        output.always(format!(
            "{} {} milestone(s) renamed",
            format!("{CHECK} Done:").success(),
            updated.accent()
        ));
        return;
    }

    output.always(format!(
        "{} {} renamed, {} failed",
        format!("{WARN} Partially applied:").warn(),
        updated.accent(),
        failed.warn()
    ));
    for failure in &result.failed {
        output.always(format!(
            "   {} #{} \"{}\": {}",
            cross(),
            failure.entry.source_number,
            failure.entry.old_title,
            failure.message.muted()
        ));
    }
}
