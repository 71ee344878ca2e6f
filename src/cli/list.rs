//! List command - show milestones and how each title classifies

use crate::cli::context::{CommandContext, RepoArgs};
use crate::cli::style::{Stylize, hyperlink};
use crate::cli::{CliProgress, Output};
use clap::Args;
use msnorm::error::{Error, Result};
use msnorm::normalize::{Classification, ProgressCallback, RunPhase, classify_title, fetch_snapshot};
use msnorm::types::Milestone;
use serde::Serialize;
use std::path::Path;

/// Options for the list command
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    /// Print milestones as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ListedMilestone<'a> {
    #[serde(flatten)]
    milestone: &'a Milestone,
    classification: Classification,
}

/// Run the list command
pub async fn run_list(path: &Path, args: ListArgs, mut output: Output) -> Result<()> {
    output.json = args.json;
    let ctx = CommandContext::new(path, &args.repo).await?;

    let progress = CliProgress::new(output, false);
    progress.on_phase(RunPhase::Fetching).await;
    let snapshot =
        fetch_snapshot(ctx.platform.as_ref(), ctx.state, ctx.per_page, &progress).await?;
    progress.on_phase(RunPhase::Done).await;

    if output.json {
        let listed: Vec<ListedMilestone<'_>> = snapshot
            .iter()
            .map(|m| ListedMilestone {
                milestone: m,
                classification: classify_title(&m.title).kind(),
            })
            .collect();
        let json = serde_json::to_string_pretty(&listed)
            .map_err(|e| Error::Internal(format!("failed to render milestones: {e}")))?;
        println!("{json}");
        return Ok(());
    }

    if snapshot.is_empty() {
        output.always(format!("No {} milestones found.", ctx.state).muted());
        return Ok(());
    }

    anstream::println!(
        "{} in {}:",
        "Milestones".emphasis(),
        ctx.repo_slug().accent()
    );
    anstream::println!();
    for milestone in &snapshot {
        let number = format!("#{}", milestone.number);
        let title = milestone
            .html_url
            .as_deref()
            .map_or_else(|| milestone.title.clone(), |url| hyperlink(&milestone.title, url));
        let kind = classify_title(&milestone.title).kind();
        let due = milestone
            .due_date
            .map(|d| format!(" due {d}"))
            .unwrap_or_default();

        anstream::println!(
            "  {:>6}  {:<6}  {}  {}{}",
            number.muted(),
            milestone.state.to_string(),
            title,
            format!("[{kind}]").muted(),
            due.muted()
        );
    }

    Ok(())
}
