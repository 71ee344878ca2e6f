//! Plan preview rendering

use crate::cli::Output;
use crate::cli::style::{Stylize, WARN, arrow};
use msnorm::normalize::{ChangePlan, short_title};

/// Print the plan as a table, or as JSON on stdout in JSON mode
pub fn print_plan(plan: &ChangePlan, output: &Output) {
    if output.json {
        match serde_json::to_string_pretty(plan) {
            Ok(json) => println!("{json}"),
            Err(e) => output.always(format!("{} failed to render plan: {e}", WARN.warn())),
        }
        return;
    }

    anstream::println!(
        "{} ({} of {} milestone(s)):",
        "Change plan".emphasis(),
        plan.len(),
        plan.snapshot_len
    );
    anstream::println!();

    let title_width = plan
        .entries
        .iter()
        .map(|e| e.old_title.chars().count() + 2)
        .max()
        .unwrap_or(0);
    let number_width = plan
        .entries
        .iter()
        .map(|e| e.source_number.to_string().len() + 1)
        .max()
        .unwrap_or(0);

    for entry in &plan.entries {
        let number = format!("#{}", entry.source_number);
        let quoted = format!("\"{}\"", entry.old_title);
        anstream::println!(
            "  {:<number_width$}  {:<title_width$}  {} {:<6} {}",
            number.muted(),
            quoted,
            arrow(),
            entry.target_title.accent(),
            format!("[{}]", entry.classification).muted(),
        );
        if !entry.focus_text.is_empty() {
            anstream::println!(
                "  {:<number_width$}  focus: {}",
                "",
                entry.focus_text
            );
        }
    }

    let duplicates = plan.duplicate_targets();
    if !duplicates.is_empty() {
        anstream::println!();
        let titles: Vec<String> = duplicates.into_iter().map(short_title).collect();
        anstream::println!(
            "{} {} would be shared by more than one milestone",
            WARN.warn(),
            titles.join(", ").warn()
        );
    }
    anstream::println!();
}
