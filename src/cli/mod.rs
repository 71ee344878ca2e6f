//! Command line front end

pub mod auth;
pub mod context;
pub mod list;
pub mod normalize;
pub mod preview;
pub mod style;

use crate::cli::style::{Stylize, check, cross, spinner_style};
use async_trait::async_trait;
use dialoguer::Confirm;
use indicatif::ProgressBar;
use msnorm::error::{Error, Result};
use msnorm::normalize::{ChangePlan, PlanEntry, ProgressCallback, RunPhase};
use std::fmt::Display;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tracing::debug;

/// Output settings shared by all commands
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    /// Suppress progress messages
    pub quiet: bool,
    /// Show spinners while requests are in flight
    pub spinners: bool,
    /// Machine-readable output on stdout; human messages move to stderr
    pub json: bool,
}

impl Output {
    /// Progress message, dropped when quiet
    pub fn line(&self, msg: impl Display) {
        if !self.quiet {
            self.always(msg);
        }
    }

    /// Message printed even when quiet
    pub fn always(&self, msg: impl Display) {
        if self.json {
            anstream::eprintln!("{msg}");
        } else {
            anstream::println!("{msg}");
        }
    }

    const fn show_spinner(&self) -> bool {
        self.spinners && !self.quiet
    }
}

/// Progress callback rendering to the terminal
///
/// Keeps one spinner alive for the whole fetch; the spinner only draws and
/// never touches run state.
pub struct CliProgress {
    output: Output,
    confirm: bool,
    spinner: Mutex<Option<ProgressBar>>,
    fetched: AtomicUsize,
}

impl CliProgress {
    /// Create a progress reporter
    ///
    /// With `confirm`, the user is prompted before any update is sent.
    pub fn new(output: Output, confirm: bool) -> Self {
        Self {
            output,
            confirm,
            spinner: Mutex::new(None),
            fetched: AtomicUsize::new(0),
        }
    }

    fn set_spinner_message(&self, msg: String) {
        if !self.output.show_spinner() {
            return;
        }
        let mut slot = self.spinner.lock().unwrap_or_else(PoisonError::into_inner);
        let spinner = slot.get_or_insert_with(|| {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(spinner_style());
            spinner.enable_steady_tick(Duration::from_millis(80));
            spinner
        });
        spinner.set_message(msg);
    }

    fn spinner_active(&self) -> bool {
        self.spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn finish_spinner(&self, msg: String) {
        let spinner = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match spinner {
            Some(spinner) => spinner.finish_with_message(msg),
            None => self.output.line(msg),
        }
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: RunPhase) {
        debug!(%phase, "run phase");
        if phase != RunPhase::Fetching && self.spinner_active() {
            let total = self.fetched.load(Ordering::Relaxed);
            self.finish_spinner(format!("{} Fetched {} milestone(s)", check(), total.accent()));
        }
    }

    async fn on_page_start(&self, page: u32) {
        self.set_spinner_message(format!("Fetching milestones (page {page})..."));
    }

    async fn on_page_done(&self, _page: u32, count: usize) {
        self.fetched.fetch_add(count, Ordering::Relaxed);
    }

    async fn on_page_failed(&self, page: u32, _error: &Error) {
        let spinner = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(spinner) = spinner {
            spinner.abandon_with_message(format!("{} Fetching page {page} failed", cross()));
        }
    }

    async fn on_preview(&self, plan: &ChangePlan) {
        preview::print_plan(plan, &self.output);
    }

    async fn confirm_apply(&self, plan: &ChangePlan) -> Result<bool> {
        if !self.confirm {
            return Ok(true);
        }
        Confirm::new()
            .with_prompt(format!("Rename {} milestone(s)?", plan.len()))
            .default(false)
            .interact()
            .map_err(|e| Error::Internal(format!("Failed to read confirmation: {e}")))
    }

    async fn on_update_done(&self, entry: &PlanEntry) {
        self.output.line(format!(
            "  {} #{} {} {}",
            check(),
            entry.source_number,
            style::arrow(),
            entry.target_title.accent()
        ));
    }

    async fn on_update_failed(&self, entry: &PlanEntry, message: &str) {
        self.output.always(format!(
            "  {} #{} {} {}: {}",
            cross(),
            entry.source_number,
            style::arrow(),
            entry.target_title,
            message.warn()
        ));
    }
}
