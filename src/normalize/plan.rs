//! Change planning - pure functions for creating rename plans
//!
//! No I/O happens here. The plan is computed once from a snapshot and then
//! handed, unmodified, to the apply phase, so what gets applied is exactly
//! what was previewed.

use crate::normalize::classify::{Classification, ClassifiedTitle, classify_title};
use crate::normalize::reserve::ReservedNumbers;
use crate::types::{Milestone, MilestoneUpdate};
use serde::Serialize;
use std::collections::BTreeMap;

/// Canonical short title for a milestone number
pub fn short_title(number: u64) -> String {
    format!("M{number}")
}

/// A single proposed rename
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanEntry {
    /// Platform number of the milestone to update
    pub source_number: u64,
    /// Title at snapshot time
    pub old_title: String,
    /// How the old title was classified
    pub classification: Classification,
    /// Number in the new title
    pub target_number: u64,
    /// New title, `M<target_number>`
    pub target_title: String,
    /// Text moved out of the title
    pub focus_text: String,
    /// New description combining focus text and the old description
    pub description: String,
}

impl PlanEntry {
    /// Update payload for this entry
    pub fn update(&self) -> MilestoneUpdate {
        MilestoneUpdate {
            title: self.target_title.clone(),
            description: self.description.clone(),
        }
    }
}

impl std::fmt::Display for PlanEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{}: \"{}\" -> {}",
            self.source_number, self.old_title, self.target_title
        )
    }
}

/// Rename plan - the functional core output
///
/// Created by [`create_change_plan`] (pure) and consumed by
/// [`apply_plan`](crate::normalize::apply_plan) (effectful).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangePlan {
    /// Renames in snapshot order
    pub entries: Vec<PlanEntry>,
    /// Number of milestones in the snapshot the plan was built from
    pub snapshot_len: usize,
    /// Numbers of milestones whose titles are already canonical
    pub canonical_numbers: Vec<u64>,
}

impl ChangePlan {
    /// Whether there is nothing to rename
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of planned renames
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Target numbers that more than one milestone would end up with
    ///
    /// Two `M3 - ...` titles both become `M3`, and a `M3 - ...` title next to
    /// an existing `M3` does too. The plan keeps those entries as they are;
    /// this only reports them so the preview can warn.
    #[must_use]
    pub fn duplicate_targets(&self) -> Vec<u64> {
        let mut counts: BTreeMap<u64, usize> = BTreeMap::new();
        for number in self
            .canonical_numbers
            .iter()
            .copied()
            .chain(self.entries.iter().map(|e| e.target_number))
        {
            *counts.entry(number).or_default() += 1;
        }
        counts
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|(number, _)| number)
            .collect()
    }
}

/// Combine focus text and the previous description into named sections
///
/// Each section is left out when its text is blank.
pub fn compose_description(focus: &str, details: &str) -> String {
    let mut sections = Vec::with_capacity(2);

    let focus = focus.trim();
    if !focus.is_empty() {
        sections.push(format!("## Focus\n{focus}"));
    }

    let details = details.trim();
    if !details.is_empty() {
        sections.push(format!("## Details\n{details}"));
    }

    sections.join("\n\n")
}

/// Create a change plan (PURE - no I/O, easily testable)
///
/// Every number named by an exact or suffixed title is reserved before any
/// free number is handed out, so an unnumbered milestone can never be given
/// a number that a later milestone in the snapshot already uses. Free numbers
/// are then allocated in snapshot order, starting from 0.
#[must_use]
pub fn create_change_plan(milestones: &[Milestone]) -> ChangePlan {
    let classified: Vec<ClassifiedTitle> =
        milestones.iter().map(|m| classify_title(&m.title)).collect();

    let mut reserved: ReservedNumbers = classified
        .iter()
        .filter_map(ClassifiedTitle::explicit_number)
        .collect();

    let mut entries = Vec::new();
    let mut canonical_numbers = Vec::new();

    for (milestone, title) in milestones.iter().zip(classified) {
        let classification = title.kind();
        let (target_number, focus_text) = match title {
            ClassifiedTitle::Exact { number } => {
                canonical_numbers.push(number);
                continue;
            }
            ClassifiedTitle::WithSuffix { number, focus } => (number, focus),
            ClassifiedTitle::Other { focus } => (reserved.allocate(), focus),
        };

        let description = compose_description(&focus_text, &milestone.description);
        entries.push(PlanEntry {
            source_number: milestone.number,
            old_title: milestone.title.clone(),
            classification,
            target_number,
            target_title: short_title(target_number),
            focus_text,
            description,
        });
    }

    ChangePlan {
        entries,
        snapshot_len: milestones.len(),
        canonical_numbers,
    }
}
