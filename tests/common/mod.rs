//! Shared test fixtures

#![allow(dead_code)]

mod mock_platform;

pub use mock_platform::{ListCall, MockPlatformService, UpdateCall, github_config};

use msnorm::types::Milestone;

/// Build milestones from `(number, title)` pairs
pub fn milestones(items: &[(u64, &str)]) -> Vec<Milestone> {
    items
        .iter()
        .map(|&(number, title)| Milestone::new(number, title))
        .collect()
}

/// `count` milestones titled `Sprint <n>`, numbered from 1
pub fn numbered_sprints(count: u64) -> Vec<Milestone> {
    (1..=count)
        .map(|n| Milestone::new(n, format!("Sprint {n}")))
        .collect()
}
