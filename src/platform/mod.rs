//! Platform services for GitHub and GitLab
//!
//! Provides a unified interface for milestone operations across platforms.

mod detection;
mod factory;
mod github;
mod gitlab;

pub use detection::{detect_platform, parse_repo_info, parse_repo_slug};
pub use factory::create_platform_service;
pub use github::GitHubService;
pub use gitlab::GitLabService;

use crate::error::Result;
use crate::types::{Milestone, MilestoneUpdate, PlatformConfig, StateFilter};
use async_trait::async_trait;

/// Platform service trait for milestone operations
///
/// This trait abstracts GitHub and GitLab, allowing the same normalizer
/// logic to work with either platform.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// List one page of milestones
    ///
    /// `page` is 1-based. A page shorter than `per_page` means there are no
    /// further pages.
    async fn list_milestones(
        &self,
        state: StateFilter,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Milestone>>;

    /// Rename a milestone and replace its description
    async fn update_milestone(&self, number: u64, update: &MilestoneUpdate) -> Result<Milestone>;

    /// Get the platform configuration
    fn config(&self) -> &PlatformConfig;
}
