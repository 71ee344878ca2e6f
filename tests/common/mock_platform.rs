//! Mock platform service for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use msnorm::error::{Error, Result};
use msnorm::platform::PlatformService;
use msnorm::types::{
    Milestone, MilestoneUpdate, Platform, PlatformConfig, StateFilter,
};
use std::collections::HashSet;
use std::sync::Mutex;

/// Call record for `list_milestones`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCall {
    pub state: StateFilter,
    pub page: u32,
    pub per_page: u32,
}

/// Call record for `update_milestone`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCall {
    pub number: u64,
    pub title: String,
    pub description: String,
}

/// Simple mock platform service for testing
///
/// Serves a fixed list of milestones, paginated the way the real APIs do,
/// and applies updates to its own copy so a second run sees the result.
///
/// Features:
/// - Call tracking for verification
/// - Error injection per page and per milestone
pub struct MockPlatformService {
    config: PlatformConfig,
    milestones: Mutex<Vec<Milestone>>,
    // Call tracking
    list_calls: Mutex<Vec<ListCall>>,
    update_calls: Mutex<Vec<UpdateCall>>,
    // Error injection
    fail_on_page: Mutex<Option<(u32, String)>>,
    fail_updates_for: Mutex<HashSet<u64>>,
}

impl MockPlatformService {
    /// Create a mock serving `milestones`
    pub fn with_milestones(milestones: Vec<Milestone>) -> Self {
        Self {
            config: github_config(),
            milestones: Mutex::new(milestones),
            list_calls: Mutex::new(Vec::new()),
            update_calls: Mutex::new(Vec::new()),
            fail_on_page: Mutex::new(None),
            fail_updates_for: Mutex::new(HashSet::new()),
        }
    }

    /// Create a mock with no milestones
    pub fn empty() -> Self {
        Self::with_milestones(Vec::new())
    }

    // === Error injection methods ===

    /// Make `list_milestones` fail for `page`
    pub fn fail_page(&self, page: u32, msg: &str) {
        *self.fail_on_page.lock().unwrap() = Some((page, msg.to_string()));
    }

    /// Make `update_milestone` fail for milestone `number`
    pub fn fail_update(&self, number: u64) {
        self.fail_updates_for.lock().unwrap().insert(number);
    }

    // === Call inspection ===

    pub fn list_calls(&self) -> Vec<ListCall> {
        self.list_calls.lock().unwrap().clone()
    }

    pub fn update_calls(&self) -> Vec<UpdateCall> {
        self.update_calls.lock().unwrap().clone()
    }

    /// Current milestones, with applied updates
    pub fn milestones(&self) -> Vec<Milestone> {
        self.milestones.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn list_milestones(
        &self,
        state: StateFilter,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Milestone>> {
        self.list_calls.lock().unwrap().push(ListCall {
            state,
            page,
            per_page,
        });

        if let Some((fail_page, msg)) = self.fail_on_page.lock().unwrap().clone()
            && fail_page == page
        {
            return Err(Error::GitHubApi(msg));
        }

        let start = ((page - 1) * per_page) as usize;
        let items = self
            .milestones
            .lock()
            .unwrap()
            .iter()
            .skip(start)
            .take(per_page as usize)
            .cloned()
            .collect();
        Ok(items)
    }

    async fn update_milestone(&self, number: u64, update: &MilestoneUpdate) -> Result<Milestone> {
        self.update_calls.lock().unwrap().push(UpdateCall {
            number,
            title: update.title.clone(),
            description: update.description.clone(),
        });

        if self.fail_updates_for.lock().unwrap().contains(&number) {
            return Err(Error::GitHubApi(format!("Validation Failed for #{number}")));
        }

        let mut milestones = self.milestones.lock().unwrap();
        let milestone = milestones
            .iter_mut()
            .find(|m| m.number == number)
            .ok_or_else(|| Error::GitHubApi(format!("Not Found: #{number}")))?;
        milestone.title = update.title.clone();
        milestone.description = update.description.clone();
        Ok(milestone.clone())
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}

/// GitHub config for `test/repo`
pub fn github_config() -> PlatformConfig {
    PlatformConfig {
        platform: Platform::GitHub,
        owner: "test".to_string(),
        repo: "repo".to_string(),
        host: None,
    }
}
