//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{
    Milestone, MilestoneState, MilestoneUpdate, Platform, PlatformConfig, StateFilter,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Milestone as returned by the REST API
#[derive(Deserialize)]
struct GitHubMilestone {
    number: u64,
    title: String,
    description: Option<String>,
    state: String,
    due_on: Option<DateTime<Utc>>,
    html_url: Option<String>,
}

impl From<GitHubMilestone> for Milestone {
    fn from(m: GitHubMilestone) -> Self {
        Self {
            number: m.number,
            title: m.title,
            description: m.description.unwrap_or_default(),
            state: if m.state == "open" {
                MilestoneState::Open
            } else {
                MilestoneState::Closed
            },
            due_date: m.due_on.map(|d| d.date_naive()),
            html_url: m.html_url,
        }
    }
}

#[derive(Serialize)]
struct ListParams {
    state: &'static str,
    page: u32,
    per_page: u32,
}

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    config: PlatformConfig,
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// `host` selects a GitHub Enterprise instance; its API lives under
    /// `https://{host}/api/v3`.
    pub fn new(token: &str, owner: String, repo: String, host: Option<String>) -> Result<Self> {
        let base_uri = host.as_ref().map(|h| format!("https://{h}/api/v3"));
        Self::build(token, owner, repo, host, base_uri.as_deref())
    }

    /// Create a service against an explicit API base URI
    pub fn with_base_uri(token: &str, owner: String, repo: String, base_uri: &str) -> Result<Self> {
        Self::build(token, owner, repo, None, Some(base_uri))
    }

    fn build(
        token: &str,
        owner: String,
        repo: String,
        host: Option<String>,
        base_uri: Option<&str>,
    ) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(uri) = base_uri {
            builder = builder
                .base_uri(uri)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
        }

        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        Ok(Self {
            client,
            config: PlatformConfig {
                platform: Platform::GitHub,
                owner,
                repo,
                host,
            },
        })
    }

    fn milestones_route(&self) -> String {
        format!(
            "/repos/{}/{}/milestones",
            self.config.owner, self.config.repo
        )
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn list_milestones(
        &self,
        state: StateFilter,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Milestone>> {
        debug!(%state, page, per_page, "listing milestones");
        let params = ListParams {
            state: state.as_str(),
            page,
            per_page,
        };

        let items: Vec<GitHubMilestone> = self
            .client
            .get(self.milestones_route(), Some(&params))
            .await?;

        debug!(page, count = items.len(), "listed milestones");
        Ok(items.into_iter().map(Milestone::from).collect())
    }

    async fn update_milestone(&self, number: u64, update: &MilestoneUpdate) -> Result<Milestone> {
        debug!(number, title = %update.title, "updating milestone");
        let route = format!("{}/{number}", self.milestones_route());

        let updated: GitHubMilestone = self
            .client
            .patch(route, Some(update))
            .await
            .map_err(|e| Error::GitHubApi(format!("failed to update milestone #{number}: {e}")))?;

        debug!(number, "updated milestone");
        Ok(updated.into())
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
