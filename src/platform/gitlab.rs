//! GitLab platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{
    Milestone, MilestoneState, MilestoneUpdate, Platform, PlatformConfig, StateFilter,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::debug;

/// GitLab service using reqwest
pub struct GitLabService {
    client: Client,
    token: String,
    api_base: String,
    config: PlatformConfig,
    project_path: String,
}

/// Project milestone as returned by the REST API
///
/// `iid` is the number shown in the UI; `id` is what the update endpoint
/// addresses, so that is what ends up in `Milestone::number`.
#[derive(Deserialize)]
struct GitLabMilestone {
    id: u64,
    title: String,
    description: Option<String>,
    state: String, // "active" or "closed"
    due_date: Option<NaiveDate>,
    web_url: Option<String>,
}

impl From<GitLabMilestone> for Milestone {
    fn from(m: GitLabMilestone) -> Self {
        Self {
            number: m.id,
            title: m.title,
            description: m.description.unwrap_or_default(),
            state: if m.state == "closed" {
                MilestoneState::Closed
            } else {
                MilestoneState::Open
            },
            due_date: m.due_date,
            html_url: m.web_url,
        }
    }
}

impl GitLabService {
    /// Create a new GitLab service
    pub fn new(token: String, owner: String, repo: String, host: Option<String>) -> Result<Self> {
        let api_base = format!(
            "https://{}/api/v4",
            host.as_deref().unwrap_or("gitlab.com")
        );
        Self::with_api_base(token, owner, repo, host, api_base)
    }

    /// Create a service against an explicit API base (`.../api/v4`)
    pub fn with_api_base(
        token: String,
        owner: String,
        repo: String,
        host: Option<String>,
        api_base: String,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent("msnorm")
            .build()
            .map_err(|e| Error::GitLabApi(format!("Failed to create HTTP client: {e}")))?;

        let project_path = urlencoding::encode(&format!("{owner}/{repo}")).into_owned();

        Ok(Self {
            client,
            token,
            api_base: api_base.trim_end_matches('/').to_string(),
            config: PlatformConfig {
                platform: Platform::GitLab,
                owner,
                repo,
                host,
            },
            project_path,
        })
    }

    fn milestones_url(&self) -> String {
        format!(
            "{}/projects/{}/milestones",
            self.api_base, self.project_path
        )
    }

    async fn check_status(response: Response, action: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(Error::GitLabApi(format!("{action} failed ({status}): {body}")))
    }
}

#[async_trait]
impl PlatformService for GitLabService {
    async fn list_milestones(
        &self,
        state: StateFilter,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Milestone>> {
        debug!(%state, page, per_page, "listing milestones");
        let mut query = vec![
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
        ];
        match state {
            StateFilter::Open => query.push(("state", "active".to_string())),
            StateFilter::Closed => query.push(("state", "closed".to_string())),
            StateFilter::All => {}
        }

        let response = self
            .client
            .get(self.milestones_url())
            .header("PRIVATE-TOKEN", &self.token)
            .query(&query)
            .send()
            .await?;
        let response = Self::check_status(response, "listing milestones").await?;

        let items: Vec<GitLabMilestone> = response.json().await?;
        debug!(page, count = items.len(), "listed milestones");
        Ok(items.into_iter().map(Milestone::from).collect())
    }

    async fn update_milestone(&self, number: u64, update: &MilestoneUpdate) -> Result<Milestone> {
        debug!(number, title = %update.title, "updating milestone");
        let url = format!("{}/{number}", self.milestones_url());

        let response = self
            .client
            .put(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .json(update)
            .send()
            .await?;
        let response =
            Self::check_status(response, &format!("updating milestone {number}")).await?;

        let updated: GitLabMilestone = response.json().await?;
        debug!(number, "updated milestone");
        Ok(updated.into())
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
