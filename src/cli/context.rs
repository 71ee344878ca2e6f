//! Shared command context for CLI commands
//!
//! Extracts common setup code shared by normalize and list.

use clap::Args;
use msnorm::config::{Config, load_default_config};
use msnorm::error::{Error, Result};
use msnorm::normalize::DEFAULT_PER_PAGE;
use msnorm::platform::{
    PlatformService, create_platform_service, parse_repo_info, parse_repo_slug,
};
use msnorm::repo::{git_remotes, select_remote};
use msnorm::types::{Platform, PlatformConfig, StateFilter};
use std::path::Path;
use tracing::debug;

/// Repository selection and listing flags
#[derive(Debug, Clone, Default, Args)]
pub struct RepoArgs {
    /// Repository as owner/name (default: detected from the git remote)
    #[arg(long, short = 'R', env = "MSNORM_REPO")]
    pub repo: Option<String>,

    /// Git remote to detect the repository from (default: origin)
    #[arg(long)]
    pub remote: Option<String>,

    /// Which milestones to fetch: open, closed or all (default: all)
    #[arg(long, env = "MSNORM_STATE")]
    pub state: Option<StateFilter>,

    /// Milestones per page, 1-100 (default: 100)
    #[arg(long, env = "MSNORM_PER_PAGE", value_parser = clap::value_parser!(u32).range(1..=100))]
    pub per_page: Option<u32>,
}

/// Shared context for CLI commands that interact with the platform
///
/// This struct encapsulates the common setup:
/// - Loading the config file
/// - Resolving the repository (flag, config, or git remote)
/// - Authenticating and creating the platform service
pub struct CommandContext {
    /// Platform service (GitHub/GitLab)
    pub platform: Box<dyn PlatformService>,
    /// State filter to fetch with
    pub state: StateFilter,
    /// Page size to fetch with
    pub per_page: u32,
}

impl CommandContext {
    /// Create a new command context
    pub async fn new(path: &Path, args: &RepoArgs) -> Result<Self> {
        let config = load_default_config()?;
        let platform_config = resolve_platform_config(path, args, &config)?;
        debug!(
            platform = %platform_config.platform,
            repo = %platform_config.slug(),
            "resolved repository"
        );

        let platform = create_platform_service(&platform_config).await?;

        Ok(Self {
            platform,
            state: args.state.or(config.state).unwrap_or_default(),
            per_page: args.per_page.or(config.per_page).unwrap_or(DEFAULT_PER_PAGE),
        })
    }

    /// `owner/name` of the selected repository
    pub fn repo_slug(&self) -> String {
        self.platform.config().slug()
    }
}

/// Pick the repository: `--repo`/`MSNORM_REPO`, then the config file, then
/// the git remote of the repository containing `path`
fn resolve_platform_config(
    path: &Path,
    args: &RepoArgs,
    config: &Config,
) -> Result<PlatformConfig> {
    if let Some(slug) = args.repo.as_deref().or(config.repo.as_deref()) {
        return parse_repo_slug(
            slug,
            config.platform.unwrap_or(Platform::GitHub),
            config.host.clone(),
        );
    }

    let remotes = git_remotes(path)?;
    let remote_name = select_remote(&remotes, args.remote.as_deref())?;
    let remote = remotes
        .iter()
        .find(|r| r.name == remote_name)
        .ok_or_else(|| Error::RemoteNotFound(remote_name.clone()))?;

    parse_repo_info(&remote.url)
}
