//! GitHub token discovery

use super::{AuthSource, env_var, token_from_cli, token_from_env};
use crate::error::{Error, Result};
use octocrab::Octocrab;
use tracing::debug;

/// Environment variables checked for a GitHub token, in order
const TOKEN_VARS: &[&str] = &["GH_TOKEN", "GITHUB_TOKEN"];

/// Resolved GitHub credentials
#[derive(Debug, Clone)]
pub struct GitHubAuthConfig {
    /// Personal access token
    pub token: String,
    /// Where the token came from
    pub source: AuthSource,
    /// Enterprise host, if any
    pub host: Option<String>,
}

/// Find a GitHub token
///
/// Checks `GH_TOKEN` and `GITHUB_TOKEN`, then falls back to `gh auth token`.
pub async fn get_github_auth(host: Option<&str>) -> Result<GitHubAuthConfig> {
    if let Some(token) = token_from_env(TOKEN_VARS, env_var) {
        debug!("using GitHub token from environment");
        return Ok(GitHubAuthConfig {
            token,
            source: AuthSource::EnvVar,
            host: host.map(String::from),
        });
    }

    let mut args = vec!["auth", "token"];
    if let Some(h) = host {
        args.extend(["--hostname", h]);
    }
    if let Some(token) = token_from_cli("gh", &args).await {
        debug!("using GitHub token from gh CLI");
        return Ok(GitHubAuthConfig {
            token,
            source: AuthSource::Cli,
            host: host.map(String::from),
        });
    }

    Err(Error::Auth(
        "no GitHub token found. Set GH_TOKEN or run 'gh auth login'".to_string(),
    ))
}

/// Verify a token by fetching the authenticated user; returns the login
pub async fn test_github_auth(config: &GitHubAuthConfig) -> Result<String> {
    let mut builder = Octocrab::builder().personal_token(config.token.clone());
    if let Some(ref h) = config.host {
        builder = builder
            .base_uri(format!("https://{h}/api/v3"))
            .map_err(|e| Error::GitHubApi(e.to_string()))?;
    }
    let client = builder
        .build()
        .map_err(|e| Error::GitHubApi(e.to_string()))?;

    let user = client
        .current()
        .user()
        .await
        .map_err(|e| Error::Auth(format!("GitHub rejected the token: {e}")))?;
    Ok(user.login)
}
