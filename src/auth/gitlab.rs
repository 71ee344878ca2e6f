//! GitLab token discovery

use super::{AuthSource, env_var, token_from_cli, token_from_env};
use crate::error::{Error, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Environment variables checked for a GitLab token, in order
const TOKEN_VARS: &[&str] = &["GITLAB_TOKEN", "GL_TOKEN"];

/// Resolved GitLab credentials
#[derive(Debug, Clone)]
pub struct GitLabAuthConfig {
    /// Personal access token
    pub token: String,
    /// Where the token came from
    pub source: AuthSource,
    /// Instance host (`gitlab.com` when not self-hosted)
    pub host: String,
}

/// Find a GitLab token
///
/// Checks `GITLAB_TOKEN` and `GL_TOKEN`, then falls back to
/// `glab config get token`.
pub async fn get_gitlab_auth(host: Option<&str>) -> Result<GitLabAuthConfig> {
    let host = host.unwrap_or("gitlab.com").to_string();

    if let Some(token) = token_from_env(TOKEN_VARS, env_var) {
        debug!("using GitLab token from environment");
        return Ok(GitLabAuthConfig {
            token,
            source: AuthSource::EnvVar,
            host,
        });
    }

    if let Some(token) =
        token_from_cli("glab", &["config", "get", "token", "--host", &host]).await
    {
        debug!("using GitLab token from glab CLI");
        return Ok(GitLabAuthConfig {
            token,
            source: AuthSource::Cli,
            host,
        });
    }

    Err(Error::Auth(
        "no GitLab token found. Set GITLAB_TOKEN or run 'glab auth login'".to_string(),
    ))
}

/// Verify a token by fetching the current user; returns the username
pub async fn test_gitlab_auth(config: &GitLabAuthConfig) -> Result<String> {
    #[derive(Deserialize)]
    struct User {
        username: String,
    }

    let response = Client::new()
        .get(format!("https://{}/api/v4/user", config.host))
        .header("PRIVATE-TOKEN", &config.token)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(Error::Auth(format!(
            "GitLab rejected the token ({})",
            response.status()
        )));
    }

    let user: User = response.json().await?;
    Ok(user.username)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_var_precedence() {
        let both = |name: &str| match name {
            "GITLAB_TOKEN" => Some("primary".to_string()),
            "GL_TOKEN" => Some("fallback".to_string()),
            _ => None,
        };
        assert_eq!(token_from_env(TOKEN_VARS, both).as_deref(), Some("primary"));

        let only_second = |name: &str| (name == "GL_TOKEN").then(|| "fallback".to_string());
        assert_eq!(
            token_from_env(TOKEN_VARS, only_second).as_deref(),
            Some("fallback")
        );
    }
}
