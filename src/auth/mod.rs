//! Authentication for GitHub and GitLab
//!
//! Supports environment variables and CLI-based auth (gh, glab).

mod github;
mod gitlab;

pub use github::{GitHubAuthConfig, get_github_auth, test_github_auth};
pub use gitlab::{GitLabAuthConfig, get_gitlab_auth, test_gitlab_auth};

use tokio::process::Command;

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from CLI tool (gh or glab)
    Cli,
    /// Token from environment variable
    EnvVar,
}

impl std::fmt::Display for AuthSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::EnvVar => write!(f, "environment variable"),
        }
    }
}

/// Process environment lookup
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// First non-empty value among `vars`, read through `lookup`
fn token_from_env(vars: &[&str], lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    vars.iter()
        .filter_map(|var| lookup(var))
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

/// Run a token-printing CLI command, returning its trimmed stdout
///
/// A missing binary or non-zero exit yields `None`.
async fn token_from_cli(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().await.ok()?;
    if !output.status.success() {
        return None;
    }
    let token = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_first_set_var_wins() {
        let token = token_from_env(&["A", "B"], lookup(&[("A", "first"), ("B", "second")]));
        assert_eq!(token.as_deref(), Some("first"));
    }

    #[test]
    fn test_blank_var_falls_through() {
        let token = token_from_env(&["A", "B"], lookup(&[("A", "   "), ("B", " second\n")]));
        assert_eq!(token.as_deref(), Some("second"));
    }

    #[test]
    fn test_no_vars_set() {
        assert_eq!(token_from_env(&["A", "B"], lookup(&[])), None);
    }
}
