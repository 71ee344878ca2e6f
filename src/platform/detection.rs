//! Platform detection from remote URLs and `owner/name` slugs

use crate::error::{Error, Result};
use crate::types::{Platform, PlatformConfig};
use std::env;
use url::Url;

const GITHUB_HOST: &str = "github.com";
const GITLAB_HOST: &str = "gitlab.com";

/// Split a remote URL into `(host, path)`
///
/// Handles `https://host/path`, `ssh://git@host/path` and scp-like
/// `git@host:path`.
fn split_remote_url(url: &str) -> Option<(String, String)> {
    let url = url.trim();

    if url.contains("://") {
        let parsed = Url::parse(url).ok()?;
        let host = parsed.host_str()?.to_string();
        return Some((host, parsed.path().to_string()));
    }

    // scp-like: [user@]host:path
    let (host_part, path) = url.split_once(':')?;
    let host = host_part.rsplit('@').next()?.to_string();
    if host.is_empty() || path.is_empty() {
        return None;
    }
    Some((host, path.to_string()))
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok()
}

fn clean_path(path: &str) -> String {
    let path = path.trim_matches('/');
    path.strip_suffix(".git").unwrap_or(path).to_string()
}

/// Platform served by `host`
///
/// Besides the public hosts and any host naming the platform, the
/// self-hosted instances named by `GH_HOST`/`GITLAB_HOST` (read through
/// `lookup`) are recognized.
fn platform_for_host(host: &str, lookup: impl Fn(&str) -> Option<String>) -> Option<Platform> {
    let host = host.to_ascii_lowercase();
    let matches_env = |var: &str| lookup(var).is_some_and(|h| h.eq_ignore_ascii_case(&host));

    if host == GITHUB_HOST || host.contains("github") || matches_env("GH_HOST") {
        Some(Platform::GitHub)
    } else if host == GITLAB_HOST || host.contains("gitlab") || matches_env("GITLAB_HOST") {
        Some(Platform::GitLab)
    } else {
        None
    }
}

/// Detect which platform a remote URL points at
pub fn detect_platform(url: &str) -> Option<Platform> {
    let (host, _) = split_remote_url(url)?;
    platform_for_host(&host, env_var)
}

/// Build a platform config from a remote URL
///
/// GitLab owners may be nested group paths (`group/sub/project`); GitHub
/// owners are a single segment.
pub fn parse_repo_info(url: &str) -> Result<PlatformConfig> {
    parse_repo_info_with(url, env_var)
}

fn parse_repo_info_with(
    url: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<PlatformConfig> {
    let (host, path) = split_remote_url(url).ok_or(Error::NoSupportedRemotes)?;
    let platform = platform_for_host(&host, lookup).ok_or(Error::NoSupportedRemotes)?;

    let path = clean_path(&path);
    let (owner, repo) = path
        .rsplit_once('/')
        .filter(|(owner, repo)| !owner.is_empty() && !repo.is_empty())
        .ok_or_else(|| Error::InvalidRepo(path.clone()))?;

    if platform == Platform::GitHub && owner.contains('/') {
        return Err(Error::InvalidRepo(path.clone()));
    }

    let default_host = match platform {
        Platform::GitHub => GITHUB_HOST,
        Platform::GitLab => GITLAB_HOST,
    };
    let host = (!host.eq_ignore_ascii_case(default_host)).then_some(host);

    Ok(PlatformConfig {
        platform,
        owner: owner.to_string(),
        repo: repo.to_string(),
        host,
    })
}

/// Build a platform config from an explicit `owner/name` slug
pub fn parse_repo_slug(
    slug: &str,
    platform: Platform,
    host: Option<String>,
) -> Result<PlatformConfig> {
    let cleaned = clean_path(slug.trim());
    let (owner, repo) = cleaned
        .rsplit_once('/')
        .filter(|(owner, repo)| !owner.is_empty() && !repo.is_empty())
        .ok_or_else(|| Error::InvalidRepo(slug.to_string()))?;

    if platform == Platform::GitHub && owner.contains('/') {
        return Err(Error::InvalidRepo(slug.to_string()));
    }

    Ok(PlatformConfig {
        platform,
        owner: owner.to_string(),
        repo: repo.to_string(),
        host,
    })
}
