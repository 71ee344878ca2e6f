//! Error types for msnorm

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can abort a normalizer run
///
/// Setup errors (auth, config, repository resolution) and fetch errors are
/// fatal. Failures of individual milestone updates are not represented here;
/// they are collected in [`crate::normalize::ApplyResult`] and only surface as
/// [`Error::PartialApply`] once every entry has been attempted.
#[derive(Debug, Error)]
pub enum Error {
    /// Authentication token could not be found or was rejected
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Invalid or unreadable configuration
    #[error("config error: {0}")]
    Config(String),

    /// `owner/name` could not be parsed
    #[error("invalid repository '{0}': expected owner/name")]
    InvalidRepo(String),

    /// Named git remote does not exist
    #[error("remote '{0}' not found")]
    RemoteNotFound(String),

    /// No remote points at a supported platform
    #[error("no supported remotes found (GitHub or GitLab)")]
    NoSupportedRemotes,

    /// Local git repository could not be opened
    #[error("git error: {0}")]
    Git(String),

    /// A page of the milestone listing could not be fetched
    #[error("failed to fetch milestones (page {page}): {message}")]
    Fetch {
        /// 1-based page number that failed
        page: u32,
        /// Underlying error text
        message: String,
    },

    /// GitHub API error
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// GitLab API error
    #[error("GitLab API error: {0}")]
    GitLabApi(String),

    /// Some planned updates failed
    #[error("{failed} milestone update(s) failed ({updated} succeeded)")]
    PartialApply {
        /// Entries updated successfully
        updated: usize,
        /// Entries whose update call failed
        failed: usize,
    },

    /// Snapshot export failed
    #[error("snapshot export failed: {0}")]
    Snapshot(String),

    /// Filesystem error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Anything that should not happen
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<octocrab::Error> for Error {
    fn from(e: octocrab::Error) -> Self {
        Self::GitHubApi(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::GitLabApi(e.to_string())
    }
}
