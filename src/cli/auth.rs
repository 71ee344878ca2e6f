//! Auth command - check which token would be used

use crate::cli::Output;
use crate::cli::style::{Stylize, check};
use clap::Subcommand;
use msnorm::auth::{get_github_auth, get_gitlab_auth, test_github_auth, test_gitlab_auth};
use msnorm::error::Result;

/// Platforms that can be checked
#[derive(Debug, Clone, Subcommand)]
pub enum AuthCommand {
    /// Check GitHub authentication
    Github {
        /// GitHub Enterprise host
        #[arg(long)]
        host: Option<String>,
    },
    /// Check GitLab authentication
    Gitlab {
        /// Self-hosted GitLab host
        #[arg(long)]
        host: Option<String>,
    },
}

/// Run the auth command
pub async fn run_auth(command: AuthCommand, output: Output) -> Result<()> {
    let (platform, user, source) = match command {
        AuthCommand::Github { host } => {
            let auth = get_github_auth(host.as_deref()).await?;
            let user = test_github_auth(&auth).await?;
            ("GitHub", user, auth.source)
        }
        AuthCommand::Gitlab { host } => {
            let auth = get_gitlab_auth(host.as_deref()).await?;
            let user = test_gitlab_auth(&auth).await?;
            ("GitLab", user, auth.source)
        }
    };

    output.always(format!(
        "{} Authenticated to {} as {} {}",
        check(),
        platform,
        user.accent(),
        format!("(token from {source})").muted()
    ));
    Ok(())
}
