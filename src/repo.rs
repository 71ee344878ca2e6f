//! Local git repository inspection

use crate::error::{Error, Result};
use crate::types::GitRemote;
use std::path::Path;

/// List the remotes of the git repository containing `path`
pub fn git_remotes(path: &Path) -> Result<Vec<GitRemote>> {
    let repo = gix::discover(path).map_err(|e| Error::Git(e.to_string()))?;

    let mut remotes = Vec::new();
    for name in repo.remote_names() {
        let remote = repo
            .find_remote(name.as_ref())
            .map_err(|e| Error::Git(e.to_string()))?;
        if let Some(url) = remote.url(gix::remote::Direction::Fetch) {
            remotes.push(GitRemote {
                name: name.to_string(),
                url: url.to_bstring().to_string(),
            });
        }
    }
    Ok(remotes)
}

/// Pick a remote by name, or `origin`, or the first one
pub fn select_remote(remotes: &[GitRemote], requested: Option<&str>) -> Result<String> {
    if let Some(name) = requested {
        return remotes
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.name.clone())
            .ok_or_else(|| Error::RemoteNotFound(name.to_string()));
    }

    remotes
        .iter()
        .find(|r| r.name == "origin")
        .or_else(|| remotes.first())
        .map(|r| r.name.clone())
        .ok_or(Error::NoSupportedRemotes)
}
