//! Configuration file in `<config dir>/msnorm/config.toml`.
//!
//! Values here are defaults; command line flags and `MSNORM_*` environment
//! variables override them.

use crate::error::{Error, Result};
use crate::normalize::MAX_PER_PAGE;
use crate::types::{Platform, StateFilter};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the user's config dir.
const CONFIG_DIR: &str = "msnorm";

/// Filename for the config file.
const CONFIG_FILE: &str = "config.toml";

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV: &str = "MSNORM_CONFIG";

/// User configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default `owner/name` repository
    pub repo: Option<String>,
    /// Platform for `repo` (GitHub when unset)
    pub platform: Option<Platform>,
    /// Custom host for `repo`
    pub host: Option<String>,
    /// Default state filter
    pub state: Option<StateFilter>,
    /// Default page size
    pub per_page: Option<u32>,
}

impl Config {
    /// Reject values the normalizer cannot use
    pub fn validate(&self) -> Result<()> {
        if let Some(per_page) = self.per_page
            && (per_page == 0 || per_page > MAX_PER_PAGE)
        {
            return Err(Error::Config(format!(
                "per_page must be between 1 and {MAX_PER_PAGE}, got {per_page}"
            )));
        }
        if let Some(ref repo) = self.repo
            && !repo.contains('/')
        {
            return Err(Error::Config(format!(
                "repo must look like owner/name, got '{repo}'"
            )));
        }
        Ok(())
    }
}

/// Default location of the config file, if the platform has a config dir.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load and validate config from `path`.
///
/// Returns an empty `Config` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;

    config.validate()?;
    Ok(config)
}

/// Load config from the default location.
pub fn load_default_config() -> Result<Config> {
    config_path().map_or_else(|| Ok(Config::default()), |path| load_config(&path))
}
