//! # Settings Resolution
//!
//! Resolves the releases client configuration from command-line flags, the
//! environment, and an optional TOML settings file, in that order of
//! precedence.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::Deserialize;
use shipit_gh::ClientConfig;
use tracing::debug;

use crate::consts::{
  CONFIG_FILE_NAME, ENV_GITHUB_ACCESS_TOKEN, ENV_GITHUB_API_URL, ENV_GITHUB_REPOSITORY, ENV_GITHUB_USER,
};

/// Settings read from `config.toml`
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileSettings {
  pub owner: Option<String>,
  pub repository: Option<String>,
  pub api_url: Option<String>,
  pub token: Option<String>,
  pub timeout_secs: Option<u64>,
}

/// Values given explicitly on the command line
#[derive(Debug, Default, Clone)]
pub struct Overrides {
  pub owner: Option<String>,
  pub repository: Option<String>,
  pub api_url: Option<String>,
}

/// Default location of the settings file
pub fn default_config_path() -> Option<PathBuf> {
  ProjectDirs::from("", "", "shipit").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Load the settings file.
///
/// An explicitly requested file must exist; the default location is optional.
pub fn load_file_settings(explicit: Option<&Path>) -> Result<FileSettings> {
  let path = match explicit {
    Some(path) => path.to_path_buf(),
    None => match default_config_path() {
      Some(path) if path.exists() => path,
      _ => return Ok(FileSettings::default()),
    },
  };

  debug!("Loading settings from {}", path.display());
  let content = fs::read_to_string(&path).with_context(|| format!("Failed to read settings file {}", path.display()))?;
  parse_file_settings(&content).with_context(|| format!("Failed to parse settings file {}", path.display()))
}

pub fn parse_file_settings(content: &str) -> Result<FileSettings> {
  Ok(toml::from_str(content)?)
}

/// Merge flags, environment, and file settings into a client configuration.
///
/// `lookup` reads an environment variable; blank values count as unset.
pub fn resolve<F>(overrides: &Overrides, file: FileSettings, lookup: F) -> Result<ClientConfig>
where
  F: Fn(&str) -> Option<String>,
{
  let env = |key: &str| non_blank(lookup(key).as_deref());

  let (env_repo_owner, env_repository) = match env(ENV_GITHUB_REPOSITORY) {
    Some(value) => match value.split_once('/') {
      Some((owner, repo)) => (non_blank(Some(owner)), non_blank(Some(repo))),
      None => (None, Some(value)),
    },
    None => (None, None),
  };

  let owner = non_blank(overrides.owner.as_deref())
    .or_else(|| env(ENV_GITHUB_USER))
    .or(env_repo_owner)
    .or_else(|| non_blank(file.owner.as_deref()));
  let repository = non_blank(overrides.repository.as_deref())
    .or(env_repository)
    .or_else(|| non_blank(file.repository.as_deref()));

  let Some(owner) = owner else {
    bail!("Repository owner is not configured. Use --owner, set {ENV_GITHUB_USER}, or add 'owner' to the settings file");
  };
  let Some(repository) = repository else {
    bail!(
      "Repository name is not configured. Use --repo, set {ENV_GITHUB_REPOSITORY}, or add 'repository' to the settings file"
    );
  };

  let mut config = ClientConfig::new(owner, repository);

  if let Some(api_url) = non_blank(overrides.api_url.as_deref())
    .or_else(|| env(ENV_GITHUB_API_URL))
    .or_else(|| non_blank(file.api_url.as_deref()))
  {
    config = config.with_api_url(api_url);
  }
  if let Some(token) = env(ENV_GITHUB_ACCESS_TOKEN).or(file.token) {
    config = config.with_token(token);
  }
  if let Some(secs) = file.timeout_secs {
    config = config.with_timeout(Duration::from_secs(secs));
  }

  Ok(config)
}

/// Trimmed value, with blank counting as unset
fn non_blank(value: Option<&str>) -> Option<String> {
  value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}
