use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use shipit_gh::{CreateReleaseParams, ReleasesClient};
use tokio::runtime::Runtime;
use tracing::{debug, info};

use super::Cli;
use crate::config::{load_file_settings, resolve};
use crate::output::{format_release, print_info, print_success, print_warning};

/// Arguments for the list command
#[derive(Args)]
pub struct ListArgs {
  /// Print the raw releases as a JSON array
  #[arg(long)]
  pub json: bool,
}

/// Arguments for the show command
#[derive(Args)]
pub struct ShowArgs {
  /// Tag of the release
  #[arg(index = 1)]
  pub tag: String,
}

/// Arguments for the create command
#[derive(Args)]
pub struct CreateArgs {
  /// Tag to create the release for (e.g. v1.2.0)
  #[arg(index = 1)]
  pub tag: String,

  /// Display name of the release
  #[arg(long)]
  pub name: Option<String>,

  /// Branch or commit the tag is created from, if it does not exist yet
  #[arg(long = "target", value_name = "COMMITISH")]
  pub target_commitish: Option<String>,

  /// Release notes
  #[arg(long, conflicts_with = "body_file")]
  pub body: Option<String>,

  /// Read release notes from a file
  #[arg(long, value_name = "PATH")]
  pub body_file: Option<PathBuf>,

  /// Create the release as a draft
  #[arg(long)]
  pub draft: bool,

  /// Mark the release as a prerelease
  #[arg(long)]
  pub prerelease: bool,

  /// Do nothing if a release for the tag already exists
  #[arg(long)]
  pub skip_existing: bool,
}

impl CreateArgs {
  /// Build the request parameters, leaving out everything not given
  fn to_params(&self) -> Result<CreateReleaseParams> {
    let mut params = CreateReleaseParams::new(self.tag.as_str());

    if let Some(name) = &self.name {
      params = params.with_name(name.as_str());
    }
    if let Some(target) = &self.target_commitish {
      params = params.with_target_commitish(target.as_str());
    }
    if let Some(body) = &self.body {
      params = params.with_body(body.as_str());
    }
    if let Some(path) = &self.body_file {
      let body =
        fs::read_to_string(path).with_context(|| format!("Failed to read release notes from {}", path.display()))?;
      params = params.with_body(body);
    }
    if self.draft {
      params = params.with_draft(true);
    }
    if self.prerelease {
      params = params.with_prerelease(true);
    }

    Ok(params)
  }
}

/// Resolve settings and build the releases client
pub(super) fn build_client(cli: &Cli) -> Result<ReleasesClient> {
  let file = load_file_settings(cli.config.as_deref())?;
  let config = resolve(&cli.overrides(), file, |key| std::env::var(key).ok())?;
  debug!("Using {:?}", config);

  ReleasesClient::new(config).context("Failed to create releases client")
}

fn runtime() -> Result<Runtime> {
  Runtime::new().context("Failed to create async runtime")
}

/// Handle the latest command
pub(super) fn handle_latest_command(client: &ReleasesClient) -> Result<()> {
  let rt = runtime()?;

  match rt
    .block_on(client.get_latest_release())
    .context("Failed to fetch the latest release")?
  {
    Some(release) => print_success(&format!("Latest release: {}", format_release(&release))),
    None => print_warning("No releases yet"),
  }

  Ok(())
}

/// Handle the list command
pub(super) fn handle_list_command(client: &ReleasesClient, args: ListArgs) -> Result<()> {
  let rt = runtime()?;
  let releases = rt.block_on(client.get_releases()).context("Failed to fetch releases")?;
  info!("Fetched {} releases", releases.len());

  if args.json {
    println!("{}", serde_json::to_string_pretty(&releases)?);
    return Ok(());
  }

  if releases.is_empty() {
    print_warning("No releases yet");
    return Ok(());
  }

  for release in &releases {
    println!("{}", format_release(release));
  }

  Ok(())
}

/// Handle the show command
pub(super) fn handle_show_command(client: &ReleasesClient, args: ShowArgs) -> Result<()> {
  let rt = runtime()?;

  match rt
    .block_on(client.get_release_by_tag(&args.tag))
    .with_context(|| format!("Failed to fetch release for tag {}", args.tag))?
  {
    Some(release) => {
      println!("{}", format_release(&release));
      Ok(())
    }
    None => bail!("No release found for tag {}", args.tag),
  }
}

/// Handle the create command
pub(super) fn handle_create_command(client: &ReleasesClient, args: CreateArgs) -> Result<()> {
  let params = args.to_params()?;
  let rt = runtime()?;

  if args.skip_existing
    && let Some(existing) = rt
      .block_on(client.get_release_by_tag(&params.tag_name))
      .with_context(|| format!("Failed to check for an existing release for tag {}", params.tag_name))?
  {
    print_info(&format!("Release already exists: {}", format_release(&existing)));
    return Ok(());
  }

  let release = rt
    .block_on(client.create_release(&params))
    .with_context(|| format!("Failed to create release for tag {}", params.tag_name))?;
  print_success(&format!("Created release {}", format_release(&release)));

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn create_args(tag: &str) -> CreateArgs {
    CreateArgs {
      tag: tag.to_string(),
      name: None,
      target_commitish: None,
      body: None,
      body_file: None,
      draft: false,
      prerelease: false,
      skip_existing: false,
    }
  }

  #[test]
  fn test_to_params_omits_unset_flags() {
    let params = create_args("v0.0.1").to_params().unwrap();
    assert_eq!(params, CreateReleaseParams::new("v0.0.1"));
  }

  #[test]
  fn test_to_params_sets_given_flags() {
    let args = CreateArgs {
      name: Some("n".to_string()),
      draft: true,
      ..create_args("v0.0.1")
    };

    let params = args.to_params().unwrap();
    assert_eq!(params, CreateReleaseParams::new("v0.0.1").with_name("n").with_draft(true));
  }

  #[test]
  fn test_to_params_reads_body_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("NOTES.md");
    fs::write(&path, "Fixed everything").unwrap();

    let args = CreateArgs {
      body_file: Some(path),
      ..create_args("v0.0.1")
    };

    let params = args.to_params().unwrap();
    assert_eq!(params.body.as_deref(), Some("Fixed everything"));
  }
}
