//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the shipit tool.

mod releases;

use std::path::PathBuf;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};

use crate::config::Overrides;
use crate::output::ColorMode;

/// Top-level CLI command for the shipit tool
#[derive(Parser)]
#[command(name = "shipit")]
#[command(about = "Inspect and create GitHub releases for a plugin build")]
#[command(
  long_about = "shipit talks to the GitHub releases API on behalf of a build.\n\n\
        It can show the latest release, list every release across all pages,\n\
        look up the release for a tag, and create new releases.\n\n\
        The repository and credentials come from flags, the GITHUB_USER,\n\
        GITHUB_REPOSITORY, GITHUB_ACCESS_TOKEN and GITHUB_API_URL environment\n\
        variables, or a config.toml settings file."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(long, value_enum, ignore_case = true, global = true, default_value_t = ColorMode::Auto)]
  pub colors: ColorMode,

  /// Repository owner (user or organization)
  #[arg(long, global = true, value_name = "OWNER")]
  pub owner: Option<String>,

  /// Repository name
  #[arg(long = "repo", global = true, value_name = "REPO")]
  pub repository: Option<String>,

  /// Base URL of the GitHub API
  #[arg(long, global = true, value_name = "URL")]
  pub api_url: Option<String>,

  /// Path to a settings file (defaults to the user config directory)
  #[arg(long, global = true, value_name = "PATH")]
  pub config: Option<PathBuf>,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

impl Cli {
  pub fn overrides(&self) -> Overrides {
    Overrides {
      owner: self.owner.clone(),
      repository: self.repository.clone(),
      api_url: self.api_url.clone(),
    }
  }
}

/// Subcommands for the shipit tool
#[derive(Subcommand)]
pub enum Commands {
  /// Show the latest published release
  Latest,

  /// List every release of the repository
  #[command(long_about = "List every release of the repository.\n\n\
            All pages of the releases API are fetched, in the order GitHub returns them.")]
  #[command(alias = "ls")]
  List(releases::ListArgs),

  /// Show the release for a tag
  Show(releases::ShowArgs),

  /// Create a new release
  #[command(long_about = "Create a new release for a tag.\n\n\
            Only the options you pass are sent; GitHub applies its own defaults for the rest.\n\
            Use --skip-existing to leave an already published release for the tag untouched.")]
  Create(releases::CreateArgs),
}

pub fn handle_cli(cli: Cli) -> Result<()> {
  // Set global color override based on --colors argument
  match cli.colors {
    ColorMode::Always => owo_colors::set_override(true),
    ColorMode::Never => owo_colors::set_override(false),
    ColorMode::Auto => {
      // Let owo_colors use its default auto-detection
    }
  }

  let client = releases::build_client(&cli)?;

  match cli.command {
    Commands::Latest => releases::handle_latest_command(&client),
    Commands::List(args) => releases::handle_list_command(&client, args),
    Commands::Show(args) => releases::handle_show_command(&client, args),
    Commands::Create(args) => releases::handle_create_command(&client, args),
  }
}
