//! # Output Formatting
//!
//! Colored status lines and release summaries for terminal output.

use owo_colors::{OwoColorize, Stream};
use shipit_gh::Release;

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  Never,
}

/// Print a success message
pub fn print_success(message: &str) {
  println!("{} {}", "✓".if_supports_color(Stream::Stdout, |t| t.green()), message);
}

/// Print an error message
pub fn print_error(message: &str) {
  eprintln!("{} {}", "✗".if_supports_color(Stream::Stderr, |t| t.red()), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
  println!("{} {}", "⚠".if_supports_color(Stream::Stdout, |t| t.yellow()), message);
}

/// Print an info message
pub fn print_info(message: &str) {
  println!("{} {}", "ℹ".if_supports_color(Stream::Stdout, |t| t.blue()), message);
}

/// One-line summary of a release: tag, name, flags, and id
pub fn format_release(release: &Release) -> String {
  let tag = release.tag_name().unwrap_or("<untagged>");
  let mut line = tag.if_supports_color(Stream::Stdout, |t| t.bold()).to_string();

  if let Some(name) = release.name().filter(|name| !name.is_empty() && *name != tag) {
    line.push_str(&format!(" ({name})"));
  }
  if release.is_draft() {
    line.push_str(&format!(" {}", "[draft]".if_supports_color(Stream::Stdout, |t| t.yellow())));
  }
  if release.is_prerelease() {
    line.push_str(&format!(" {}", "[prerelease]".if_supports_color(Stream::Stdout, |t| t.cyan())));
  }
  if let Some(id) = release.id() {
    line.push_str(&format!(" #{id}"));
  }

  line
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn release(value: serde_json::Value) -> Release {
    serde_json::from_value(value).unwrap()
  }

  #[test]
  fn test_format_release() {
    owo_colors::set_override(false);

    let line = format_release(&release(json!({
      "id": 3,
      "tag_name": "v1.0.0",
      "name": "First stable",
      "draft": true,
      "prerelease": false
    })));
    assert_eq!(line, "v1.0.0 (First stable) [draft] #3");

    let line = format_release(&release(json!({ "id": 4, "tag_name": "v1.1.0", "name": "v1.1.0", "prerelease": true })));
    assert_eq!(line, "v1.1.0 [prerelease] #4");

    let line = format_release(&release(json!({})));
    assert_eq!(line, "<untagged>");
  }
}
