//! # Client Configuration
//!
//! Repository coordinates, credentials, and transport settings handed to
//! [`ReleasesClient`](crate::client::ReleasesClient) at construction time.

use std::fmt;
use std::time::Duration;

use crate::consts::API_BASE_URL;

/// Configuration for a releases API client
///
/// Built once by the embedding process and then owned by the client, which
/// only ever reads it.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
  pub owner: String,
  pub repository: String,
  pub token: Option<String>,
  pub api_url: String,
  pub timeout: Option<Duration>,
}

impl ClientConfig {
  /// Create a configuration for `owner/repository` against the public API
  pub fn new(owner: impl Into<String>, repository: impl Into<String>) -> Self {
    Self {
      owner: owner.into(),
      repository: repository.into(),
      token: None,
      api_url: API_BASE_URL.to_string(),
      timeout: None,
    }
  }

  /// Set the access token used for the `Authorization` header
  pub fn with_token(mut self, token: impl Into<String>) -> Self {
    self.token = Some(token.into());
    self
  }

  /// Point the client at a different API host (GitHub Enterprise, mocks)
  pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
    self.api_url = api_url.into();
    self
  }

  /// Set a per-request timeout for the underlying transport
  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = Some(timeout);
    self
  }

  /// Base URL of the releases collection for the configured repository
  pub fn releases_url(&self) -> String {
    format!(
      "{}/repos/{}/{}/releases",
      self.api_url.trim_end_matches('/'),
      self.owner,
      self.repository
    )
  }
}

impl fmt::Debug for ClientConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ClientConfig")
      .field("owner", &self.owner)
      .field("repository", &self.repository)
      .field("token", &self.token.as_ref().map(|_| "<redacted>"))
      .field("api_url", &self.api_url)
      .field("timeout", &self.timeout)
      .finish()
  }
}
