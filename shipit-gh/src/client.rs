//! # GitHub HTTP Client
//!
//! HTTP client implementation for the releases API, handling authentication,
//! request building, and response classification.

use reqwest::{Client, RequestBuilder, Response};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::consts::{ACCEPT, USER_AGENT};
use crate::error::ReleaseError;

/// Represents a GitHub releases API client bound to one repository
#[derive(Debug, Clone)]
pub struct ReleasesClient {
  pub(crate) client: Client,
  pub(crate) config: ClientConfig,
}

impl ReleasesClient {
  /// Create a new client, building a transport that honors the configured
  /// timeout
  pub fn new(config: ClientConfig) -> Result<Self, ReleaseError> {
    let mut builder = Client::builder();
    if let Some(timeout) = config.timeout {
      builder = builder.timeout(timeout);
    }
    let client = builder.build().map_err(ReleaseError::ClientBuild)?;

    Ok(Self::with_http_client(config, client))
  }

  /// Create a client on top of a caller-provided transport.
  ///
  /// Proxies, retries, and timeouts are then entirely the caller's policy.
  pub fn with_http_client(config: ClientConfig, client: Client) -> Self {
    Self { client, config }
  }

  pub fn config(&self) -> &ClientConfig {
    &self.config
  }

  /// Attach the headers every API request carries
  pub(crate) fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
    let request = request.header("Accept", ACCEPT).header("User-Agent", USER_AGENT);

    match &self.config.token {
      Some(token) => request.bearer_auth(token),
      None => request,
    }
  }

  /// Issue an authenticated GET against an absolute URL
  pub(crate) async fn get(&self, url: &str) -> Result<Response, ReleaseError> {
    debug!("GET {}", url);
    self
      .authorize(self.client.get(url))
      .send()
      .await
      .map_err(|source| ReleaseError::Transport {
        url: url.to_string(),
        source,
      })
  }

  /// Read a response body as text, mapping read failures to transport errors
  pub(crate) async fn read_body(url: &str, response: Response) -> Result<String, ReleaseError> {
    response.text().await.map_err(|source| ReleaseError::Transport {
      url: url.to_string(),
      source,
    })
  }

  /// Turn a response with an unexpected status into an error carrying the body
  pub(crate) async fn unexpected_status(url: &str, response: Response) -> ReleaseError {
    let status = response.status().as_u16();
    warn!("Unexpected status from {}: HTTP {}", url, status);
    let body = match response.text().await {
      Ok(body) => body,
      Err(err) => {
        warn!("Failed to read error body from {}: {}", url, err);
        String::new()
      }
    };

    ReleaseError::UnexpectedStatus { status, body }
  }

  /// Parse a JSON body, keeping the URL for diagnostics
  pub(crate) fn decode<T: serde::de::DeserializeOwned>(url: &str, body: &str) -> Result<T, ReleaseError> {
    serde_json::from_str(body).map_err(|source| ReleaseError::Decode {
      url: url.to_string(),
      source,
    })
  }
}

/// Create a releases client for `owner/repository` from credentials
pub fn create_releases_client(
  owner: &str,
  repository: &str,
  token: Option<&str>,
) -> Result<ReleasesClient, ReleaseError> {
  let mut config = ClientConfig::new(owner, repository);
  if let Some(token) = token {
    config = config.with_token(token);
  }

  ReleasesClient::new(config)
}
