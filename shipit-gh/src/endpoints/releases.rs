//! # GitHub Release Endpoints
//!
//! GitHub API endpoint implementations for repository releases, including
//! the latest release, the paginated release list, and release creation.

use reqwest::StatusCode;
use tracing::{debug, instrument};
use url::Url;

use crate::client::ReleasesClient;
use crate::error::ReleaseError;
use crate::models::{CreateReleaseParams, Release};
use crate::pagination::Pagination;

impl ReleasesClient {
  /// Get the latest published release.
  ///
  /// Returns `None` when the repository has no release yet (HTTP 404).
  #[instrument(skip(self), level = "debug")]
  pub async fn get_latest_release(&self) -> Result<Option<Release>, ReleaseError> {
    let url = format!("{}/latest", self.config.releases_url());
    self.get_optional_release(&url).await
  }

  /// Get the release for a tag, or `None` if no release uses it
  #[instrument(skip(self), level = "debug")]
  pub async fn get_release_by_tag(&self, tag: &str) -> Result<Option<Release>, ReleaseError> {
    if tag.trim().is_empty() {
      return Err(ReleaseError::InvalidArgument("tag must not be blank".to_string()));
    }

    let url = self.tag_url(tag)?;
    self.get_optional_release(&url).await
  }

  /// Get every release of the repository, following `Link: rel="next"`
  /// headers until the last page.
  ///
  /// Releases come back in the order the API returned them, page after page.
  /// A failure on any page fails the whole call.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_releases(&self) -> Result<Vec<Release>, ReleaseError> {
    let mut releases = Vec::new();
    let mut url = self.config.releases_url();
    let mut page = 1;

    loop {
      let response = self.get(&url).await?;
      if response.status() != StatusCode::OK {
        return Err(Self::unexpected_status(&url, response).await);
      }

      let pagination = Pagination::from_headers(response.headers());
      let body = Self::read_body(&url, response).await?;
      let batch: Vec<Release> = Self::decode(&url, &body)?;
      debug!(page, count = batch.len(), "Fetched releases page");
      releases.extend(batch);

      match pagination.next_url() {
        Some(next) => {
          url = next.to_string();
          page += 1;
        }
        None => break,
      }
    }

    Ok(releases)
  }

  /// Create a new release.
  ///
  /// Fails with [`ReleaseError::InvalidArgument`] before sending anything if
  /// the tag name is blank.
  #[instrument(skip(self, params), fields(tag = %params.tag_name), level = "debug")]
  pub async fn create_release(&self, params: &CreateReleaseParams) -> Result<Release, ReleaseError> {
    if params.tag_name.trim().is_empty() {
      return Err(ReleaseError::InvalidArgument("tag name must not be blank".to_string()));
    }

    let url = self.config.releases_url();
    debug!("POST {}", url);

    let response = self
      .authorize(self.client.post(&url))
      .json(params)
      .send()
      .await
      .map_err(|source| ReleaseError::Transport {
        url: url.clone(),
        source,
      })?;

    if !response.status().is_success() {
      return Err(Self::unexpected_status(&url, response).await);
    }

    let body = Self::read_body(&url, response).await?;
    Self::decode(&url, &body)
  }

  /// URL of the release for `tag`, with the tag percent-encoded as a single
  /// path segment
  fn tag_url(&self, tag: &str) -> Result<String, ReleaseError> {
    let base = self.config.releases_url();
    let mut url = Url::parse(&base).map_err(|source| ReleaseError::InvalidUrl {
      url: base.clone(),
      source: Some(source),
    })?;

    url
      .path_segments_mut()
      .map_err(|()| ReleaseError::InvalidUrl {
        url: base.clone(),
        source: None,
      })?
      .push("tags")
      .push(tag);

    Ok(url.into())
  }

  async fn get_optional_release(&self, url: &str) -> Result<Option<Release>, ReleaseError> {
    let response = self.get(url).await?;

    match response.status() {
      StatusCode::OK => {
        let body = Self::read_body(url, response).await?;
        Ok(Some(Self::decode(url, &body)?))
      }
      StatusCode::NOT_FOUND => {
        debug!("No release found at {}", url);
        Ok(None)
      }
      _ => Err(Self::unexpected_status(url, response).await),
    }
  }
}
