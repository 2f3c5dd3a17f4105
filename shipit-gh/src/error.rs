//! # Release Client Errors
//!
//! Typed failures for releases API calls. Callers can tell a local argument
//! problem, an unexpected HTTP status, and a transport failure apart.

use thiserror::Error;

/// Errors returned by [`ReleasesClient`](crate::client::ReleasesClient)
#[derive(Debug, Error)]
pub enum ReleaseError {
  /// Rejected locally before any request was sent
  #[error("Invalid argument: {0}")]
  InvalidArgument(String),

  /// The API answered with a status outside the operation's expected set
  #[error("Unexpected response from releases API: HTTP {status} - {body}")]
  UnexpectedStatus { status: u16, body: String },

  /// No usable response was obtained
  #[error("Failed to communicate with {url}")]
  Transport {
    url: String,
    #[source]
    source: reqwest::Error,
  },

  /// The response body was not the expected JSON shape
  #[error("Failed to parse response from {url}")]
  Decode {
    url: String,
    #[source]
    source: serde_json::Error,
  },

  /// The configured API URL cannot be extended with a request path
  #[error("Invalid API URL {url}")]
  InvalidUrl {
    url: String,
    #[source]
    source: Option<url::ParseError>,
  },

  #[error("Failed to build HTTP client")]
  ClientBuild(#[source] reqwest::Error),
}

impl ReleaseError {
  /// HTTP status carried by an [`ReleaseError::UnexpectedStatus`]
  pub fn status(&self) -> Option<u16> {
    match self {
      Self::UnexpectedStatus { status, .. } => Some(*status),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_unexpected_status_display_includes_body() {
    let err = ReleaseError::UnexpectedStatus {
      status: 500,
      body: "Server Error".to_string(),
    };

    assert_eq!(
      err.to_string(),
      "Unexpected response from releases API: HTTP 500 - Server Error"
    );
    assert_eq!(err.status(), Some(500));
  }

  #[test]
  fn test_status_is_none_for_local_errors() {
    let err = ReleaseError::InvalidArgument("tag name must not be blank".to_string());
    assert_eq!(err.status(), None);
  }
}
