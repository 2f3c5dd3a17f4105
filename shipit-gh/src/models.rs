use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Represents a GitHub release as returned by the API.
///
/// Fields are kept as raw JSON so everything the remote sends is passed
/// through untouched; only a handful of accessors interpret it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Release(Map<String, Value>);

impl Release {
  /// Numeric release id
  pub fn id(&self) -> Option<u64> {
    self.0.get("id").and_then(Value::as_u64)
  }

  /// Tag the release points at
  pub fn tag_name(&self) -> Option<&str> {
    self.0.get("tag_name").and_then(Value::as_str)
  }

  /// Display name of the release
  pub fn name(&self) -> Option<&str> {
    self.0.get("name").and_then(Value::as_str)
  }

  pub fn is_draft(&self) -> bool {
    self.0.get("draft").and_then(Value::as_bool).unwrap_or(false)
  }

  pub fn is_prerelease(&self) -> bool {
    self.0.get("prerelease").and_then(Value::as_bool).unwrap_or(false)
  }

  /// Raw field lookup
  pub fn get(&self, key: &str) -> Option<&Value> {
    self.0.get(key)
  }

  pub fn as_map(&self) -> &Map<String, Value> {
    &self.0
  }

  pub fn into_inner(self) -> Map<String, Value> {
    self.0
  }
}

impl From<Map<String, Value>> for Release {
  fn from(fields: Map<String, Value>) -> Self {
    Self(fields)
  }
}

/// Parameters for creating a release.
///
/// Optional fields that were never set are left out of the request body
/// entirely; the API treats an explicit `null` differently from a missing key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateReleaseParams {
  pub tag_name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub target_commitish: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub body: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub draft: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub prerelease: Option<bool>,
}

impl CreateReleaseParams {
  pub fn new(tag_name: impl Into<String>) -> Self {
    Self {
      tag_name: tag_name.into(),
      ..Default::default()
    }
  }

  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.name = Some(name.into());
    self
  }

  pub fn with_target_commitish(mut self, target_commitish: impl Into<String>) -> Self {
    self.target_commitish = Some(target_commitish.into());
    self
  }

  pub fn with_body(mut self, body: impl Into<String>) -> Self {
    self.body = Some(body.into());
    self
  }

  pub fn with_draft(mut self, draft: bool) -> Self {
    self.draft = Some(draft);
    self
  }

  pub fn with_prerelease(mut self, prerelease: bool) -> Self {
    self.prerelease = Some(prerelease);
    self
  }
}
