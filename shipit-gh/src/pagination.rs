//! # Link Header Pagination
//!
//! Parses the `Link` response header GitHub uses to announce further pages
//! of a list endpoint, e.g.
//! `<https://api.github.com/repositories/1/releases?page=2>; rel="next"`.

use reqwest::header::HeaderMap;

use crate::consts::{LINK_HEADER, REL_NEXT};

/// Pagination state derived from a single response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
  next_url: Option<String>,
}

impl Pagination {
  /// Parse a raw `Link` header value.
  ///
  /// Absent, empty, or malformed input yields a state without a next page.
  pub fn parse(link_header: Option<&str>) -> Self {
    Self {
      next_url: link_header.and_then(find_next_url),
    }
  }

  /// Read the `Link` header from a response's headers
  pub fn from_headers(headers: &HeaderMap) -> Self {
    Self::parse(headers.get(LINK_HEADER).and_then(|value| value.to_str().ok()))
  }

  /// Whether the remote announced another page
  pub fn has_next(&self) -> bool {
    self.next_url.is_some()
  }

  /// URL of the next page, verbatim from the header
  pub fn next_url(&self) -> Option<&str> {
    self.next_url.as_deref()
  }
}

/// Walk `<url>; param; ...` entries and return the first URL with
/// `rel="next"`.
///
/// URLs are delimited by angle brackets rather than commas, since page URLs
/// may themselves contain commas in their query strings.
fn find_next_url(header: &str) -> Option<String> {
  let mut rest = header;

  loop {
    let open = rest.find('<')?;
    let after_open = &rest[open + 1..];
    let close = after_open.find('>')?;
    let url = &after_open[..close];

    let tail = &after_open[close + 1..];
    let params_end = tail.find('<').unwrap_or(tail.len());
    let params = &tail[..params_end];

    if !url.is_empty() && has_next_relation(params) {
      return Some(url.to_string());
    }

    rest = &tail[params_end..];
  }
}

fn has_next_relation(params: &str) -> bool {
  params.split(';').any(|param| {
    let Some((name, value)) = param.split_once('=') else {
      return false;
    };
    if !name.trim().eq_ignore_ascii_case("rel") {
      return false;
    }

    let value = value.trim().trim_end_matches(',').trim();
    let value = value
      .strip_prefix('"')
      .and_then(|v| v.strip_suffix('"'))
      .unwrap_or(value);

    value == REL_NEXT
  })
}
