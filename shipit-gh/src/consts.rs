//! Constants for the shipit-gh client

/// Base URL for the official SaaS GitHub API
pub const API_BASE_URL: &str = "https://api.github.com";

/// User-Agent header value for the releases API client
pub const USER_AGENT: &str = concat!("shipit/", env!("CARGO_PKG_VERSION"));

/// Accept header value for the GitHub API
pub const ACCEPT: &str = "application/vnd.github.v3+json";

/// Response header carrying pagination links
pub const LINK_HEADER: &str = "link";

/// Relation name marking the next page in a `Link` header
pub const REL_NEXT: &str = "next";
