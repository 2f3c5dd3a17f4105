//! # GitHub Releases API Client
//!
//! Provides GitHub REST API integration for repository releases: fetching
//! the latest release, walking every page of the release list, and creating
//! new releases with optional metadata.

pub mod client;
pub mod config;
pub mod consts;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod pagination;

// Re-export the client
pub use client::{ReleasesClient, create_releases_client};
pub use config::ClientConfig;
pub use error::ReleaseError;
// Re-export models
pub use models::{CreateReleaseParams, Release};
pub use pagination::Pagination;
