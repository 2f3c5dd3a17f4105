//! # GitHub API Endpoints
//!
//! Endpoint implementations for the releases resource of a repository.

pub mod releases;
