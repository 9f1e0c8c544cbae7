//! GitHub provider implementation for forgekit.
//!
//! This crate creates repositories through the GitHub REST API, either
//! under the authenticated user or under an organization.

mod client;
mod provider;
mod types;

pub use client::GitHubClient;
pub use provider::GitHubProvider;
pub use types::*;

/// Default GitHub API URL.
pub const DEFAULT_GITHUB_URL: &str = "https://api.github.com";
